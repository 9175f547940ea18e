//! Remote data acquisition.
//!
//! - World Bank indicator API client (`worldbank`)
//! - inner join of the two indicator series

pub mod worldbank;

pub use worldbank::*;
