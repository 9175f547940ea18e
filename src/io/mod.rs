//! Input/output helpers.
//!
//! - CSV load + schema validation (`ingest`)
//! - CSV artifact/export writers (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
