//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - raw API records (`IndicatorRecord`) and joined rows (`MergedRow`)
//! - the loaded table (`GdpTable`, `GdpRow`)
//! - small value types shared by the CLI and the dashboard

pub mod types;

pub use types::*;
