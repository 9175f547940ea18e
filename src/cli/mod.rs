//! Command-line parsing for the GDP pipeline + dashboard.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the pipeline/presentation code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::MeanColumn;

/// Default location of the merged artifact, shared by all subcommands.
pub const DEFAULT_ARTIFACT: &str = "data/gdp_data.csv";

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "gdp", version, about = "World Bank GDP pipeline + terminal dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch both GDP indicator series, join them, and write the CSV artifact.
    Fetch(FetchArgs),
    /// Launch the interactive dashboard (default when no subcommand is given).
    Tui(TuiArgs),
    /// Print per-country mean tables (the dashboard's bar charts, as text).
    Summary(SummaryArgs),
}

/// Options for the ingestion job.
#[derive(Debug, Parser, Clone)]
pub struct FetchArgs {
    /// First year of the requested range.
    #[arg(long, default_value_t = 2000)]
    pub from: i32,

    /// Last year of the requested range (defaults to the current year).
    #[arg(long)]
    pub to: Option<i32>,

    /// Page size requested from the API (single page, no pagination loop).
    #[arg(long, default_value_t = 2000)]
    pub per_page: usize,

    /// Output CSV path (overwritten if present).
    #[arg(short = 'o', long, default_value = DEFAULT_ARTIFACT)]
    pub out: PathBuf,
}

/// Options for the dashboard.
#[derive(Debug, Parser, Clone)]
pub struct TuiArgs {
    /// Merged GDP CSV to load.
    #[arg(short = 'f', long, default_value = DEFAULT_ARTIFACT)]
    pub file: PathBuf,
}

/// Options for the text summary.
#[derive(Debug, Parser, Clone)]
pub struct SummaryArgs {
    /// Merged GDP CSV to load.
    #[arg(short = 'f', long, default_value = DEFAULT_ARTIFACT)]
    pub file: PathBuf,

    /// Column to average; omit to print both tables.
    #[arg(long, value_enum)]
    pub column: Option<MeanColumn>,

    /// Show top-N countries per table.
    #[arg(long, default_value_t = 20)]
    pub top: usize,
}
