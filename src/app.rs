//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the ingestion job (`fetch`)
//! - launches the dashboard (`tui`)
//! - prints the text summary (`summary`)

use chrono::Datelike;
use clap::Parser;

use crate::cli::{Command, FetchArgs, SummaryArgs};
use crate::data::{CURRENT_INDICATOR, GROWTH_INDICATOR, WorldBankClient, join_series};
use crate::domain::{DateRange, MeanColumn};
use crate::error::AppError;

pub mod session;

/// Entry point for the `gdp` binary.
pub fn run() -> Result<(), AppError> {
    // We want bare `gdp` and `gdp -f file.csv` to behave like `gdp tui ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fetch(args) => handle_fetch(args),
        Command::Tui(args) => crate::tui::run(args),
        Command::Summary(args) => handle_summary(args),
    }
}

fn handle_fetch(args: FetchArgs) -> Result<(), AppError> {
    let to = args.to.unwrap_or_else(|| chrono::Local::now().year());
    let range = DateRange {
        start: args.from,
        end: to,
    };
    if range.start > range.end {
        return Err(AppError::usage(format!(
            "Invalid date range {}: start must not exceed end.",
            range.as_query()
        )));
    }

    let client = WorldBankClient::from_env();

    println!("Fetching GDP growth ({GROWTH_INDICATOR}) for {}...", range.as_query());
    let growth = client.fetch_indicator(GROWTH_INDICATOR, range, args.per_page)?;
    println!("Fetching GDP current US$ ({CURRENT_INDICATOR}) for {}...", range.as_query());
    let current = client.fetch_indicator(CURRENT_INDICATOR, range, args.per_page)?;

    let merged = join_series(&growth, &current);

    // Both fetches and the join are complete before anything is written, so a
    // failure above never leaves a partial artifact.
    crate::io::export::write_merged_csv(&merged, &args.out)?;

    println!(
        "Wrote {} merged rows to {} (growth: {}, current: {}).",
        merged.len(),
        args.out.display(),
        growth.len(),
        current.len(),
    );

    Ok(())
}

fn handle_summary(args: SummaryArgs) -> Result<(), AppError> {
    let session = session::Session::open(&args.file)?;
    let output = session.recompute_full();

    print!(
        "{}",
        crate::report::format_load_summary(&session.loaded, &args.file)
    );
    println!();

    let columns: Vec<MeanColumn> = match args.column {
        Some(column) => vec![column],
        None => vec![MeanColumn::Gdp, MeanColumn::Growth],
    };
    for (idx, column) in columns.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        let means = match column {
            MeanColumn::Gdp => &output.mean_gdp,
            MeanColumn::Growth => &output.mean_growth,
        };
        print!("{}", crate::report::format_means(means, *column, args.top));
    }

    Ok(())
}

/// Rewrite argv so `gdp` defaults to `gdp tui`.
///
/// Rules:
/// - `gdp`                     -> `gdp tui`
/// - `gdp -f data.csv ...`     -> `gdp tui -f data.csv ...`
/// - `gdp --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("tui".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fetch" | "tui" | "summary");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "tui flags".
    if arg1.starts_with('-') {
        argv.insert(1, "tui".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("gdp")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn bare_invocation_defaults_to_tui() {
        assert_eq!(rewrite_args(argv(&[])), argv(&["tui"]));
        assert_eq!(rewrite_args(argv(&["-f", "x.csv"])), argv(&["tui", "-f", "x.csv"]));
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        assert_eq!(rewrite_args(argv(&["fetch"])), argv(&["fetch"]));
        assert_eq!(rewrite_args(argv(&["summary", "--top", "5"])), argv(&["summary", "--top", "5"]));
        assert_eq!(rewrite_args(argv(&["--help"])), argv(&["--help"]));
    }
}
