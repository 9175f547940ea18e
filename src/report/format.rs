//! Formatted terminal output for `gdp summary`.

use std::path::Path;

use crate::domain::MeanColumn;
use crate::io::ingest::LoadedTable;
use crate::report::CountryMean;

/// Format the load summary (artifact path + dataset stats).
pub fn format_load_summary(loaded: &LoadedTable, path: &Path) -> String {
    let mut out = String::new();

    out.push_str("=== gdp - World Bank GDP summary ===\n");
    out.push_str(&format!("Artifact: {}\n", path.display()));
    out.push_str(&format!(
        "Rows: {} used / {} read ({} rejected)\n",
        loaded.rows_used,
        loaded.rows_read,
        loaded.row_errors.len(),
    ));
    out.push_str(&format!(
        "Years: {}..{} | Countries: {}\n",
        loaded.table.year_min,
        loaded.table.year_max,
        loaded.table.countries.len(),
    ));

    out
}

/// Format one per-country mean table, top-N rows.
pub fn format_means(means: &[CountryMean], column: MeanColumn, top_n: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("Mean {} by country:\n", column.display_name()));
    out.push_str(format!("{:<4} {:<32} {:>18}\n", "#", "country", "mean").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<4} {:-<32} {:-<18}\n", "", "", "").trim_end());
    out.push('\n');

    for (idx, m) in means.iter().take(top_n).enumerate() {
        out.push_str(
            format!(
                "{:<4} {:<32} {:>18}\n",
                idx + 1,
                truncate(&m.country, 32),
                fmt_mean(m.mean, column),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    if means.is_empty() {
        out.push_str("(no rows)\n");
    }

    out
}

fn fmt_mean(v: f64, column: MeanColumn) -> String {
    match column {
        // GDP levels span many orders of magnitude; scientific keeps columns aligned.
        MeanColumn::Gdp => format!("{v:.4e}"),
        MeanColumn::Growth => format!("{v:.3}"),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
