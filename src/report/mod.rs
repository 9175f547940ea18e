//! Aggregation and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the pipeline/filter code stays clean and testable
//! - output changes are localized

mod format;

pub use format::*;

use crate::domain::{GdpRow, MeanColumn};

/// Per-country mean over one column of a filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryMean {
    pub country: String,
    pub mean: f64,
}

/// Compute per-country means, sorted descending by value.
///
/// Ties break alphabetically so the ordering is deterministic. An empty view
/// yields an empty result.
pub fn mean_by_country(rows: &[GdpRow], column: MeanColumn) -> Vec<CountryMean> {
    // (sum, count) per country, insertion-ordered by first appearance.
    let mut sums: Vec<(String, f64, usize)> = Vec::new();
    for row in rows {
        let value = column.value_of(row);
        match sums.iter_mut().find(|(c, _, _)| c == &row.country) {
            Some((_, sum, count)) => {
                *sum += value;
                *count += 1;
            }
            None => sums.push((row.country.clone(), value, 1)),
        }
    }

    let mut means: Vec<CountryMean> = sums
        .into_iter()
        .map(|(country, sum, count)| CountryMean {
            country,
            mean: sum / count as f64,
        })
        .collect();

    means.sort_by(|a, b| {
        b.mean
            .partial_cmp(&a.mean)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.country.cmp(&b.country))
    });

    means
}
