//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - produced by the ingestion job and written to CSV
//! - reloaded later by the dashboard
//! - filtered/aggregated in-memory without copies of the full table

use clap::ValueEnum;

/// One parsed World Bank API entry.
///
/// Entries whose `value` is null in the API response are dropped before this
/// type is constructed, so `value` is always present here.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRecord {
    pub country: String,
    pub country_code: String,
    pub year: i32,
    pub indicator_name: String,
    pub indicator_code: String,
    pub value: f64,
}

/// Inner join of a growth record and a current-US$ record on
/// (country, country code, year).
///
/// A row exists only if both series reported a non-null value for the key.
/// Both indicator name/code pairs are carried so the CSV artifact keeps the
/// provenance columns.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRow {
    pub country: String,
    pub country_code: String,
    pub year: i32,
    pub growth_indicator_name: String,
    pub growth_indicator_code: String,
    pub gdp_growth: f64,
    pub current_indicator_name: String,
    pub current_indicator_code: String,
    pub gdp_current: f64,
}

/// One row of the loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct GdpRow {
    pub country: String,
    /// ISO2 country code; empty if the CSV did not carry the column.
    pub country_code: String,
    pub year: i32,
    /// GDP in current US$.
    pub gdp_current: f64,
    /// Annual GDP growth in percent.
    pub gdp_growth: f64,
    /// `log10(gdp_current)`, computed at load time.
    ///
    /// `None` when GDP is zero, negative, or non-finite; the row itself is
    /// still kept.
    pub log_gdp: Option<f64>,
}

impl GdpRow {
    /// Compute the log-GDP column for a GDP value.
    pub fn log_gdp_of(gdp_current: f64) -> Option<f64> {
        if gdp_current.is_finite() && gdp_current > 0.0 {
            Some(gdp_current.log10())
        } else {
            None
        }
    }
}

/// The loaded artifact: ordered rows plus precomputed bounds.
///
/// Row order is the file order; the filter engine preserves it. The table is
/// read-only for the duration of a session.
#[derive(Debug, Clone)]
pub struct GdpTable {
    pub rows: Vec<GdpRow>,
    pub year_min: i32,
    pub year_max: i32,
    /// Distinct countries, sorted alphabetically.
    pub countries: Vec<String>,
}

impl GdpTable {
    /// Build a table from rows, computing year bounds and the country list.
    ///
    /// Returns `None` when `rows` is empty (no bounds exist).
    pub fn from_rows(rows: Vec<GdpRow>) -> Option<Self> {
        let mut year_min = i32::MAX;
        let mut year_max = i32::MIN;
        let mut countries: Vec<String> = Vec::new();

        for row in &rows {
            year_min = year_min.min(row.year);
            year_max = year_max.max(row.year);
            if !countries.iter().any(|c| c == &row.country) {
                countries.push(row.country.clone());
            }
        }

        if rows.is_empty() {
            return None;
        }
        countries.sort();

        Some(Self {
            rows,
            year_min,
            year_max,
            countries,
        })
    }
}

/// Which column a per-country mean is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MeanColumn {
    /// GDP in current US$.
    Gdp,
    /// GDP growth (%).
    Growth,
}

impl MeanColumn {
    /// Human-readable label for terminal output and chart titles.
    pub fn display_name(self) -> &'static str {
        match self {
            MeanColumn::Gdp => "GDP (Current US$)",
            MeanColumn::Growth => "GDP Growth (%)",
        }
    }

    /// Extract this column's value from a row.
    pub fn value_of(self, row: &GdpRow) -> f64 {
        match self {
            MeanColumn::Gdp => row.gdp_current,
            MeanColumn::Growth => row.gdp_growth,
        }
    }
}

/// Inclusive year range requested from the API (`date=<start>:<end>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: i32,
    pub end: i32,
}

impl DateRange {
    /// Query-parameter form, e.g. `2000:2020`.
    pub fn as_query(&self) -> String {
        format!("{}:{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, year: i32, gdp: f64) -> GdpRow {
        GdpRow {
            country: country.to_string(),
            country_code: String::new(),
            year,
            gdp_current: gdp,
            gdp_growth: 0.0,
            log_gdp: GdpRow::log_gdp_of(gdp),
        }
    }

    #[test]
    fn log_gdp_none_for_non_positive() {
        assert_eq!(GdpRow::log_gdp_of(0.0), None);
        assert_eq!(GdpRow::log_gdp_of(-5.0), None);
        assert_eq!(GdpRow::log_gdp_of(f64::NAN), None);
        let log = GdpRow::log_gdp_of(2.1e13).unwrap();
        assert!((log - 13.322).abs() < 0.001);
    }

    #[test]
    fn from_rows_computes_bounds_and_countries() {
        let table = GdpTable::from_rows(vec![
            row("Brazil", 2010, 1.0e12),
            row("Albania", 2005, 1.0e10),
            row("Brazil", 2015, 2.0e12),
        ])
        .unwrap();

        assert_eq!(table.year_min, 2005);
        assert_eq!(table.year_max, 2015);
        assert_eq!(table.countries, vec!["Albania", "Brazil"]);
    }

    #[test]
    fn from_rows_empty_is_none() {
        assert!(GdpTable::from_rows(Vec::new()).is_none());
    }
}
