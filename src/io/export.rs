//! CSV writers for the merged artifact and filtered-view exports.
//!
//! The artifact written here is what `ingest::load_table` consumes; the
//! column names must stay in sync with `ingest::REQUIRED_COLUMNS`.

use std::path::Path;

use crate::domain::{GdpRow, MergedRow};
use crate::error::AppError;

/// Header of the merged artifact, in the order the ingestion job produces it.
const MERGED_HEADER: [&str; 9] = [
    "Country",
    "Country Code",
    "Year",
    "Indicator Name (Growth)",
    "Indicator Code (Growth)",
    "GDP Growth (%)",
    "Indicator Name (Current US$)",
    "Indicator Code (Current US$)",
    "GDP (Current US$)",
];

/// Write the merged series to `path`, overwriting any existing file.
pub fn write_merged_csv(rows: &[MergedRow], path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::usage(format!(
                    "Failed to create output directory '{}': {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::usage(format!("Failed to create CSV '{}': {e}", path.display()))
    })?;

    writer
        .write_record(MERGED_HEADER)
        .map_err(|e| AppError::usage(format!("Failed to write CSV header: {e}")))?;

    for row in rows {
        writer
            .write_record([
                row.country.as_str(),
                row.country_code.as_str(),
                &row.year.to_string(),
                row.growth_indicator_name.as_str(),
                row.growth_indicator_code.as_str(),
                &format_value(row.gdp_growth),
                row.current_indicator_name.as_str(),
                row.current_indicator_code.as_str(),
                &format_value(row.gdp_current),
            ])
            .map_err(|e| AppError::usage(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::usage(format!("Failed to flush CSV '{}': {e}", path.display())))?;

    Ok(())
}

/// Write a filtered view to `path` in the loader's schema, so the export is
/// itself loadable.
pub fn write_view_csv(rows: &[GdpRow], path: &Path) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| {
        AppError::usage(format!("Failed to create CSV '{}': {e}", path.display()))
    })?;

    writer
        .write_record([
            "Country",
            "Country Code",
            "Year",
            "GDP (Current US$)",
            "GDP Growth (%)",
        ])
        .map_err(|e| AppError::usage(format!("Failed to write CSV header: {e}")))?;

    for row in rows {
        writer
            .write_record([
                row.country.as_str(),
                row.country_code.as_str(),
                &row.year.to_string(),
                &format_value(row.gdp_current),
                &format_value(row.gdp_growth),
            ])
            .map_err(|e| AppError::usage(format!("Failed to write CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::usage(format!("Failed to flush CSV '{}': {e}", path.display())))?;

    Ok(())
}

// f64 Display prints the shortest representation that round-trips, which
// keeps the artifact lossless for the loader.
fn format_value(v: f64) -> String {
    format!("{v}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::join_series;
    use crate::domain::IndicatorRecord;
    use crate::io::ingest::load_table;

    fn record(country: &str, code: &str, year: i32, name: &str, icode: &str, value: f64) -> IndicatorRecord {
        IndicatorRecord {
            country: country.to_string(),
            country_code: code.to_string(),
            year,
            indicator_name: name.to_string(),
            indicator_code: icode.to_string(),
            value,
        }
    }

    #[test]
    fn merged_round_trip_preserves_key_set() {
        let growth = vec![
            record("United States", "US", 2020, "GDP growth (annual %)", "NY.GDP.MKTP.KD.ZG", 5.0),
            record("France", "FR", 2019, "GDP growth (annual %)", "NY.GDP.MKTP.KD.ZG", 1.5),
            record("Orphan", "OR", 2018, "GDP growth (annual %)", "NY.GDP.MKTP.KD.ZG", 0.1),
        ];
        let current = vec![
            record("United States", "US", 2020, "GDP (current US$)", "NY.GDP.MKTP.CD", 2.1e13),
            record("France", "FR", 2019, "GDP (current US$)", "NY.GDP.MKTP.CD", 2.7e12),
        ];

        let merged = join_series(&growth, &current);
        assert_eq!(merged.len(), 2);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merged_gdp_data.csv");
        write_merged_csv(&merged, &path).unwrap();

        let loaded = load_table(&path).unwrap();
        assert!(loaded.row_errors.is_empty());

        let mut written: Vec<(String, i32)> = merged
            .iter()
            .map(|r| (r.country.clone(), r.year))
            .collect();
        let mut reloaded: Vec<(String, i32)> = loaded
            .table
            .rows
            .iter()
            .map(|r| (r.country.clone(), r.year))
            .collect();
        written.sort();
        reloaded.sort();
        assert_eq!(written, reloaded);

        let us = loaded
            .table
            .rows
            .iter()
            .find(|r| r.country == "United States")
            .unwrap();
        assert!((us.gdp_current - 2.1e13).abs() < 1.0);
        assert!((us.gdp_growth - 5.0).abs() < 1e-9);
        assert!((us.log_gdp.unwrap() - 13.322).abs() < 0.001);
    }

    #[test]
    fn view_export_is_loadable() {
        let rows = vec![crate::domain::GdpRow {
            country: "Japan".to_string(),
            country_code: "JP".to_string(),
            year: 2015,
            gdp_current: 4.4e12,
            gdp_growth: 1.2,
            log_gdp: crate::domain::GdpRow::log_gdp_of(4.4e12),
        }];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view.csv");
        write_view_csv(&rows, &path).unwrap();

        let loaded = load_table(&path).unwrap();
        assert_eq!(loaded.rows_used, 1);
        assert_eq!(loaded.table.rows[0].country, "Japan");
        assert_eq!(loaded.table.rows[0].country_code, "JP");
    }
}
