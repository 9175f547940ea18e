//! CSV load and normalization.
//!
//! This module turns the merged GDP artifact into a `GdpTable` that is safe
//! to filter and chart.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 3)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Derived column at load time** (`log_gdp`), never halting on bad values

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{GdpRow, GdpTable};
use crate::error::AppError;

/// Column names the loader requires (normalized form).
pub const REQUIRED_COLUMNS: [&str; 4] =
    ["country", "year", "gdp (current us$)", "gdp growth (%)"];

/// A row-level error encountered during load.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// Load output: the table plus bookkeeping about skipped rows.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub table: GdpTable,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
    pub rows_used: usize,
}

/// Load the merged CSV artifact into a `GdpTable`.
///
/// Missing file or missing required columns is a data error naming the path
/// and the expected schema. Rows with unparseable values are skipped and
/// reported via `row_errors`; a non-positive GDP keeps its row but gets
/// `log_gdp = None`.
pub fn load_table(path: &Path) -> Result<LoadedTable, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::data(format!(
            "Failed to open GDP CSV '{}': {e}\nExpected a merged artifact (run `gdp fetch`) with columns: {}.",
            path.display(),
            REQUIRED_COLUMNS.join(", "),
        ))
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| AppError::data(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    ensure_required_columns_exist(path, &header_map)?;

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(row) => rows.push(row),
            Err(message) => row_errors.push(RowError { line, message }),
        }
    }

    let rows_used = rows.len();
    let table = GdpTable::from_rows(rows).ok_or_else(|| {
        AppError::data(format!(
            "No usable rows in '{}' (read {rows_read}, {} rejected).",
            path.display(),
            row_errors.len(),
        ))
    })?;

    Ok(LoadedTable {
        table,
        row_errors,
        rows_read,
        rows_used,
    })
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header (e.g. "﻿Country"). If we don't strip it, schema validation
    // will incorrectly report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_required_columns_exist(
    path: &Path,
    header_map: &HashMap<String, usize>,
) -> Result<(), AppError> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| !header_map.contains_key(*name))
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    Err(AppError::data(format!(
        "'{}' is missing required column(s): {}. Required columns: {}.",
        path.display(),
        missing.join(", "),
        REQUIRED_COLUMNS.join(", "),
    )))
}

fn parse_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<GdpRow, String> {
    let country = get_required(record, header_map, "country")?.to_string();
    let year = get_required(record, header_map, "year")?
        .parse::<i32>()
        .map_err(|e| format!("Invalid `Year` value: {e}"))?;
    let gdp_current = parse_f64(get_required(record, header_map, "gdp (current us$)")?)
        .ok_or_else(|| "Invalid `GDP (Current US$)` value.".to_string())?;
    let gdp_growth = parse_f64(get_required(record, header_map, "gdp growth (%)")?)
        .ok_or_else(|| "Invalid `GDP Growth (%)` value.".to_string())?;

    let country_code = get_optional(record, header_map, "country code")
        .unwrap_or("")
        .to_string();

    Ok(GdpRow {
        country,
        country_code,
        year,
        gdp_current,
        gdp_growth,
        log_gdp: GdpRow::log_gdp_of(gdp_current),
    })
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn get_optional<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

fn parse_f64(s: &str) -> Option<f64> {
    let v = s.parse::<f64>().ok()?;
    if v.is_finite() { Some(v) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn load_basic_table() {
        let file = write_temp_csv(
            "Country,Country Code,Year,GDP (Current US$),GDP Growth (%)\n\
             United States,US,2020,2.1e13,5.0\n\
             France,FR,2020,2.6e12,1.5\n",
        );

        let loaded = load_table(file.path()).unwrap();
        assert_eq!(loaded.rows_used, 2);
        assert!(loaded.row_errors.is_empty());
        assert_eq!(loaded.table.year_min, 2020);
        assert_eq!(loaded.table.countries, vec!["France", "United States"]);

        let us = &loaded.table.rows[0];
        assert_eq!(us.country_code, "US");
        let log = us.log_gdp.unwrap();
        assert!((log - 13.322).abs() < 0.001);
    }

    #[test]
    fn non_positive_gdp_keeps_row_without_log() {
        let file = write_temp_csv(
            "Country,Year,GDP (Current US$),GDP Growth (%)\n\
             Atlantis,2010,0.0,-1.0\n\
             Lemuria,2010,-5.0,2.0\n",
        );

        let loaded = load_table(file.path()).unwrap();
        assert_eq!(loaded.rows_used, 2);
        assert_eq!(loaded.table.rows[0].log_gdp, None);
        assert_eq!(loaded.table.rows[1].log_gdp, None);
    }

    #[test]
    fn missing_column_names_schema() {
        let file = write_temp_csv("Country,Year,GDP Growth (%)\nX,2010,1.0\n");

        let err = load_table(file.path()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        let msg = err.to_string();
        assert!(msg.contains("gdp (current us$)"));
        assert!(msg.contains("Required columns"));
    }

    #[test]
    fn missing_file_is_data_error() {
        let err = load_table(Path::new("/nonexistent/gdp_data.csv")).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("/nonexistent/gdp_data.csv"));
    }

    #[test]
    fn bad_rows_are_reported_not_fatal() {
        let file = write_temp_csv(
            "Country,Year,GDP (Current US$),GDP Growth (%)\n\
             Good,2010,1.0e12,2.0\n\
             Bad,not-a-year,1.0e12,2.0\n",
        );

        let loaded = load_table(file.path()).unwrap();
        assert_eq!(loaded.rows_read, 2);
        assert_eq!(loaded.rows_used, 1);
        assert_eq!(loaded.row_errors.len(), 1);
        assert_eq!(loaded.row_errors[0].line, 3);
    }

    #[test]
    fn bom_header_is_tolerated() {
        let file = write_temp_csv(
            "\u{feff}Country,Year,GDP (Current US$),GDP Growth (%)\nX,2010,1.0e12,2.0\n",
        );
        let loaded = load_table(file.path()).unwrap();
        assert_eq!(loaded.rows_used, 1);
    }
}
