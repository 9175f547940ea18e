//! World Bank indicator API integration.
//!
//! The indicator endpoint returns a two-element JSON array: a pagination
//! metadata object followed by the record list. We request a single page
//! large enough to hold the whole series (`per_page`); there is deliberately
//! no retry or pagination loop here.

use std::collections::HashMap;

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::{DateRange, IndicatorRecord, MergedRow};
use crate::error::AppError;

const DEFAULT_BASE_URL: &str = "http://api.worldbank.org/v2";

/// GDP growth (annual %).
pub const GROWTH_INDICATOR: &str = "NY.GDP.MKTP.KD.ZG";
/// GDP (current US$).
pub const CURRENT_INDICATOR: &str = "NY.GDP.MKTP.CD";

pub struct WorldBankClient {
    client: Client,
    base_url: String,
}

impl WorldBankClient {
    /// Build a client, honoring a `WB_API_BASE` override from the
    /// environment (`.env` supported).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var("WB_API_BASE").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch one indicator series as parsed records.
    ///
    /// Entries with a null value are dropped. Transport failure, a non-2xx
    /// status, or a malformed body all abort with a network error.
    pub fn fetch_indicator(
        &self,
        indicator_code: &str,
        date_range: DateRange,
        per_page: usize,
    ) -> Result<Vec<IndicatorRecord>, AppError> {
        let url = format!(
            "{}/country/all/indicator/{indicator_code}",
            self.base_url.trim_end_matches('/')
        );

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("format", "json"),
                ("date", &date_range.as_query()),
                ("per_page", &per_page.to_string()),
            ])
            .send()
            .map_err(|e| AppError::network(format!("World Bank request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::network(format!(
                "World Bank request for {indicator_code} failed with status {}.",
                resp.status()
            )));
        }

        let body = resp
            .text()
            .map_err(|e| AppError::network(format!("Failed to read World Bank response: {e}")))?;

        parse_indicator_response(&body)
    }
}

/// Parse an indicator response body into records.
///
/// Kept separate from the HTTP call so the parse is testable offline.
pub fn parse_indicator_response(body: &str) -> Result<Vec<IndicatorRecord>, AppError> {
    let response: IndicatorResponse = serde_json::from_str(body)
        .map_err(|e| AppError::network(format!("Failed to parse World Bank response: {e}")))?;

    let mut out = Vec::with_capacity(response.1.len());
    for entry in response.1 {
        // Null values mean the indicator was not reported for that key.
        let Some(value) = entry.value else {
            continue;
        };
        if !value.is_finite() {
            continue;
        }
        let year = entry.date.trim().parse::<i32>().map_err(|e| {
            AppError::network(format!("Invalid World Bank date '{}': {e}", entry.date))
        })?;

        out.push(IndicatorRecord {
            country: entry.country.value,
            country_code: entry.country.id,
            year,
            indicator_name: entry.indicator.value,
            indicator_code: entry.indicator.id,
            value,
        });
    }

    Ok(out)
}

/// Inner-join the growth and current-US$ series on (country, code, year).
///
/// Output order follows the growth input. One record per key per series is
/// assumed; a duplicate key in `current` keeps the last occurrence.
pub fn join_series(growth: &[IndicatorRecord], current: &[IndicatorRecord]) -> Vec<MergedRow> {
    let mut by_key: HashMap<(&str, &str, i32), &IndicatorRecord> =
        HashMap::with_capacity(current.len());
    for rec in current {
        by_key.insert((rec.country.as_str(), rec.country_code.as_str(), rec.year), rec);
    }

    let mut out = Vec::new();
    for g in growth {
        let key = (g.country.as_str(), g.country_code.as_str(), g.year);
        let Some(c) = by_key.get(&key) else {
            continue;
        };
        out.push(MergedRow {
            country: g.country.clone(),
            country_code: g.country_code.clone(),
            year: g.year,
            growth_indicator_name: g.indicator_name.clone(),
            growth_indicator_code: g.indicator_code.clone(),
            gdp_growth: g.value,
            current_indicator_name: c.indicator_name.clone(),
            current_indicator_code: c.indicator_code.clone(),
            gdp_current: c.value,
        });
    }

    out
}

// `[metadata, records]` — serde deserializes the two-element array into the
// tuple struct positionally.
#[derive(Debug, Deserialize)]
struct IndicatorResponse(PageMeta, Vec<Entry>);

// Pagination metadata is not used (single-page fetch); an empty struct
// accepts the object while ignoring its fields, whose types vary by mirror.
#[derive(Debug, Deserialize)]
struct PageMeta {}

#[derive(Debug, Deserialize)]
struct Entry {
    indicator: RefField,
    country: RefField,
    date: String,
    value: Option<f64>,
}

/// `{ "id": ..., "value": ... }` pairs the API uses for indicator/country.
#[derive(Debug, Deserialize)]
struct RefField {
    id: String,
    value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, code: &str, year: i32, value: f64) -> IndicatorRecord {
        IndicatorRecord {
            country: country.to_string(),
            country_code: code.to_string(),
            year,
            indicator_name: "x".to_string(),
            indicator_code: "X".to_string(),
            value,
        }
    }

    #[test]
    fn parse_drops_null_values() {
        let body = r#"[
            {"page": 1, "pages": 1, "per_page": 2000, "total": 3},
            [
                {"indicator": {"id": "NY.GDP.MKTP.CD", "value": "GDP (current US$)"},
                 "country": {"id": "US", "value": "United States"},
                 "date": "2020", "value": 2.1e13},
                {"indicator": {"id": "NY.GDP.MKTP.CD", "value": "GDP (current US$)"},
                 "country": {"id": "US", "value": "United States"},
                 "date": "2019", "value": null}
            ]
        ]"#;

        let records = parse_indicator_response(body).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "United States");
        assert_eq!(records[0].country_code, "US");
        assert_eq!(records[0].year, 2020);
        assert!((records[0].value - 2.1e13).abs() < 1.0);
    }

    #[test]
    fn parse_rejects_malformed_body() {
        assert!(parse_indicator_response("not json").is_err());
        // Error responses are a one-element array, which fails the
        // two-element shape.
        assert!(parse_indicator_response(r#"[{"message": []}]"#).is_err());
    }

    #[test]
    fn join_keeps_only_common_keys() {
        let growth = vec![
            record("United States", "US", 2020, 5.0),
            record("United States", "US", 2019, 2.2),
            record("France", "FR", 2020, 1.5),
        ];
        let current = vec![
            record("United States", "US", 2020, 2.1e13),
            record("Germany", "DE", 2020, 3.8e12),
        ];

        let rows = join_series(&growth, &current);
        assert_eq!(rows.len(), 1);
        assert!(rows.len() <= growth.len().min(current.len()));
        assert_eq!(rows[0].country, "United States");
        assert_eq!(rows[0].year, 2020);
        assert!((rows[0].gdp_growth - 5.0).abs() < 1e-12);
        assert!((rows[0].gdp_current - 2.1e13).abs() < 1.0);
    }

    #[test]
    fn join_output_keys_exist_in_both_inputs() {
        let growth = vec![
            record("A", "AA", 2000, 1.0),
            record("B", "BB", 2001, 2.0),
            record("C", "CC", 2002, 3.0),
        ];
        let current = vec![
            record("B", "BB", 2001, 10.0),
            record("C", "CC", 2003, 20.0),
        ];

        let rows = join_series(&growth, &current);
        for row in &rows {
            let key_in = |recs: &[IndicatorRecord]| {
                recs.iter().any(|r| {
                    r.country == row.country
                        && r.country_code == row.country_code
                        && r.year == row.year
                })
            };
            assert!(key_in(&growth));
            assert!(key_in(&current));
        }
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn join_preserves_growth_order() {
        let growth = vec![
            record("B", "BB", 2001, 1.0),
            record("A", "AA", 2000, 2.0),
        ];
        let current = vec![
            record("A", "AA", 2000, 10.0),
            record("B", "BB", 2001, 20.0),
        ];

        let rows = join_series(&growth, &current);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].country, "B");
        assert_eq!(rows[1].country, "A");
    }
}
