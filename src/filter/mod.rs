//! Reactive filter state and the pure filter function.
//!
//! The dashboard recomputes its view on every input event, so `apply_filter`
//! must stay pure, deterministic, and order-preserving. State mutation lives
//! on `FilterState`; nothing here touches the table.

use std::collections::BTreeSet;

use crate::domain::{GdpRow, GdpTable};

/// Default number of preselected countries on first load.
const DEFAULT_COUNTRY_COUNT: usize = 5;

/// The current UI-selected subset constraints.
///
/// Initialized from the full table; mutated only by UI input; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Inclusive year range, kept within the table's bounds.
    pub year_range: (i32, i32),
    pub countries: BTreeSet<String>,
}

impl FilterState {
    /// Initial state: full year span, first five countries alphabetically.
    pub fn for_table(table: &GdpTable) -> Self {
        let countries = table
            .countries
            .iter()
            .take(DEFAULT_COUNTRY_COUNT)
            .cloned()
            .collect();

        Self {
            year_range: (table.year_min, table.year_max),
            countries,
        }
    }

    /// Move the lower year bound, clamped to the table and to the upper bound.
    pub fn adjust_year_min(&mut self, delta: i32, table: &GdpTable) {
        let next = (self.year_range.0 + delta)
            .clamp(table.year_min, self.year_range.1);
        self.year_range.0 = next;
    }

    /// Move the upper year bound, clamped to the table and to the lower bound.
    pub fn adjust_year_max(&mut self, delta: i32, table: &GdpTable) {
        let next = (self.year_range.1 + delta)
            .clamp(self.year_range.0, table.year_max);
        self.year_range.1 = next;
    }

    /// Toggle a country's membership in the selected set.
    pub fn toggle_country(&mut self, country: &str) {
        if !self.countries.remove(country) {
            self.countries.insert(country.to_string());
        }
    }
}

/// The filtered subset derived from the table; recomputed per event.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView {
    pub rows: Vec<GdpRow>,
}

impl FilteredView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Keep rows within the year range (inclusive) whose country is selected.
///
/// Pure and stable on the input row order.
pub fn apply_filter(rows: &[GdpRow], state: &FilterState) -> FilteredView {
    let (y0, y1) = state.year_range;
    let rows = rows
        .iter()
        .filter(|row| row.year >= y0 && row.year <= y1 && state.countries.contains(&row.country))
        .cloned()
        .collect();

    FilteredView { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GdpRow;

    fn row(country: &str, year: i32) -> GdpRow {
        GdpRow {
            country: country.to_string(),
            country_code: String::new(),
            year,
            gdp_current: 1.0e12,
            gdp_growth: 1.0,
            log_gdp: GdpRow::log_gdp_of(1.0e12),
        }
    }

    fn state(y0: i32, y1: i32, countries: &[&str]) -> FilterState {
        FilterState {
            year_range: (y0, y1),
            countries: countries.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn keeps_matching_rows_only() {
        let rows = vec![
            row("United States", 2009),
            row("United States", 2010),
            row("France", 2010),
        ];

        let view = apply_filter(&rows, &state(2010, 2010, &["United States"]));
        assert_eq!(view.len(), 1);
        assert_eq!(view.rows[0].country, "United States");
        assert_eq!(view.rows[0].year, 2010);
    }

    #[test]
    fn is_idempotent() {
        let rows = vec![
            row("A", 2000),
            row("B", 2001),
            row("A", 2002),
            row("C", 2003),
        ];
        let st = state(2001, 2002, &["A", "B"]);

        let once = apply_filter(&rows, &st);
        let twice = apply_filter(&once.rows, &st);
        assert_eq!(once, twice);
    }

    #[test]
    fn preserves_input_order() {
        let rows = vec![row("B", 2001), row("A", 2000), row("B", 2000)];
        let view = apply_filter(&rows, &state(2000, 2001, &["A", "B"]));
        let order: Vec<(&str, i32)> = view
            .rows
            .iter()
            .map(|r| (r.country.as_str(), r.year))
            .collect();
        assert_eq!(order, vec![("B", 2001), ("A", 2000), ("B", 2000)]);
    }

    #[test]
    fn empty_selection_yields_empty_view() {
        let rows = vec![row("A", 2000)];
        let view = apply_filter(&rows, &state(2000, 2000, &[]));
        assert!(view.is_empty());
    }

    #[test]
    fn default_state_takes_first_five_countries() {
        let rows: Vec<GdpRow> = ["F", "B", "A", "D", "C", "E", "G"]
            .iter()
            .map(|c| row(c, 2010))
            .collect();
        let table = crate::domain::GdpTable::from_rows(rows).unwrap();

        let st = FilterState::for_table(&table);
        assert_eq!(st.year_range, (2010, 2010));
        let selected: Vec<&String> = st.countries.iter().collect();
        assert_eq!(selected, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn year_bounds_clamp_to_table_and_each_other() {
        let table = crate::domain::GdpTable::from_rows(vec![row("A", 2000), row("A", 2020)]).unwrap();
        let mut st = FilterState::for_table(&table);

        st.adjust_year_min(-5, &table);
        assert_eq!(st.year_range.0, 2000);

        st.adjust_year_max(10, &table);
        assert_eq!(st.year_range.1, 2020);

        st.adjust_year_min(25, &table);
        assert_eq!(st.year_range.0, 2020);

        st.adjust_year_max(-25, &table);
        assert_eq!(st.year_range, (2020, 2020));
    }

    #[test]
    fn toggle_country_flips_membership() {
        let mut st = state(2000, 2001, &["A"]);
        st.toggle_country("A");
        assert!(st.countries.is_empty());
        st.toggle_country("B");
        assert!(st.countries.contains("B"));
    }
}
