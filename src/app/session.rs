//! Shared "dashboard session" logic used by the TUI and text front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CSV load -> default filter -> filtered view -> per-country means
//!
//! The TUI and the summary command can then focus on presentation
//! (widgets vs printing).

use std::path::{Path, PathBuf};

use crate::domain::{GdpTable, MeanColumn};
use crate::error::AppError;
use crate::filter::{FilterState, FilteredView, apply_filter};
use crate::io::ingest::{LoadedTable, load_table};
use crate::report::{CountryMean, mean_by_country};

/// Everything derived from the current filter state.
#[derive(Debug, Clone)]
pub struct SessionOutput {
    pub view: FilteredView,
    pub mean_gdp: Vec<CountryMean>,
    pub mean_growth: Vec<CountryMean>,
}

/// A loaded table plus the mutable filter driving the view.
///
/// The table is read-only for the session; only `filter` changes.
#[derive(Debug, Clone)]
pub struct Session {
    pub path: PathBuf,
    pub loaded: LoadedTable,
    pub filter: FilterState,
}

impl Session {
    /// Load the artifact and initialize the default filter state.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        let loaded = load_table(path)?;
        let filter = FilterState::for_table(&loaded.table);
        Ok(Self {
            path: path.to_path_buf(),
            loaded,
            filter,
        })
    }

    pub fn table(&self) -> &GdpTable {
        &self.loaded.table
    }

    /// Reset the filter to its initial state.
    pub fn reset_filter(&mut self) {
        self.filter = FilterState::for_table(&self.loaded.table);
    }

    /// Recompute the view and aggregates for the current filter state.
    ///
    /// Synchronous and O(rows); called on every input event.
    pub fn recompute(&self) -> SessionOutput {
        output_for(apply_filter(&self.loaded.table.rows, &self.filter))
    }

    /// Recompute over the whole table, ignoring the filter.
    ///
    /// Used by `gdp summary`, which reports on the full artifact.
    pub fn recompute_full(&self) -> SessionOutput {
        output_for(FilteredView {
            rows: self.loaded.table.rows.clone(),
        })
    }
}

fn output_for(view: FilteredView) -> SessionOutput {
    let mean_gdp = mean_by_country(&view.rows, MeanColumn::Gdp);
    let mean_growth = mean_by_country(&view.rows, MeanColumn::Growth);
    SessionOutput {
        view,
        mean_gdp,
        mean_growth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_initializes_default_filter_and_recomputes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Country,Year,GDP (Current US$),GDP Growth (%)\n\
             B,2005,2.0e12,2.0\n\
             A,2000,1.0e12,1.0\n\
             A,2005,3.0e12,3.0\n"
        )
        .unwrap();
        file.flush().unwrap();

        let session = Session::open(file.path()).unwrap();
        assert_eq!(session.filter.year_range, (2000, 2005));
        assert_eq!(session.filter.countries.len(), 2);

        let out = session.recompute();
        assert_eq!(out.view.len(), 3);
        // A averages 2e12, B averages 2e12; tie breaks alphabetically.
        assert_eq!(out.mean_gdp[0].country, "A");
        assert_eq!(out.mean_growth[0].country, "A");
        assert!((out.mean_growth[0].mean - 2.0).abs() < 1e-12);
    }
}
