use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::data::cache::DatasetCache;
use crate::data::filter::{CountyRefinement, Criteria};
use crate::data::model::ListingTable;

/// Dataset loaded at startup when present.
pub const DEFAULT_DATASET: &str = "data/listings.csv";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Memoized dataset loads, keyed by file path.
    pub cache: DatasetCache,

    /// Path of the currently shown dataset.
    pub source_path: PathBuf,

    /// Loaded dataset (None until a file loads successfully).
    pub table: Option<Arc<ListingTable>>,

    /// Chosen state; the county list is scoped to it.
    pub selected_state: Option<String>,

    /// Chosen counties; empty means no county sections are rendered.
    pub selected_counties: BTreeSet<String>,

    /// Chosen home types; starts with every distinct type selected.
    pub selected_home_types: BTreeSet<String>,

    /// Per-county radio selections, keyed by county name so sections stay
    /// independent across interactions.
    pub county_refinements: BTreeMap<String, CountyRefinement>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            cache: DatasetCache::default(),
            source_path: PathBuf::from(DEFAULT_DATASET),
            table: None,
            selected_state: None,
            selected_counties: BTreeSet::new(),
            selected_home_types: BTreeSet::new(),
            county_refinements: BTreeMap::new(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Load a listings file through the cache and make it current.
    /// Failures land in `status_message` and leave the previous table shown.
    pub fn load_dataset(&mut self, path: &Path) {
        match self.cache.load(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} listings from {} ({} states)",
                    table.len(),
                    path.display(),
                    table.states.len()
                );
                self.source_path = path.to_owned();
                self.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load listings: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Invalidate the cache entry for the current path and load it again.
    pub fn reload(&mut self) {
        self.cache.invalidate(&self.source_path);
        let path = self.source_path.clone();
        self.load_dataset(&path);
    }

    /// Ingest a loaded table and reset the selections: first state chosen,
    /// no counties, every home type selected.
    pub fn set_table(&mut self, table: Arc<ListingTable>) {
        self.selected_state = table.states.first().cloned();
        self.selected_counties.clear();
        self.selected_home_types = table.home_types.iter().cloned().collect();
        self.county_refinements.clear();
        self.status_message = None;
        self.table = Some(table);
    }

    /// Switch states. Counties belong to a state, so the county selection
    /// and the per-county radios are cleared.
    pub fn select_state(&mut self, state: String) {
        if self.selected_state.as_deref() == Some(state.as_str()) {
            return;
        }
        self.selected_state = Some(state);
        self.selected_counties.clear();
        self.county_refinements.clear();
    }

    pub fn toggle_county(&mut self, county: &str) {
        if !self.selected_counties.remove(county) {
            self.selected_counties.insert(county.to_string());
        }
    }

    pub fn toggle_home_type(&mut self, home_type: &str) {
        if !self.selected_home_types.remove(home_type) {
            self.selected_home_types.insert(home_type.to_string());
        }
    }

    /// Select every distinct home type.
    pub fn select_all_home_types(&mut self) {
        if let Some(table) = &self.table {
            self.selected_home_types = table.home_types.iter().cloned().collect();
        }
    }

    /// Deselect every home type (a no-op filter, shows everything).
    pub fn select_no_home_types(&mut self) {
        self.selected_home_types.clear();
    }

    /// Assemble the global criteria for this frame.
    pub fn criteria(&self) -> Criteria {
        Criteria {
            state: self.selected_state.clone(),
            counties: self.selected_counties.clone(),
            home_types: self.selected_home_types.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::fixtures::alpha_table;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_table(Arc::new(alpha_table()));
        state
    }

    #[test]
    fn ingesting_a_table_resets_selections() {
        let state = loaded_state();
        assert_eq!(state.selected_state.as_deref(), Some("CA"));
        assert!(state.selected_counties.is_empty());
        assert_eq!(state.selected_home_types.len(), 2);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn switching_state_clears_county_scoped_selections() {
        let mut state = loaded_state();
        state.toggle_county("Alpha");
        state
            .county_refinements
            .insert("Alpha".to_string(), CountyRefinement::default());

        state.select_state("TX".to_string());
        assert!(state.selected_counties.is_empty());
        assert!(state.county_refinements.is_empty());

        // Re-selecting the current state is a no-op.
        state.toggle_county("Travis");
        state.select_state("TX".to_string());
        assert!(state.selected_counties.contains("Travis"));
    }

    #[test]
    fn criteria_mirror_the_selections() {
        let mut state = loaded_state();
        state.toggle_county("Alpha");
        state.toggle_home_type("CONDO");

        let criteria = state.criteria();
        assert_eq!(criteria.state.as_deref(), Some("CA"));
        assert!(criteria.counties.contains("Alpha"));
        // CONDO toggled off, SINGLE_FAMILY still selected.
        assert_eq!(criteria.home_types.len(), 1);
        assert!(criteria.home_types.contains("SINGLE_FAMILY"));
    }
}
