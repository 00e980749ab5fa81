use std::collections::BTreeSet;
use std::fmt;

use super::model::{Bedrooms, Listing, ListingTable};

// ---------------------------------------------------------------------------
// Choice – a radio selection that may decline to filter
// ---------------------------------------------------------------------------

/// A single-value selection with an explicit "show everything" variant.
///
/// Keeping "All" out of band means it can never collide with a value that
/// legitimately occurs in the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    /// Whether a row with the given value passes this selection.
    /// A missing value only passes when no filter is active.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(want) => value == Some(want),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "All"),
            Choice::Only(value) => write!(f, "{value}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Criteria – the global filters from the side panel
// ---------------------------------------------------------------------------

/// The side-panel selections. An unset state or an empty set is a no-op on
/// its dimension; present criteria compose by logical AND.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    pub state: Option<String>,
    pub counties: BTreeSet<String>,
    pub home_types: BTreeSet<String>,
}

impl Criteria {
    /// The same criteria narrowed to a single county, used by the per-county
    /// render loop.
    pub fn for_county(&self, county: &str) -> Criteria {
        Criteria {
            state: self.state.clone(),
            counties: BTreeSet::from([county.to_string()]),
            home_types: self.home_types.clone(),
        }
    }

    fn admits(&self, listing: &Listing) -> bool {
        if let Some(state) = &self.state {
            if &listing.state != state {
                return false;
            }
        }
        if !self.counties.is_empty() && !self.counties.contains(&listing.county) {
            return false;
        }
        if !self.home_types.is_empty() && !self.home_types.contains(&listing.home_type) {
            return false;
        }
        true
    }
}

// ---------------------------------------------------------------------------
// CountyRefinement – the per-county radio selections
// ---------------------------------------------------------------------------

/// Radio selections scoped to one county section. Stored in a map keyed by
/// county name so sections never interfere with each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountyRefinement {
    pub bedrooms: Choice<Bedrooms>,
    pub home_type: Choice<String>,
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of listings that pass all active criteria. The table is
/// never mutated; an empty result is a valid outcome.
pub fn filtered_indices(table: &ListingTable, criteria: &Criteria) -> Vec<usize> {
    table
        .listings
        .iter()
        .enumerate()
        .filter(|(_, listing)| criteria.admits(listing))
        .map(|(i, _)| i)
        .collect()
}

/// Narrow an existing slice by the per-county radio selections.
pub fn refined_indices(
    table: &ListingTable,
    base: &[usize],
    refinement: &CountyRefinement,
) -> Vec<usize> {
    base.iter()
        .copied()
        .filter(|&i| {
            let listing = &table.listings[i];
            refinement
                .bedrooms
                .admits(listing.bedrooms.map(Bedrooms).as_ref())
                && refinement.home_type.admits(Some(&listing.home_type))
        })
        .collect()
}
