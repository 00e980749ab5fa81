use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Listing – one row of the dataset
// ---------------------------------------------------------------------------

/// A single real-estate listing (one row of the source table).
///
/// Field names map 1:1 onto the source column names; the column names and
/// their casing are part of the input contract, so renames here are breaking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub zpid: i64,
    pub state: String,
    #[serde(rename = "County")]
    pub county: String,
    #[serde(rename = "homeType")]
    pub home_type: String,
    /// Binary subsidy-eligibility flag: 1 = Section-8 eligible.
    #[serde(rename = "Section_8")]
    pub section_8: u8,
    /// Non-negative, or missing for listings without bedroom data.
    pub bedrooms: Option<f64>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "detailUrl_InfoTOD")]
    pub detail_url: Option<String>,
    #[serde(rename = "price_sq_foot")]
    pub price_sq_foot: Option<f64>,
    #[serde(rename = "FRM")]
    pub frm: Option<f64>,
    #[serde(rename = "yearBuilt")]
    pub year_built: Option<f64>,
    #[serde(rename = "SCHOOLSMeandistance")]
    pub schools_mean_distance: Option<f64>,
    #[serde(rename = "price_to_rent_ratio_InfoTOD")]
    pub price_to_rent_ratio: Option<f64>,
    #[serde(rename = "livingArea")]
    pub living_area: Option<f64>,
    #[serde(rename = "lastSoldPrice")]
    pub last_sold_price: Option<f64>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Bedrooms – a bedroom count with a total order
// ---------------------------------------------------------------------------

/// A bedroom count. The source stores these as floats (missing values force
/// the whole column to float), so this wraps `f64` with a total order to make
/// values usable in `BTreeSet` and comparable for radio selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bedrooms(pub f64);

impl Eq for Bedrooms {}

impl PartialOrd for Bedrooms {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bedrooms {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::hash::Hash for Bedrooms {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Bedrooms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{:.1}", self.0)
        }
    }
}

// ---------------------------------------------------------------------------
// ListingTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed distinct-value indices.
#[derive(Debug, Clone)]
pub struct ListingTable {
    /// All listings (rows).
    pub listings: Vec<Listing>,
    /// Distinct states, ascending.
    pub states: Vec<String>,
    /// Distinct counties per state.
    pub counties_by_state: BTreeMap<String, BTreeSet<String>>,
    /// Distinct home types across the whole table, ascending.
    pub home_types: Vec<String>,
}

impl ListingTable {
    /// Build the distinct-value indices from the loaded listings.
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        let mut states: BTreeSet<String> = BTreeSet::new();
        let mut counties_by_state: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut home_types: BTreeSet<String> = BTreeSet::new();

        for listing in &listings {
            states.insert(listing.state.clone());
            counties_by_state
                .entry(listing.state.clone())
                .or_default()
                .insert(listing.county.clone());
            home_types.insert(listing.home_type.clone());
        }

        ListingTable {
            listings,
            states: states.into_iter().collect(),
            counties_by_state,
            home_types: home_types.into_iter().collect(),
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Distinct counties of one state, ascending. Empty for unknown states.
    pub fn counties_in(&self, state: &str) -> Vec<String> {
        self.counties_by_state
            .get(state)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Test fixtures shared by the data and view tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod fixtures {
    use super::{Listing, ListingTable};

    pub(crate) fn listing(
        zpid: i64,
        state: &str,
        county: &str,
        home_type: &str,
        section_8: u8,
        bedrooms: Option<f64>,
        latitude: f64,
        longitude: f64,
    ) -> Listing {
        Listing {
            zpid,
            state: state.to_string(),
            county: county.to_string(),
            home_type: home_type.to_string(),
            section_8,
            bedrooms,
            latitude,
            longitude,
            detail_url: Some(format!("https://example.com/homedetails/{zpid}")),
            price_sq_foot: Some(310.0),
            frm: Some(2100.0),
            year_built: Some(1987.0),
            schools_mean_distance: Some(1.4),
            price_to_rent_ratio: Some(17.2),
            living_area: Some(1350.0),
            last_sold_price: Some(410_000.0),
            description: Some("Charming starter home".to_string()),
        }
    }

    /// Three rows in county "Alpha" (flags 1,0,1; bedrooms 2,3,2) plus one
    /// row in county "Beta", all in state "CA".
    pub(crate) fn alpha_table() -> ListingTable {
        ListingTable::from_listings(vec![
            listing(1, "CA", "Alpha", "SINGLE_FAMILY", 1, Some(2.0), 34.0, -118.0),
            listing(2, "CA", "Alpha", "CONDO", 0, Some(3.0), 34.2, -118.2),
            listing(3, "CA", "Alpha", "SINGLE_FAMILY", 1, Some(2.0), 34.4, -118.4),
            listing(4, "CA", "Beta", "SINGLE_FAMILY", 0, Some(4.0), 36.0, -120.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::alpha_table;
    use super::*;

    #[test]
    fn distinct_indices_are_precomputed() {
        let table = alpha_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.states, vec!["CA".to_string()]);
        assert_eq!(
            table.counties_in("CA"),
            vec!["Alpha".to_string(), "Beta".to_string()]
        );
        assert_eq!(
            table.home_types,
            vec!["CONDO".to_string(), "SINGLE_FAMILY".to_string()]
        );
        assert!(table.counties_in("TX").is_empty());
    }

    #[test]
    fn bedrooms_order_and_display() {
        let mut values = vec![Bedrooms(3.0), Bedrooms(1.0), Bedrooms(2.5)];
        values.sort();
        assert_eq!(values, vec![Bedrooms(1.0), Bedrooms(2.5), Bedrooms(3.0)]);
        assert_eq!(Bedrooms(3.0).to_string(), "3");
        assert_eq!(Bedrooms(2.5).to_string(), "2.5");
    }
}
