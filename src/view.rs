use std::collections::BTreeSet;

use eframe::egui::Color32;

use crate::color;
use crate::data::filter::Choice;
use crate::data::model::{Bedrooms, ListingTable};

// ---------------------------------------------------------------------------
// CountyView – presentation-ready fields for one county section
// ---------------------------------------------------------------------------

/// Map center, the arithmetic mean of the slice's coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything a county section needs to render: the rows, their colors, the
/// radio options, the map center, and the metric counts. Built fresh on
/// every pass and discarded after rendering.
#[derive(Debug, Clone)]
pub struct CountyView {
    /// Row indices into the table, in table order.
    pub indices: Vec<usize>,
    /// Scatter color per row, parallel to `indices`.
    pub colors: Vec<Color32>,
    /// `All` first, then the distinct bedroom values present, ascending.
    pub bedroom_options: Vec<Choice<Bedrooms>>,
    pub center: MapCenter,
    /// Rows with the subsidy flag set.
    pub subsidized: usize,
    /// All remaining rows.
    pub market: usize,
}

impl CountyView {
    /// Build the view model for a slice of the table.
    ///
    /// Returns `None` for an empty slice, the empty-result outcome that the
    /// caller renders as a notice instead of a map. Encoding it in the type
    /// keeps the mean-coordinate computation away from zero-row input.
    pub fn build(table: &ListingTable, indices: &[usize]) -> Option<CountyView> {
        if indices.is_empty() {
            return None;
        }

        let mut colors = Vec::with_capacity(indices.len());
        let mut lat_sum = 0.0;
        let mut lon_sum = 0.0;
        let mut subsidized = 0;
        for &i in indices {
            let listing = &table.listings[i];
            lat_sum += listing.latitude;
            lon_sum += listing.longitude;
            if listing.section_8 == 1 {
                subsidized += 1;
            }
            colors.push(color::listing_color(listing.section_8));
        }

        let n = indices.len() as f64;
        Some(CountyView {
            indices: indices.to_vec(),
            colors,
            bedroom_options: bedroom_options(table, indices),
            center: MapCenter {
                latitude: lat_sum / n,
                longitude: lon_sum / n,
            },
            subsidized,
            market: indices.len() - subsidized,
        })
    }
}

// ---------------------------------------------------------------------------
// Radio options
// ---------------------------------------------------------------------------

/// Bedroom radio options for a slice: `All`, then the distinct values
/// present, ascending. Listings without bedroom data contribute no option.
pub fn bedroom_options(table: &ListingTable, indices: &[usize]) -> Vec<Choice<Bedrooms>> {
    let distinct: BTreeSet<Bedrooms> = indices
        .iter()
        .filter_map(|&i| table.listings[i].bedrooms.map(Bedrooms))
        .collect();

    let mut options = Vec::with_capacity(distinct.len() + 1);
    options.push(Choice::All);
    options.extend(distinct.into_iter().map(Choice::Only));
    options
}

/// Home-type radio options for a slice: `All`, then the distinct types
/// present, ascending.
pub fn home_type_options(table: &ListingTable, indices: &[usize]) -> Vec<Choice<String>> {
    let distinct: BTreeSet<String> = indices
        .iter()
        .map(|&i| table.listings[i].home_type.clone())
        .collect();

    let mut options = Vec::with_capacity(distinct.len() + 1);
    options.push(Choice::All);
    options.extend(distinct.into_iter().map(Choice::Only));
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, Criteria};
    use crate::data::model::fixtures::alpha_table;

    fn alpha_slice(table: &ListingTable) -> Vec<usize> {
        let criteria = Criteria {
            state: Some("CA".to_string()),
            counties: std::collections::BTreeSet::from(["Alpha".to_string()]),
            home_types: Default::default(),
        };
        filtered_indices(table, &criteria)
    }

    #[test]
    fn alpha_scenario() {
        let table = alpha_table();
        let slice = alpha_slice(&table);
        let view = CountyView::build(&table, &slice).expect("non-empty slice");

        assert_eq!(view.indices, vec![0, 1, 2]);
        assert_eq!(
            view.bedroom_options,
            vec![
                Choice::All,
                Choice::Only(Bedrooms(2.0)),
                Choice::Only(Bedrooms(3.0)),
            ]
        );
        assert_eq!(view.subsidized, 2);
        assert_eq!(view.market, 1);
        assert_eq!(
            home_type_options(&table, &view.indices),
            vec![
                Choice::All,
                Choice::Only("CONDO".to_string()),
                Choice::Only("SINGLE_FAMILY".to_string()),
            ]
        );
    }

    #[test]
    fn counts_partition_the_slice() {
        let table = alpha_table();
        let slice = alpha_slice(&table);
        let view = CountyView::build(&table, &slice).expect("non-empty slice");
        assert_eq!(view.subsidized + view.market, view.indices.len());
        assert_eq!(view.colors.len(), view.indices.len());
    }

    #[test]
    fn colors_follow_the_subsidy_flag() {
        let table = alpha_table();
        let slice = alpha_slice(&table);
        let view = CountyView::build(&table, &slice).expect("non-empty slice");
        for (&i, &color) in view.indices.iter().zip(&view.colors) {
            assert_eq!(color, crate::color::listing_color(table.listings[i].section_8));
        }
    }

    #[test]
    fn center_is_the_exact_coordinate_mean() {
        let table = alpha_table();
        let slice = alpha_slice(&table);
        let view = CountyView::build(&table, &slice).expect("non-empty slice");
        assert_eq!(view.center.latitude, (34.0 + 34.2 + 34.4) / 3.0);
        assert_eq!(view.center.longitude, (-118.0 + -118.2 + -118.4) / 3.0);
    }

    #[test]
    fn empty_slice_builds_no_view() {
        let table = alpha_table();
        assert!(CountyView::build(&table, &[]).is_none());
    }

    #[test]
    fn options_skip_missing_bedrooms() {
        use crate::data::model::fixtures::listing;
        let table = ListingTable::from_listings(vec![
            listing(1, "CA", "Alpha", "CONDO", 0, None, 34.0, -118.0),
            listing(2, "CA", "Alpha", "CONDO", 0, Some(1.0), 34.0, -118.0),
        ]);
        let options = bedroom_options(&table, &[0, 1]);
        assert_eq!(options, vec![Choice::All, Choice::Only(Bedrooms(1.0))]);
    }
}
