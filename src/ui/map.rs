use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_plot::{Legend, Plot, Points};

use crate::color;
use crate::data::filter::{Choice, CountyRefinement, Criteria, filtered_indices, refined_indices};
use crate::data::model::{Bedrooms, ListingTable};
use crate::state::AppState;
use crate::ui::table::subsidized_table;
use crate::view::{self, CountyView};

/// Initial viewport: web-mercator zoom level 10, roughly county scale.
const MAP_ZOOM: f64 = 10.0;
const POINT_RADIUS: f32 = 4.0;
const MAP_HEIGHT: f32 = 340.0;

// ---------------------------------------------------------------------------
// County sections (central panel)
// ---------------------------------------------------------------------------

/// Render one section per selected county: radios, metrics, map, table.
pub fn county_sections(ui: &mut Ui, state: &mut AppState) {
    let Some(table) = state.table.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a listings file to view properties  (File → Open…)");
        });
        return;
    };

    if state.selected_counties.is_empty() {
        ui.label("Select at least one county to view the data.");
        return;
    }

    let criteria = state.criteria();
    let counties: Vec<String> = state.selected_counties.iter().cloned().collect();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for county in &counties {
                let refinement = state.county_refinements.entry(county.clone()).or_default();
                county_section(ui, &table, &criteria, county, refinement);
                ui.separator();
            }
        });
}

fn county_section(
    ui: &mut Ui,
    table: &ListingTable,
    criteria: &Criteria,
    county: &str,
    refinement: &mut CountyRefinement,
) {
    let slice = filtered_indices(table, &criteria.for_county(county));

    ui.heading(format!("{county} County"));

    // Radio options come from this county's own slice, not the global set.
    let bedroom_opts = view::bedroom_options(table, &slice);
    let home_type_opts = view::home_type_options(table, &slice);
    // A remembered choice can go stale when the global filters change.
    if !bedroom_opts.contains(&refinement.bedrooms) {
        refinement.bedrooms = Choice::All;
    }
    if !home_type_opts.contains(&refinement.home_type) {
        refinement.home_type = Choice::All;
    }

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label("Bedrooms:");
        for opt in &bedroom_opts {
            ui.radio_value(&mut refinement.bedrooms, *opt, opt.to_string());
        }
    });
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label("Home type:");
        for opt in &home_type_opts {
            ui.radio_value(&mut refinement.home_type, opt.clone(), opt.to_string());
        }
    });

    let refined = refined_indices(table, &slice, refinement);
    let Some(county_view) = CountyView::build(table, &refined) else {
        ui.colored_label(
            Color32::YELLOW,
            format!("No data available for {county} County with the selected filters."),
        );
        return;
    };

    metrics_row(ui, &county_view);
    map_plot(ui, table, &county_view, county);
    subsidized_table(ui, table, &county_view, county);
}

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

fn metrics_row(ui: &mut Ui, view: &CountyView) {
    ui.columns(2, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Section 8 Properties", view.subsidized);
        metric(&mut cols[1], "Total Non-Section 8 Properties", view.market);
    });
}

fn metric(ui: &mut Ui, label: &str, value: usize) {
    ui.label(label);
    ui.label(RichText::new(value.to_string()).size(28.0).strong());
}

// ---------------------------------------------------------------------------
// Scatter map
// ---------------------------------------------------------------------------

/// The fields the hover tooltip references.
struct MapRow {
    longitude: f64,
    latitude: f64,
    price_sq_foot: Option<f64>,
    bedrooms: Option<f64>,
    section_8: u8,
}

fn map_plot(ui: &mut Ui, table: &ListingTable, view: &CountyView, county: &str) {
    let [(subsidized_label, subsidized_color), (market_label, market_color)] =
        color::legend_entries();

    let mut subsidized_points: Vec<[f64; 2]> = Vec::new();
    let mut market_points: Vec<[f64; 2]> = Vec::new();
    for (&i, &row_color) in view.indices.iter().zip(&view.colors) {
        let listing = &table.listings[i];
        let point = [listing.longitude, listing.latitude];
        if row_color == subsidized_color {
            subsidized_points.push(point);
        } else {
            market_points.push(point);
        }
    }

    let rows: Vec<MapRow> = view
        .indices
        .iter()
        .map(|&i| {
            let listing = &table.listings[i];
            MapRow {
                longitude: listing.longitude,
                latitude: listing.latitude,
                price_sq_foot: listing.price_sq_foot,
                bedrooms: listing.bedrooms,
                section_8: listing.section_8,
            }
        })
        .collect();

    let center = view.center;
    // Degrees of longitude across one viewport at this zoom.
    let span = 360.0 / 2f64.powf(MAP_ZOOM);
    let tolerance = span * 0.02;
    // Longitude degrees cover less ground at higher latitudes.
    let aspect = (1.0 / center.latitude.to_radians().cos().abs().max(0.1)) as f32;

    Plot::new(format!("county_map_{county}"))
        .height(MAP_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .data_aspect(aspect)
        .include_x(center.longitude - span / 2.0)
        .include_x(center.longitude + span / 2.0)
        .include_y(center.latitude - span / 4.0)
        .include_y(center.latitude + span / 4.0)
        .label_formatter(move |name, value| {
            let mut nearest: Option<(f64, &MapRow)> = None;
            for row in &rows {
                let d2 =
                    (row.longitude - value.x).powi(2) + (row.latitude - value.y).powi(2);
                if nearest.as_ref().map_or(true, |(best, _)| d2 < *best) {
                    nearest = Some((d2, row));
                }
            }
            match nearest {
                Some((d2, row)) if d2.sqrt() <= tolerance => format!(
                    "Price per Sq Foot: {}\nBedrooms: {}\nSection 8: {}",
                    row.price_sq_foot
                        .map(|v| format!("{v:.2}"))
                        .unwrap_or_else(|| "–".to_string()),
                    row.bedrooms
                        .map(|b| Bedrooms(b).to_string())
                        .unwrap_or_else(|| "–".to_string()),
                    row.section_8,
                ),
                _ => format!("{name} ({:.4}, {:.4})", value.y, value.x),
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.points(
                Points::new(subsidized_points)
                    .name(subsidized_label)
                    .color(subsidized_color)
                    .radius(POINT_RADIUS)
                    .filled(true),
            );
            plot_ui.points(
                Points::new(market_points)
                    .name(market_label)
                    .color(market_color)
                    .radius(POINT_RADIUS)
                    .filled(true),
            );
        });
}
