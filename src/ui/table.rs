use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder, TableRow};

use crate::data::model::{Bedrooms, Listing, ListingTable};
use crate::view::CountyView;

/// Columns shown for subsidized listings, in display order. These are the
/// source column names, shown verbatim in the header row.
pub const DISPLAY_COLUMNS: [&str; 11] = [
    "zpid",
    "detailUrl_InfoTOD",
    "price_sq_foot",
    "bedrooms",
    "FRM",
    "yearBuilt",
    "SCHOOLSMeandistance",
    "price_to_rent_ratio_InfoTOD",
    "livingArea",
    "lastSoldPrice",
    "description",
];

// ---------------------------------------------------------------------------
// Section-8 results table
// ---------------------------------------------------------------------------

/// Render the table of subsidized listings for one county section.
pub fn subsidized_table(ui: &mut Ui, table: &ListingTable, view: &CountyView, county: &str) {
    let rows: Vec<usize> = view
        .indices
        .iter()
        .copied()
        .filter(|&i| table.listings[i].section_8 == 1)
        .collect();

    ui.add_space(4.0);
    ui.strong("Section 8 Properties");
    if rows.is_empty() {
        ui.label("No Section 8 properties in the current selection.");
        return;
    }

    // Salted per county so several tables can share one frame.
    ui.push_id(("section8_table", county), |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .columns(Column::auto(), DISPLAY_COLUMNS.len() - 1)
            .column(Column::remainder())
            .header(20.0, |mut header| {
                for name in DISPLAY_COLUMNS {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, rows.len(), |mut row| {
                    let listing = &table.listings[rows[row.index()]];
                    listing_row(&mut row, listing);
                });
            });
    });
}

fn listing_row(row: &mut TableRow<'_, '_>, listing: &Listing) {
    row.col(|ui: &mut Ui| {
        ui.label(listing.zpid.to_string());
    });
    row.col(|ui: &mut Ui| match &listing.detail_url {
        Some(url) => {
            ui.hyperlink_to("listing ↗", url);
        }
        None => {
            ui.label("–");
        }
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_number(listing.price_sq_foot));
    });
    row.col(|ui: &mut Ui| {
        ui.label(
            listing
                .bedrooms
                .map(|b| Bedrooms(b).to_string())
                .unwrap_or_else(|| "–".to_string()),
        );
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_number(listing.frm));
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_year(listing.year_built));
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_number(listing.schools_mean_distance));
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_number(listing.price_to_rent_ratio));
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_number(listing.living_area));
    });
    row.col(|ui: &mut Ui| {
        ui.label(fmt_number(listing.last_sold_price));
    });
    row.col(|ui: &mut Ui| match &listing.description {
        Some(text) => {
            ui.label(text).on_hover_text(text);
        }
        None => {
            ui.label("–");
        }
    });
}

fn fmt_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{v:.2}"),
        None => "–".to_string(),
    }
}

fn fmt_year(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v as i64),
        None => "–".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_render_compactly() {
        assert_eq!(fmt_number(Some(450_000.0)), "450000");
        assert_eq!(fmt_number(Some(310.25)), "310.25");
        assert_eq!(fmt_number(None), "–");
        assert_eq!(fmt_year(Some(1987.0)), "1987");
    }
}
