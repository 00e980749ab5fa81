use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Scatter colors for the subsidy flag
// ---------------------------------------------------------------------------

/// Color for Section-8 eligible listings (green, RGBA 0,255,0,160).
pub fn subsidized() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 255, 0, 160)
}

/// Color for market-rate listings (red, RGBA 255,0,0,160).
pub fn market_rate() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 0, 0, 160)
}

/// Map the binary subsidy flag to its scatter color. Only `1` counts as
/// subsidized; every other value renders as market rate.
pub fn listing_color(section_8: u8) -> Color32 {
    if section_8 == 1 {
        subsidized()
    } else {
        market_rate()
    }
}

/// Legend entries (label → color) for the map.
pub fn legend_entries() -> [(&'static str, Color32); 2] {
    [
        ("Section 8", subsidized()),
        ("Market rate", market_rate()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_maps_to_exactly_two_colors() {
        assert_eq!(listing_color(1), subsidized());
        assert_eq!(listing_color(0), market_rate());
        // Anything that is not exactly 1 is market rate.
        assert_eq!(listing_color(2), market_rate());
    }
}
