use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::{Customer, CustomerId};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: customer id → Color32
// ---------------------------------------------------------------------------

/// Maps each customer to a distinct colour, in customer list order. Used for
/// the swatch next to each name and for the chart line.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<CustomerId, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map for the given customers.
    pub fn new(customers: &[Customer]) -> Self {
        let palette = generate_palette(customers.len());
        let mapping: BTreeMap<CustomerId, Color32> = customers
            .iter()
            .zip(palette)
            .map(|(customer, color)| (customer.id, color))
            .collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a customer id.
    pub fn color_for(&self, id: CustomerId) -> Color32 {
        self.mapping
            .get(&id)
            .copied()
            .unwrap_or(self.default_color)
    }
}
