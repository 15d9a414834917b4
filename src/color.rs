use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

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
            let hsl = Hsl::new(hue, 0.7, 0.5);
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
// Color mapping: label → Color32
// ---------------------------------------------------------------------------

/// Maps a fixed set of labels (booster version categories, pie slices) to
/// distinct colours. Palette colours are assigned in label order.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    /// Build a colour map for the given labels, in order.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: Vec<String> = labels.into_iter().map(|l| l.as_ref().to_string()).collect();
        let palette = generate_palette(labels.len());
        let mapping: BTreeMap<String, Color32> =
            labels.into_iter().zip(palette.into_iter()).collect();

        ColorMap {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a label.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping
            .get(label)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colors() {
        let palette = generate_palette(5);
        assert_eq!(palette.len(), 5);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_label_falls_back_to_default() {
        let map = ColorMap::new(["v1.0", "FT"]);
        assert_ne!(map.color_for("v1.0"), map.color_for("FT"));
        assert_eq!(map.color_for("B5"), Color32::GRAY);
    }
}
