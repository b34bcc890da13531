use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::operation::OperationKind;

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
// Operation colours
// ---------------------------------------------------------------------------

/// One stable colour per operation kind, shared by the toggles, the trace
/// table and the step chart.
#[derive(Debug, Clone)]
pub struct OperationColors {
    colors: Vec<Color32>,
}

impl Default for OperationColors {
    fn default() -> Self {
        Self {
            colors: generate_palette(OperationKind::ALL.len()),
        }
    }
}

impl OperationColors {
    pub fn color_for(&self, kind: OperationKind) -> Color32 {
        self.colors
            .get(kind.rank() as usize)
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}
