use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Figure colours
// ---------------------------------------------------------------------------

/// Hue step between consecutive figures, in degrees (the golden angle), so
/// any number of figures keeps well separated colours.
const HUE_STEP: f32 = 137.507_77;

/// Hue of the first figure: a matplotlib-like blue.
const BASE_HUE: f32 = 205.0;

/// Colour for the `index`-th figure produced by a renderer.
pub fn figure_color(index: usize) -> Color32 {
    let hue = (BASE_HUE + index as f32 * HUE_STEP) % 360.0;
    let hsl = Hsl::new(hue, 0.70, 0.50);
    let rgb: Srgb = hsl.into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
