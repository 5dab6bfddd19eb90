//! Magnitude to visual style: circle radius and severity color.

use crate::models::ColorCategory;

/// Pixels of radius per unit of magnitude.
pub const RADIUS_SCALE: f64 = 5.0;

/// Canonical severity table, highest band first.
/// A magnitude strictly greater than the bound falls in that band; the first match wins.
/// Anything below every bound (including absent or NaN) is [`ColorCategory::Blue`].
pub const COLOR_THRESHOLDS: [(f64, ColorCategory); 4] = [
    (4.0, ColorCategory::Red),
    (3.0, ColorCategory::Orange),
    (2.0, ColorCategory::Yellow),
    (1.0, ColorCategory::Green),
];

pub const FALLBACK_COLOR: ColorCategory = ColorCategory::Blue;

/// Radius of the marker for a magnitude.
///
/// Absent, zero and NaN magnitudes all map to `0`: zero is deliberately
/// treated the same as "no reading". Negative magnitudes are scaled as-is.
pub fn scale_radius(magnitude: Option<f64>) -> f64 {
    match magnitude {
        Some(m) if m != 0.0 && !m.is_nan() => m * RADIUS_SCALE,
        _ => 0.0,
    }
}

/// Severity band for a magnitude, per [`COLOR_THRESHOLDS`].
pub fn color_category(magnitude: Option<f64>) -> ColorCategory {
    let Some(m) = magnitude else {
        return FALLBACK_COLOR;
    };

    COLOR_THRESHOLDS
        .iter()
        .find(|(bound, _)| m > *bound)
        .map(|(_, category)| *category)
        .unwrap_or(FALLBACK_COLOR)
}
