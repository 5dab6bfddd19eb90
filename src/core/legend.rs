//! Discrete magnitude legend, colored from the same table as the markers.

use crate::core::style::color_category;
use crate::models::ColorCategory;
use serde::Serialize;

/// Lower bound of each legend band.
pub const LEGEND_GRADES: [u8; 5] = [0, 1, 2, 3, 4];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendBand {
    pub label: String,
    pub color: ColorCategory,
}

/// Bands `0–1`, `1–2`, `2–3`, `3–4`, `4+`.
///
/// Each band is colored by classifying `grade + 1`, which lands strictly
/// inside the band for the exclusive thresholds of the marker table.
pub fn legend_bands() -> Vec<LegendBand> {
    LEGEND_GRADES
        .iter()
        .enumerate()
        .map(|(i, grade)| {
            let label = match LEGEND_GRADES.get(i + 1) {
                Some(next) => format!("{grade}–{next}"),
                None => format!("{grade}+"),
            };
            LegendBand {
                label,
                color: color_category(Some(f64::from(*grade) + 1.0)),
            }
        })
        .collect()
}
