use super::color::ColorCategory;
use serde::Serialize;

/// Fill opacity applied to every marker.
pub const FILL_OPACITY: f64 = 0.5;

/// A renderable circle marker derived from one [`EventRecord`](super::event::EventRecord).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledMarker {
    pub id: Option<String>,
    pub lon: f64,
    pub lat: f64,
    pub depth: Option<f64>,
    pub magnitude: Option<f64>,
    pub place: Option<String>,
    pub time: Option<i64>,
    pub radius: f64,
    pub color: ColorCategory,
    pub fill: bool,
    pub fill_opacity: f64,
    pub popup: String,
}
