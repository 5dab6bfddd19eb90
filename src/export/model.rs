// src/export/model.rs

use crate::models::StyledMarker;
use serde::Serialize;

/// Flat marker row for CSV export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MarkerExport {
    pub id: String,
    pub lon: f64,
    pub lat: f64,
    pub depth: Option<f64>,
    pub magnitude: Option<f64>,
    pub radius: f64,
    pub color: String,
    pub place: String,
    pub time: Option<i64>,
    pub popup: String,
}

impl From<&StyledMarker> for MarkerExport {
    fn from(m: &StyledMarker) -> Self {
        Self {
            id: m.id.clone().unwrap_or_default(),
            lon: m.lon,
            lat: m.lat,
            depth: m.depth,
            magnitude: m.magnitude,
            radius: m.radius,
            color: m.color.as_str().to_string(),
            place: m.place.clone().unwrap_or_default(),
            time: m.time,
            popup: m.popup.clone(),
        }
    }
}

pub(crate) fn markers_to_rows(markers: &[StyledMarker]) -> Vec<MarkerExport> {
    markers.iter().map(MarkerExport::from).collect()
}
