// src/export/geojson.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::StyledMarker;
use crate::ui::messages::info;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

/// Styled markers as a GeoJSON `FeatureCollection` of points.
/// Style attributes travel in `properties` so any GeoJSON viewer can apply them.
pub fn to_feature_collection(markers: &[StyledMarker]) -> Value {
    let features: Vec<Value> = markers
        .iter()
        .map(|m| {
            let mut coordinates = vec![m.lon, m.lat];
            if let Some(depth) = m.depth {
                coordinates.push(depth);
            }

            json!({
                "type": "Feature",
                "id": m.id,
                "geometry": { "type": "Point", "coordinates": coordinates },
                "properties": {
                    "mag": m.magnitude,
                    "place": m.place,
                    "time": m.time,
                    "radius": m.radius,
                    "color": m.color,
                    "fill": m.fill,
                    "fillOpacity": m.fill_opacity,
                    "popup": m.popup,
                }
            })
        })
        .collect();

    json!({ "type": "FeatureCollection", "features": features })
}

pub(crate) fn export_geojson(markers: &[StyledMarker], path: &Path) -> AppResult<()> {
    info(format!("Exporting to GeoJSON: {}", path.display()));

    let body = serde_json::to_string_pretty(&to_feature_collection(markers))?;
    fs::write(path, body)?;

    notify_export_success("GeoJSON", path);
    Ok(())
}
