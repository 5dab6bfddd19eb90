//! Feature renderer: event records to styled markers.

use crate::core::style::{color_category, scale_radius};
use crate::errors::{AppError, AppResult};
use crate::models::{EventRecord, FILL_OPACITY, StyledMarker};
use crate::utils::formatting::format_optional_text;
use crate::utils::{format_local_timestamp, format_magnitude};
use serde_json::Value;
use tracing::{debug, warn};

/// Result of rendering a batch: markers in input order plus the number of skipped records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOutcome {
    pub markers: Vec<StyledMarker>,
    pub malformed: usize,
}

/// Popup body: place, magnitude, then the local timestamp, one per line.
pub fn popup_text(event: &EventRecord) -> String {
    let props = &event.properties;
    format!(
        "Location: {}\nMagnitude: {}\n{}",
        format_optional_text(props.place.as_deref()),
        format_magnitude(props.mag),
        format_local_timestamp(props.time_ms())
    )
}

/// Maps one event record to its marker.
///
/// Fails with [`AppError::MalformedEvent`] when the record has no usable position.
pub fn render_event(event: &EventRecord) -> AppResult<StyledMarker> {
    let malformed = |reason: &str| AppError::MalformedEvent {
        id: event.label(),
        reason: reason.to_string(),
    };

    let coords = match &event.geometry {
        Some(g) => &g.coordinates,
        None => return Err(malformed("missing geometry")),
    };

    let (lon, lat) = match coords.as_slice() {
        [lon, lat, ..] => (*lon, *lat),
        _ => return Err(malformed("geometry has fewer than two coordinates")),
    };

    if !lon.is_finite() || !lat.is_finite() {
        return Err(malformed("non-finite coordinates"));
    }

    let magnitude = event.magnitude();

    Ok(StyledMarker {
        id: event.id.clone(),
        lon,
        lat,
        depth: coords.get(2).copied(),
        magnitude,
        place: event.properties.place.clone(),
        time: event.properties.time_ms(),
        radius: scale_radius(magnitude),
        color: color_category(magnitude),
        fill: true,
        fill_opacity: FILL_OPACITY,
        popup: popup_text(event),
    })
}

/// Renders every event in order. Malformed records are logged, counted and skipped.
pub fn render(events: &[EventRecord]) -> RenderOutcome {
    collect(events.iter().map(render_event))
}

/// Decodes and renders raw GeoJSON features one by one.
/// A feature that fails to decode counts as malformed, like one without a position.
pub fn render_features(features: &[Value]) -> RenderOutcome {
    collect(
        features
            .iter()
            .map(|f| EventRecord::from_feature(f).and_then(|ev| render_event(&ev))),
    )
}

fn collect(results: impl Iterator<Item = AppResult<StyledMarker>>) -> RenderOutcome {
    let mut outcome = RenderOutcome::default();

    for result in results {
        match result {
            Ok(marker) => outcome.markers.push(marker),
            Err(e) => {
                warn!(error = %e, "skipping event");
                outcome.malformed += 1;
            }
        }
    }

    debug!(
        rendered = outcome.markers.len(),
        malformed = outcome.malformed,
        "render completed"
    );

    outcome
}
