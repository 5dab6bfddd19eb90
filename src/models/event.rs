use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Outer bound of representable instants, in epoch milliseconds (±100 000 000 days).
const MAX_EPOCH_MS: f64 = 8.64e15;

/// GeoJSON document published by the USGS summary feeds.
///
/// Features stay raw here: each one is decoded on its own so a single bad
/// feature cannot take the rest of the batch down with it.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<Value>,
}

/// One earthquake observation (a GeoJSON `Feature`).
///
/// Every attribute is optional on the wire: a record missing its geometry
/// still deserializes and is rejected later by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: EventProperties,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct EventProperties {
    #[serde(default)]
    pub mag: Option<f64>,
    #[serde(default)]
    pub place: Option<String>,
    /// Epoch milliseconds; any JSON number is accepted.
    #[serde(default)]
    pub time: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude]`, optionally followed by depth in km.
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// `null` decodes like an absent field (`"properties": null` is valid GeoJSON).
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl EventProperties {
    /// Whole epoch milliseconds, or `None` when absent, non-finite or out of range.
    pub fn time_ms(&self) -> Option<i64> {
        self.time
            .filter(|t| t.is_finite() && t.abs() <= MAX_EPOCH_MS)
            .map(|t| t.trunc() as i64)
    }
}

impl EventRecord {
    /// Decode one raw feature; a type fault becomes [`AppError::MalformedEvent`].
    pub fn from_feature(feature: &Value) -> AppResult<Self> {
        EventRecord::deserialize(feature).map_err(|e| AppError::MalformedEvent {
            id: feature_label(feature),
            reason: e.to_string(),
        })
    }

    /// Convenience constructor used by tests and fixtures.
    pub fn new(
        mag: Option<f64>,
        place: &str,
        time: i64,
        coordinates: Option<Vec<f64>>,
    ) -> Self {
        Self {
            id: None,
            properties: EventProperties {
                mag,
                place: Some(place.to_string()),
                time: Some(time as f64),
            },
            geometry: coordinates.map(|coordinates| Geometry { coordinates }),
        }
    }

    pub fn magnitude(&self) -> Option<f64> {
        self.properties.mag
    }

    /// Identifier used in logs: feed id when present, else the place.
    pub fn label(&self) -> String {
        self.id
            .clone()
            .or_else(|| self.properties.place.clone())
            .unwrap_or_else(|| "<unnamed>".to_string())
    }
}

fn feature_label(feature: &Value) -> String {
    feature
        .get("id")
        .and_then(Value::as_str)
        .or_else(|| feature.pointer("/properties/place").and_then(Value::as_str))
        .unwrap_or("<unnamed>")
        .to_string()
}
