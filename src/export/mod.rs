// src/export/mod.rs

mod fs_utils;
mod geojson;
mod json_csv;
pub mod logic;
mod model;

pub use geojson::to_feature_collection;
pub use logic::ExportLogic;
pub use model::MarkerExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Standalone interactive Leaflet map
    Html,
    /// Styled markers as a GeoJSON FeatureCollection
    Geojson,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Html => "html",
            ExportFormat::Geojson => "geojson",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}
