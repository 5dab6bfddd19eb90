// src/export/logic.rs

use crate::config::Config;
use crate::core::{FeedLoader, MapComposer, fetch_and_render};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::geojson::export_geojson;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::notify_export_success;
use crate::models::StyledMarker;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;
use tracing::info;

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Fetch, render and write the feed.
    ///
    /// - `format`: html | geojson | json | csv
    /// - `file`: absolute path of the output file
    /// - `access_token`: already resolved tile token, only used by `html`
    pub fn export(
        cfg: &Config,
        loader: &FeedLoader,
        access_token: Option<String>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::InvalidArgument(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let outcome = fetch_and_render(loader)?;

        if outcome.malformed > 0 {
            warning(format!(
                "{} malformed event(s) skipped (missing or invalid geometry).",
                outcome.malformed
            ));
        }

        if outcome.markers.is_empty() {
            warning("No events found in the feed.");
        }

        Self::write(cfg, &outcome.markers, access_token, format, path)?;

        info!(
            format = format.as_str(),
            path = %path.display(),
            markers = outcome.markers.len(),
            "export written"
        );
        Ok(())
    }

    /// Write already rendered markers in the requested format.
    pub fn write(
        cfg: &Config,
        markers: &[StyledMarker],
        access_token: Option<String>,
        format: ExportFormat,
        path: &Path,
    ) -> AppResult<()> {
        match format {
            ExportFormat::Html => export_html(cfg, markers, access_token, path),
            ExportFormat::Geojson => export_geojson(markers, path),
            ExportFormat::Json => export_json(markers, path),
            ExportFormat::Csv => export_csv(markers, path),
        }
    }
}

fn export_html(
    cfg: &Config,
    markers: &[StyledMarker],
    access_token: Option<String>,
    path: &Path,
) -> AppResult<()> {
    crate::ui::messages::info(format!("Composing map: {}", path.display()));

    let composer = MapComposer::new(&cfg.map, access_token)?;
    if !composer.has_access_token() {
        warning(format!(
            "No tile access token: set --token, ${} or access_token in the config.",
            crate::config::ACCESS_TOKEN_ENV
        ));
    }

    let html = composer.compose(markers)?;
    fs::write(path, html)?;

    notify_export_success("HTML map", path);
    Ok(())
}
