//! Feed loader: fetch the GeoJSON earthquake feed (or read a local copy).

use crate::config::FeedConfig;
use crate::errors::{AppError, AppResult};
use crate::models::FeedDocument;
use clap::ValueEnum;
use reqwest::blocking::Client;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

const USGS_SUMMARY_BASE: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// Minimum-magnitude tier of the USGS summary feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FeedLevel {
    Significant,
    #[value(name = "4.5")]
    M4_5,
    #[value(name = "2.5")]
    M2_5,
    #[value(name = "1.0")]
    M1_0,
    All,
}

/// Time window of the USGS summary feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FeedWindow {
    Hour,
    Day,
    Week,
    Month,
}

impl FeedLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedLevel::Significant => "significant",
            FeedLevel::M4_5 => "4.5",
            FeedLevel::M2_5 => "2.5",
            FeedLevel::M1_0 => "1.0",
            FeedLevel::All => "all",
        }
    }
}

impl FeedWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedWindow::Hour => "hour",
            FeedWindow::Day => "day",
            FeedWindow::Week => "week",
            FeedWindow::Month => "month",
        }
    }
}

pub fn usgs_summary_url(level: FeedLevel, window: FeedWindow) -> String {
    format!(
        "{USGS_SUMMARY_BASE}/{}_{}.geojson",
        level.as_str(),
        window.as_str()
    )
}

/// Where the feed document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedSource {
    Url(String),
    File(PathBuf),
}

impl FeedSource {
    /// Local file wins, then explicit level/window, then the configured URL.
    pub fn resolve(
        cfg: &FeedConfig,
        input: Option<&str>,
        url: Option<&str>,
        level: Option<FeedLevel>,
        window: Option<FeedWindow>,
    ) -> Self {
        if let Some(path) = input {
            return FeedSource::File(crate::utils::path::expand_tilde(path));
        }
        if let Some(u) = url {
            return FeedSource::Url(u.to_string());
        }
        if level.is_some() || window.is_some() {
            return FeedSource::Url(usgs_summary_url(
                level.unwrap_or(FeedLevel::All),
                window.unwrap_or(FeedWindow::Week),
            ));
        }
        FeedSource::Url(cfg.url.clone())
    }
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedSource::Url(u) => f.write_str(u),
            FeedSource::File(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Parse a feed body, requiring a GeoJSON `FeatureCollection`.
pub fn parse_feed(body: &str) -> AppResult<FeedDocument> {
    let doc: FeedDocument = serde_json::from_str(body)
        .map_err(|e| AppError::FeedUnavailable(format!("malformed document: {e}")))?;

    if doc.kind != "FeatureCollection" {
        return Err(AppError::FeedUnavailable(format!(
            "expected a FeatureCollection, got '{}'",
            doc.kind
        )));
    }

    Ok(doc)
}

pub struct FeedLoader {
    source: FeedSource,
    retry_once: bool,
    timeout: Option<Duration>,
}

impl FeedLoader {
    pub fn new(source: FeedSource, cfg: &FeedConfig) -> Self {
        Self {
            source,
            retry_once: cfg.retry_once,
            timeout: cfg.timeout_secs.map(Duration::from_secs),
        }
    }

    pub fn source(&self) -> &FeedSource {
        &self.source
    }

    /// Load and parse the feed. Every failure surfaces as [`AppError::FeedUnavailable`].
    pub fn load(&self) -> AppResult<FeedDocument> {
        let body = match &self.source {
            FeedSource::File(path) => {
                debug!(path = %path.display(), "reading local feed");
                fs::read_to_string(path).map_err(|e| {
                    AppError::FeedUnavailable(format!("cannot read {}: {e}", path.display()))
                })?
            }
            FeedSource::Url(url) => self.fetch_with_retry(url)?,
        };

        let doc = parse_feed(&body)?;
        info!(source = %self.source, features = doc.features.len(), "feed loaded");
        Ok(doc)
    }

    fn fetch_with_retry(&self, url: &str) -> AppResult<String> {
        match self.fetch(url) {
            Ok(body) => Ok(body),
            Err(e) if self.retry_once => {
                warn!(url, error = %e, "feed fetch failed, retrying once");
                self.fetch(url)
            }
            Err(e) => Err(e),
        }
    }

    fn fetch(&self, url: &str) -> AppResult<String> {
        debug!(url, "fetching feed");

        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(t) = self.timeout {
            builder = builder.timeout(t);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::FeedUnavailable(format!("HTTP client setup failed: {e}")))?;

        let response = client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::FeedUnavailable(e.to_string()))?;

        response
            .text()
            .map_err(|e| AppError::FeedUnavailable(format!("reading response body: {e}")))
    }
}
