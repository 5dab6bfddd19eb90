use crate::core::feed::{FeedLevel, FeedWindow, usgs_summary_url};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod migrate; // use submodule at src/config/migrate.rs

/// Environment variable that supplies the tile service access token.
pub const ACCESS_TOKEN_ENV: &str = "QUAKEMAP_ACCESS_TOKEN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub map: MapConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_feed_url")]
    pub url: String,
    #[serde(default = "default_retry_once")]
    pub retry_once: bool,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_container")]
    pub container: String,
    /// `[latitude, longitude]` of the initial view.
    #[serde(default = "default_center")]
    pub center: [f64; 2],
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_overlay_name")]
    pub overlay_name: String,
    /// Leaflet tile URL template; `{id}` is the style id, `{accessToken}` the token.
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
    #[serde(default = "default_attribution")]
    pub attribution: String,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
    #[serde(default = "default_base_layers")]
    pub base_layers: Vec<BaseLayer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseLayer {
    pub name: String,
    pub style_id: String,
}

fn default_feed_url() -> String {
    usgs_summary_url(FeedLevel::All, FeedWindow::Week)
}
fn default_retry_once() -> bool {
    true
}
fn default_title() -> String {
    "Earthquakes".to_string()
}
fn default_container() -> String {
    "map".to_string()
}
fn default_center() -> [f64; 2] {
    [37.09, -95.71]
}
fn default_zoom() -> u8 {
    5
}
fn default_overlay_name() -> String {
    "Earthquakes".to_string()
}
fn default_tile_url() -> String {
    "https://api.tiles.mapbox.com/v4/{id}/{z}/{x}/{y}.png?access_token={accessToken}".to_string()
}
fn default_attribution() -> String {
    "Map data &copy; <a href=\"https://www.openstreetmap.org/\">OpenStreetMap</a> contributors, \
     <a href=\"https://creativecommons.org/licenses/by-sa/2.0/\">CC-BY-SA</a>, \
     Imagery © <a href=\"https://www.mapbox.com/\">Mapbox</a>"
        .to_string()
}
fn default_max_zoom() -> u8 {
    18
}
fn default_base_layers() -> Vec<BaseLayer> {
    vec![
        BaseLayer {
            name: "Street Map".to_string(),
            style_id: "mapbox.streets".to_string(),
        },
        BaseLayer {
            name: "Dark Map".to_string(),
            style_id: "mapbox.dark".to_string(),
        },
    ]
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            retry_once: default_retry_once(),
            timeout_secs: None,
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            container: default_container(),
            center: default_center(),
            zoom: default_zoom(),
            overlay_name: default_overlay_name(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
            max_zoom: default_max_zoom(),
            base_layers: default_base_layers(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            access_token: None,
            map: MapConfig::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.quakemap`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".quakemap")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("quakemap.conf")
    }

    /// Resolve the config path: explicit override or the standard location
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    fn validate(&self) -> AppResult<()> {
        if self.map.base_layers.is_empty() {
            return Err(AppError::Config(
                "map.base_layers must list at least one layer".into(),
            ));
        }
        if self.feed.url.trim().is_empty() {
            return Err(AppError::Config("feed.url must not be empty".into()));
        }
        Ok(())
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn init(path: &Path, force: bool) -> AppResult<Self> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let config = Config::default();
        fs::write(path, config.to_yaml()?)?;
        Ok(config)
    }

    /// Access token with precedence: explicit value, then environment, then file.
    /// Blank values are ignored at every level.
    pub fn resolve_access_token(&self, explicit: Option<&str>) -> Option<String> {
        let non_blank = |s: &str| {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_string())
        };

        explicit
            .and_then(non_blank)
            .or_else(|| env::var(ACCESS_TOKEN_ENV).ok().as_deref().and_then(non_blank))
            .or_else(|| self.access_token.as_deref().and_then(non_blank))
    }
}
