//! Map composer: markers + base layers + layer control + legend -> standalone Leaflet page.

use crate::config::MapConfig;
use crate::core::legend::legend_bands;
use crate::errors::AppResult;
use crate::models::StyledMarker;
use minijinja::{Environment, Value, context};
use serde::Serialize;
use tracing::{debug, warn};

const MAP_TEMPLATE_NAME: &str = "map.html";
const MAP_TEMPLATE: &str = include_str!("../templates/map.html");

/// Tile layer as handed to Leaflet's `L.tileLayer`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerSpec<'a> {
    name: &'a str,
    url: &'a str,
    id: &'a str,
    access_token: &'a str,
    max_zoom: u8,
    attribution: &'a str,
}

/// JSON safe for inlining inside a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> AppResult<Value> {
    let json = serde_json::to_string(value)?
        .replace("</", "<\\/")
        .replace("<!--", "<\\!--");
    Ok(Value::from_safe_string(json))
}

pub struct MapComposer<'a> {
    map: &'a MapConfig,
    access_token: Option<String>,
    env: Environment<'static>,
}

impl<'a> MapComposer<'a> {
    pub fn new(map: &'a MapConfig, access_token: Option<String>) -> AppResult<Self> {
        let mut env = Environment::new();
        env.add_template(MAP_TEMPLATE_NAME, MAP_TEMPLATE)?;

        if access_token.is_none() {
            warn!("no tile access token configured; base layers will not load");
        }

        Ok(Self {
            map,
            access_token,
            env,
        })
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    fn tile_layers(&self) -> Vec<TileLayerSpec<'_>> {
        let token = self.access_token.as_deref().unwrap_or_default();
        self.map
            .base_layers
            .iter()
            .map(|layer| TileLayerSpec {
                name: &layer.name,
                url: &self.map.tile_url,
                id: &layer.style_id,
                access_token: token,
                max_zoom: self.map.max_zoom,
                attribution: &self.map.attribution,
            })
            .collect()
    }

    /// Render the interactive view as one HTML document.
    pub fn compose(&self, markers: &[StyledMarker]) -> AppResult<String> {
        let template = self.env.get_template(MAP_TEMPLATE_NAME)?;

        let html = template.render(context! {
            title => &self.map.title,
            container => &self.map.container,
            container_json => script_json(&self.map.container)?,
            center_lat => self.map.center[0],
            center_lon => self.map.center[1],
            zoom => self.map.zoom,
            overlay_name_json => script_json(&self.map.overlay_name)?,
            base_layers_json => script_json(&self.tile_layers())?,
            markers_json => script_json(markers)?,
            legend => legend_bands(),
        })?;

        debug!(markers = markers.len(), bytes = html.len(), "map composed");
        Ok(html)
    }
}
