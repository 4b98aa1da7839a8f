use serde::{Deserialize, Serialize};

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
        }
    }
}

/// IBGE localities service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeographyConfig {
    #[serde(default = "default_geography_base_url")]
    pub base_url: String,
}

impl Default for GeographyConfig {
    fn default() -> Self {
        Self {
            base_url: default_geography_base_url(),
        }
    }
}

/// Initial viewport and tile source of the map picker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    /// Tile URL template with `{z}`, `{x}` and `{y}` placeholders.
    #[serde(default = "default_tile_url")]
    pub tile_url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
            tile_url: default_tile_url(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub geography: GeographyConfig,
    #[serde(default)]
    pub map: MapConfig,
}

fn default_api_base_url() -> String {
    "http://localhost:3333".to_string()
}

fn default_geography_base_url() -> String {
    "https://servicodados.ibge.gov.br/api/v1/localidades".to_string()
}

fn default_center_lat() -> f64 {
    -28.6707202
}

fn default_center_lng() -> f64 {
    -49.4764859
}

fn default_zoom() -> u8 {
    15
}

fn default_tile_url() -> String {
    "https://tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}
