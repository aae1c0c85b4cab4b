//! TOML configuration with environment override for the API key.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::google::{GoogleMapsClient, DEFAULT_BASE_URL};
use crate::models::Coordinate;
use crate::session::SessionOptions;

/// Environment variable holding the Google Maps API key
pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub google: GoogleConfig,
    pub map: MapSettings,
    pub session: SessionOptions,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GoogleConfig {
    /// Overridden by `GOOGLE_MAPS_API_KEY` when that is set
    pub api_key: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Initial map view
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MapSettings {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
    pub min_zoom: Option<u8>,
}

impl MapSettings {
    /// Country view used by the regional map
    pub fn somalia() -> Self {
        Self {
            center_lat: 5.152149,
            center_lon: 46.199615,
            zoom: 6,
            min_zoom: Some(6),
        }
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.center_lat, self.center_lon)
    }

    /// Zoom clamped to the configured minimum
    pub fn clamp_zoom(&self, zoom: u8) -> u8 {
        self.min_zoom.map_or(zoom, |min| zoom.max(min))
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: 13.7563,
            center_lon: 100.5018,
            zoom: 12,
            min_zoom: None,
        }
    }
}

/// Non-empty environment value wins over the file value
fn choose_api_key(env: Option<String>, file: Option<&str>) -> Result<String, ConfigError> {
    env.filter(|k| !k.trim().is_empty())
        .or_else(|| file.filter(|k| !k.trim().is_empty()).map(String::from))
        .ok_or(ConfigError::MissingApiKey)
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// API key from the environment or the config file
    pub fn api_key(&self) -> Result<String, ConfigError> {
        choose_api_key(std::env::var(API_KEY_ENV).ok(), self.google.api_key.as_deref())
    }

    pub fn google_client(&self) -> Result<GoogleMapsClient, ConfigError> {
        GoogleMapsClient::new(
            &self.api_key()?,
            &self.google.base_url,
            Duration::from_secs(self.google.timeout_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.google.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.google.timeout_secs, 10);
        assert_eq!(config.map, MapSettings::default());
        assert!(!config.session.show_locality_suffix);
        assert!(!config.session.discard_stale_labels);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[google]
api_key = "file-key"
timeout_secs = 3

[map]
center_lat = 5.152149
center_lon = 46.199615
zoom = 6
min_zoom = 6

[session]
show_locality_suffix = true
"#
        )
        .unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.google.api_key.as_deref(), Some("file-key"));
        assert_eq!(config.google.timeout_secs, 3);
        assert_eq!(config.map, MapSettings::somalia());
        assert!(config.session.show_locality_suffix);
        assert!(!config.session.discard_stale_labels);
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load_from_file("/nonexistent/gridaddr.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file() {
        let err = Config::from_toml_str("[map]\nzoom = \"high\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_key_overrides_file() {
        let key = choose_api_key(Some("env-key".to_string()), Some("file-key")).unwrap();
        assert_eq!(key, "env-key");
    }

    #[test]
    fn test_blank_env_key_falls_back_to_file() {
        let key = choose_api_key(Some("  ".to_string()), Some("file-key")).unwrap();
        assert_eq!(key, "file-key");
    }

    #[test]
    fn test_missing_key_is_error() {
        assert!(matches!(
            choose_api_key(None, None),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            choose_api_key(None, Some("")),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn test_min_zoom_clamp() {
        let somalia = MapSettings::somalia();
        assert_eq!(somalia.clamp_zoom(3), 6);
        assert_eq!(somalia.clamp_zoom(18), 18);
        assert_eq!(MapSettings::default().clamp_zoom(3), 3);
    }
}
