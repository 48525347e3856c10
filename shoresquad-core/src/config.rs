//! ShoreSquad configuration at ~/.config/shoresquad/config.toml

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_IP_LOOKUP_URL, DEFAULT_MAP_ZOOM, DEFAULT_WEATHER_URL, GEO_TIMEOUT, ORGANIZING_LATITUDE,
    ORGANIZING_LONGITUDE, WEATHER_TIMEOUT,
};
use crate::distance::Coordinates;
use crate::error::{ShoreSquadError, ShoreSquadResult};
use crate::geo::{FixedLocation, IpLocation, LocationSource, NoLocation, PositionOptions};
use crate::weather::{ForecastSource, HttpForecastSource};

fn default_weather_url() -> String {
    DEFAULT_WEATHER_URL.to_string()
}

fn default_ip_lookup_url() -> String {
    DEFAULT_IP_LOOKUP_URL.to_string()
}

fn default_weather_timeout() -> u64 {
    WEATHER_TIMEOUT.as_secs()
}

fn default_geo_timeout() -> u64 {
    GEO_TIMEOUT.as_secs()
}

fn default_organizing_location() -> Coordinates {
    Coordinates::new(ORGANIZING_LATITUDE, ORGANIZING_LONGITUDE)
}

fn default_map_zoom() -> u8 {
    DEFAULT_MAP_ZOOM
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_url")]
    pub url: String,

    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        WeatherConfig {
            url: default_weather_url(),
            timeout_secs: default_weather_timeout(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LocationSourceKind {
    #[default]
    Ip,
    Fixed,
    None,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LocationConfig {
    #[serde(default)]
    pub source: LocationSourceKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,

    #[serde(default = "default_geo_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_ip_lookup_url")]
    pub ip_lookup_url: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        LocationConfig {
            source: LocationSourceKind::default(),
            latitude: None,
            longitude: None,
            timeout_secs: default_geo_timeout(),
            ip_lookup_url: default_ip_lookup_url(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Dark,
    Light,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShoreSquadConfig {
    #[serde(default = "default_map_zoom")]
    pub map_zoom: u8,

    #[serde(default)]
    pub dark_mode: ThemePreference,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_script: Option<PathBuf>,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub location: LocationConfig,

    /// Map centre and coordinates for events created without a fix
    #[serde(default = "default_organizing_location")]
    pub organizing_location: Coordinates,
}

impl Default for ShoreSquadConfig {
    fn default() -> Self {
        ShoreSquadConfig {
            map_zoom: default_map_zoom(),
            dark_mode: ThemePreference::default(),
            worker_script: None,
            weather: WeatherConfig::default(),
            location: LocationConfig::default(),
            organizing_location: default_organizing_location(),
        }
    }
}

impl ShoreSquadConfig {
    pub fn config_path() -> ShoreSquadResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ShoreSquadError::Config("Could not determine config directory".into()))?
            .join("shoresquad");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, writing a commented default file on first run.
    pub fn load() -> ShoreSquadResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> ShoreSquadResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| ShoreSquadError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ShoreSquadError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ShoreSquadResult<()> {
        let contents = format!(
            "\
# ShoreSquad configuration

# Weather forecast endpoint and request timeout:
# [weather]
# url = \"{DEFAULT_WEATHER_URL}\"
# timeout_secs = {weather_timeout}

# Where your location comes from (ip, fixed or none):
# [location]
# source = \"ip\"
# latitude = 1.3521
# longitude = 103.8198
# timeout_secs = {geo_timeout}

# Map centre and default coordinates for new events:
# [organizing_location]
# latitude = {ORGANIZING_LATITUDE}
# longitude = {ORGANIZING_LONGITUDE}

# map_zoom = {DEFAULT_MAP_ZOOM}

# Colour scheme (auto, dark or light):
# dark_mode = \"auto\"

# Background worker script:
# worker_script = \"~/.config/shoresquad/worker.sh\"
",
            weather_timeout = WEATHER_TIMEOUT.as_secs(),
            geo_timeout = GEO_TIMEOUT.as_secs(),
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ShoreSquadError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ShoreSquadError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn to_toml(&self) -> ShoreSquadResult<String> {
        toml::to_string_pretty(self).map_err(|e| ShoreSquadError::Config(e.to_string()))
    }

    pub fn weather_timeout(&self) -> Duration {
        Duration::from_secs(self.weather.timeout_secs)
    }

    pub fn position_options(&self) -> PositionOptions {
        PositionOptions {
            timeout: Duration::from_secs(self.location.timeout_secs),
            ..PositionOptions::default()
        }
    }

    pub fn forecast_source(&self) -> Box<dyn ForecastSource> {
        Box::new(HttpForecastSource::new(self.weather.url.clone()))
    }

    pub fn location_source(&self) -> ShoreSquadResult<Box<dyn LocationSource>> {
        match self.location.source {
            LocationSourceKind::Ip => Ok(Box::new(IpLocation::new(
                self.location.ip_lookup_url.clone(),
            ))),
            LocationSourceKind::Fixed => match (self.location.latitude, self.location.longitude) {
                (Some(lat), Some(lng)) => Ok(Box::new(FixedLocation(Coordinates::new(lat, lng)))),
                _ => Err(ShoreSquadError::Config(
                    "location.source = \"fixed\" requires location.latitude and location.longitude"
                        .into(),
                )),
            },
            LocationSourceKind::None => Ok(Box::new(NoLocation)),
        }
    }

    /// `worker_script` with `~` expanded.
    pub fn worker_script_path(&self) -> Option<PathBuf> {
        self.worker_script.as_ref().map(|p| {
            PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShoreSquadConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, ShoreSquadConfig::default());
    }

    #[test]
    fn default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        ShoreSquadConfig::create_default_config(&path).unwrap();

        let config = ShoreSquadConfig::load_from(&path).unwrap();
        assert_eq!(config, ShoreSquadConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let (_dir, path) = write_config(
            r#"
map_zoom = 11
dark_mode = "dark"

[weather]
timeout_secs = 4

[location]
source = "fixed"
latitude = 34.0522
longitude = -118.2437
"#,
        );

        let config = ShoreSquadConfig::load_from(&path).unwrap();
        assert_eq!(config.map_zoom, 11);
        assert_eq!(config.dark_mode, ThemePreference::Dark);
        assert_eq!(config.weather_timeout(), Duration::from_secs(4));
        assert_eq!(config.weather.url, DEFAULT_WEATHER_URL);
        assert_eq!(config.location.source, LocationSourceKind::Fixed);
        assert!(config.location_source().is_ok());
        assert_eq!(config.organizing_location, default_organizing_location());
    }

    #[test]
    fn fixed_source_requires_coordinates() {
        let (_dir, path) = write_config("[location]\nsource = \"fixed\"\n");
        let config = ShoreSquadConfig::load_from(&path).unwrap();
        assert!(matches!(
            config.location_source(),
            Err(ShoreSquadError::Config(_))
        ));
    }

    #[test]
    fn rejects_unknown_theme() {
        let (_dir, path) = write_config("dark_mode = \"sepia\"\n");
        assert!(ShoreSquadConfig::load_from(&path).is_err());
    }

    #[test]
    fn renders_as_toml() {
        let rendered = ShoreSquadConfig::default().to_toml().unwrap();
        assert!(rendered.contains("map_zoom = 13"));
        assert!(rendered.contains("[weather]"));
    }
}
