//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/solar-orient/config.toml

pub mod defaults;

use crate::constants::env::MAPS_API_KEY_VAR;
use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default values for calculation input
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Calculation service settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Map widget settings
    #[serde(default)]
    pub map: MapConfig,

    /// URL generation settings
    #[serde(default)]
    pub url: UrlConfig,
}

/// Default values for calculation input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default latitude input text
    #[serde(default = "default_latitude")]
    pub latitude: String,

    /// Default longitude input text
    #[serde(default = "default_longitude")]
    pub longitude: String,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Calculation service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the external calculation service
    #[serde(default = "default_service_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_service_timeout")]
    pub timeout_secs: u64,
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Map widget settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MapConfig {
    /// Map API key; empty means not configured
    #[serde(default)]
    pub api_key: String,

    /// Initial zoom level
    #[serde(default = "default_map_zoom")]
    pub zoom: u8,
}

/// URL generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Default URL provider
    #[serde(default = "default_url_provider")]
    pub default: String,

    /// URL provider templates
    #[serde(default = "default_url_providers")]
    pub providers: HashMap<String, String>,
}

// Default value functions for serde
fn default_latitude() -> String {
    DEFAULT_LATITUDE_TEXT.to_string()
}
fn default_longitude() -> String {
    DEFAULT_LONGITUDE_TEXT.to_string()
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}
fn default_service_timeout() -> u64 {
    DEFAULT_SERVICE_TIMEOUT_SECS
}
fn default_host() -> String {
    DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_map_zoom() -> u8 {
    DEFAULT_MAP_ZOOM
}
fn default_url_provider() -> String {
    DEFAULT_URL_PROVIDER.to_string()
}
fn default_url_providers() -> HashMap<String, String> {
    let mut providers = HashMap::new();
    providers.insert(
        "google".to_string(),
        "https://www.google.com/maps/@{lat},{lng},15z".to_string(),
    );
    providers.insert(
        "openstreetmap".to_string(),
        "https://www.openstreetmap.org/#map=18/{lat}/{lng}".to_string(),
    );
    providers.insert(
        "apple".to_string(),
        "https://maps.apple.com/?ll={lat},{lng}".to_string(),
    );
    providers
}

// Implement Default traits
impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
            service: ServiceConfig::default(),
            server: ServerConfig::default(),
            map: MapConfig {
                api_key: String::new(),
                zoom: default_map_zoom(),
            },
            url: UrlConfig::default(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            format: default_format(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_service_url(),
            timeout_secs: default_service_timeout(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            default: default_url_provider(),
            providers: default_url_providers(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            // Create default config
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Resolve the map API key
    ///
    /// The environment variable takes precedence over the config file;
    /// an empty value in either place counts as not configured.
    pub fn map_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(MAPS_API_KEY_VAR) {
            if !key.is_empty() {
                return Some(key);
            }
        }
        if self.map.api_key.is_empty() {
            None
        } else {
            Some(self.map.api_key.clone())
        }
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "latitude"] => Some(self.defaults.latitude.clone()),
            ["defaults", "longitude"] => Some(self.defaults.longitude.clone()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["service", "base_url"] => Some(self.service.base_url.clone()),
            ["service", "timeout_secs"] => Some(self.service.timeout_secs.to_string()),

            ["server", "host"] => Some(self.server.host.clone()),
            ["server", "port"] => Some(self.server.port.to_string()),

            ["map", "api_key"] => Some(self.map.api_key.clone()),
            ["map", "zoom"] => Some(self.map.zoom.to_string()),

            ["url", "default"] => Some(self.url.default.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "latitude"] => {
                self.defaults.latitude = value.to_string();
            }
            ["defaults", "longitude"] => {
                self.defaults.longitude = value.to_string();
            }
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }

            ["service", "base_url"] => {
                self.service.base_url = value.to_string();
            }
            ["service", "timeout_secs"] => {
                self.service.timeout_secs = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid timeout value: {}", value)))?;
            }

            ["server", "host"] => {
                self.server.host = value.to_string();
            }
            ["server", "port"] => {
                self.server.port = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid port value: {}", value)))?;
            }

            ["map", "api_key"] => {
                self.map.api_key = value.to_string();
            }
            ["map", "zoom"] => {
                self.map.zoom = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid zoom value: {}", value)))?;
            }

            ["url", "default"] => {
                self.url.default = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "defaults.latitude",
            "defaults.longitude",
            "defaults.format",
            "service.base_url",
            "service.timeout_secs",
            "server.host",
            "server.port",
            "map.api_key",
            "map.zoom",
            "url.default",
        ]
    }

    /// Format a URL using the specified provider
    ///
    /// Replaces {lat} and {lng} placeholders with actual values
    pub fn format_url(&self, provider: Option<&str>, lat: f64, lng: f64) -> Result<String> {
        let provider_name = provider.unwrap_or(&self.url.default);

        let template = self
            .url
            .providers
            .get(provider_name)
            .ok_or_else(|| Error::Config(format!("Unknown URL provider: {}", provider_name)))?;

        Ok(template
            .replace("{lat}", &lat.to_string())
            .replace("{lng}", &lng.to_string()))
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
