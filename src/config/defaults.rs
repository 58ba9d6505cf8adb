//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default latitude input text (downtown Toronto)
pub const DEFAULT_LATITUDE_TEXT: &str = "43.65";

/// Default longitude input text
pub const DEFAULT_LONGITUDE_TEXT: &str = "-79.38";

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default calculation service base URL
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

/// Default calculation request timeout in seconds
pub const DEFAULT_SERVICE_TIMEOUT_SECS: u64 = 30;

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 3000;

/// Default map zoom level
pub const DEFAULT_MAP_ZOOM: u8 = 10;

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "google";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "solar-orient";
