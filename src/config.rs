//! Runtime configuration: service endpoints, identification, timeouts.
//!
//! Everything has a built-in default; the CLI flags in `main.rs` are the
//! only way to override them.

use std::time::Duration;

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_OVERPASS_URL: &str = "https://overpass-api.de";
pub const DEFAULT_USER_AGENT: &str = "SupermarketFinder/0.1 (osm-poi-lookup)";

/// Per-attempt geocoding timeout.
pub const DEFAULT_GEOCODE_TIMEOUT: Duration = Duration::from_secs(8);
/// Overpass request timeout. Longer than the server-side `[timeout:30]`.
pub const DEFAULT_OVERPASS_TIMEOUT: Duration = Duration::from_secs(40);

#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    /// Base URL of the Nominatim instance; `/search` is appended.
    pub nominatim_url: String,
    /// Base URL of the Overpass instance; `/api/interpreter` is appended.
    pub overpass_url: String,
    pub user_agent: String,
    pub geocode_timeout: Duration,
    pub overpass_timeout: Duration,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            overpass_url: DEFAULT_OVERPASS_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            geocode_timeout: DEFAULT_GEOCODE_TIMEOUT,
            overpass_timeout: DEFAULT_OVERPASS_TIMEOUT,
        }
    }
}

impl FinderConfig {
    pub fn nominatim_search_url(&self) -> String {
        format!("{}/search", self.nominatim_url.trim_end_matches('/'))
    }

    pub fn overpass_interpreter_url(&self) -> String {
        format!("{}/api/interpreter", self.overpass_url.trim_end_matches('/'))
    }
}
