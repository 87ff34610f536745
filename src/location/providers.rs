//! Geocoding provider: OpenStreetMap Nominatim behind the `PlaceSearch`
//! seam, plus the two-candidate `Geocoder` built on top of it.

use super::types::{BoundingBox, LocationError};
use crate::config::FinderConfig;
use serde::Deserialize;
use tracing::{debug, warn};
use ureq::{Agent, AgentBuilder};

/// Country appended to the first (localized) geocoding candidate.
pub const COUNTRY_SUFFIX: &str = "Iran";

// ─── Nominatim provider ─────────────────────────────────────────

/// One Nominatim search hit. Only the bounding box is used.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct NominatimPlace {
    /// Ordered south, north, west, east, as numeric strings.
    #[serde(default)]
    pub boundingbox: Option<Vec<String>>,
}

/// A free-text place search service.
pub trait PlaceSearch {
    fn search(&self, query: &str) -> Result<Vec<NominatimPlace>, LocationError>;
}

/// Blocking Nominatim client.
pub struct Nominatim {
    agent: Agent,
    search_url: String,
}

impl Nominatim {
    pub fn new(config: &FinderConfig) -> Self {
        let agent = AgentBuilder::new()
            .timeout(config.geocode_timeout)
            .user_agent(&config.user_agent)
            .build();
        Self {
            agent,
            search_url: config.nominatim_search_url(),
        }
    }
}

impl PlaceSearch for Nominatim {
    fn search(&self, query: &str) -> Result<Vec<NominatimPlace>, LocationError> {
        let response = self
            .agent
            .get(&self.search_url)
            .query("q", query)
            .query("format", "json")
            .query("limit", "1")
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => LocationError::Status(code),
                ureq::Error::Transport(t) => LocationError::Network(t.to_string()),
            })?;

        response
            .into_json()
            .map_err(|e| LocationError::InvalidResponse(e.to_string()))
    }
}

// ─── Geocoder ───────────────────────────────────────────────────

/// The ordered geocoding candidates for a city: localized first, bare second.
pub fn candidate_queries(city: &str) -> [String; 2] {
    [format!("{}, {}", city, COUNTRY_SUFFIX), city.to_string()]
}

/// Best-effort geocoder. Tries each candidate once, in order, and keeps the
/// first bounding box it gets. Failures are logged and swallowed.
pub struct Geocoder {
    search: Box<dyn PlaceSearch + Send + Sync>,
}

impl Geocoder {
    pub fn new(search: Box<dyn PlaceSearch + Send + Sync>) -> Self {
        Self { search }
    }

    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new(Box::new(Nominatim::new(config)))
    }

    pub fn resolve(&self, city: &str) -> Option<BoundingBox> {
        candidate_queries(city).iter().find_map(|query| match self.attempt(query) {
            Ok(bbox) => {
                debug!(query = %query, bbox = %bbox, "geocoded");
                Some(bbox)
            }
            Err(e) => {
                debug!(query = %query, error = %e, "geocoding candidate failed");
                None
            }
        })
    }

    fn attempt(&self, query: &str) -> Result<BoundingBox, LocationError> {
        let place = self
            .search
            .search(query)?
            .into_iter()
            .next()
            .ok_or_else(|| LocationError::NotFound(query.to_string()))?;

        let raw = place
            .boundingbox
            .ok_or_else(|| LocationError::InvalidResponse("no boundingbox field".into()))?;
        let bbox = BoundingBox::from_nominatim(&raw)?;

        if !bbox.is_well_ordered() {
            warn!(query = %query, bbox = %bbox, "geocoder returned a mis-ordered bounding box");
        }
        Ok(bbox)
    }
}
