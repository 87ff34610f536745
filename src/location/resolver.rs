//! Location resolver — orchestrates the bounding-box fallback chain.
//!
//! Flow:  Nominatim ("<city>, Iran" → "<city>") → built-in gazetteer → error

use super::gazetteer;
use super::providers::Geocoder;
use super::types::{LocationError, LocationSource, ResolvedArea};
use crate::config::FinderConfig;
use tracing::debug;

pub struct LocationResolver {
    geocoder: Geocoder,
    offline: bool,
}

impl LocationResolver {
    pub fn new(config: &FinderConfig) -> Self {
        Self::with_geocoder(Geocoder::from_config(config))
    }

    pub fn with_geocoder(geocoder: Geocoder) -> Self {
        Self { geocoder, offline: false }
    }

    /// Set offline mode — skip the geocoder and use the gazetteer only.
    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    /// Resolve an already-trimmed city name to a bounding box.
    pub fn resolve_city(&self, city: &str) -> Result<ResolvedArea, LocationError> {
        if !self.offline {
            if let Some(bbox) = self.geocoder.resolve(city) {
                return Ok(ResolvedArea {
                    bbox,
                    source: LocationSource::Nominatim,
                });
            }
            debug!(city = %city, "geocoder gave up, trying gazetteer");
        }

        if let Some(bbox) = gazetteer::lookup(city) {
            return Ok(ResolvedArea {
                bbox,
                source: LocationSource::Gazetteer,
            });
        }

        Err(LocationError::NotFound(city.to_string()))
    }
}
