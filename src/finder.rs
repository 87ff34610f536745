//! The end-to-end lookup: city name → bounding box → Overpass → envelope.
//!
//! Geocoding is best-effort (failures fall through to the gazetteer);
//! the Overpass fetch is hard-fail (any failure becomes the result).

use crate::config::FinderConfig;
use crate::envelope::{ErrorBody, ResultEnvelope, Supermarkets};
use crate::location::LocationResolver;
use crate::poi::{self, query, Interpreter, Overpass};
use tracing::{debug, info};

pub struct SupermarketFinder {
    resolver: LocationResolver,
    interpreter: Box<dyn Interpreter + Send + Sync>,
}

impl SupermarketFinder {
    pub fn new(config: &FinderConfig) -> Self {
        Self::with_parts(LocationResolver::new(config), Box::new(Overpass::new(config)))
    }

    pub fn with_parts(
        resolver: LocationResolver,
        interpreter: Box<dyn Interpreter + Send + Sync>,
    ) -> Self {
        Self { resolver, interpreter }
    }

    /// Skip the geocoder; only gazetteer cities resolve.
    pub fn set_offline(&mut self, offline: bool) {
        self.resolver.set_offline(offline);
    }

    /// Run one lookup. Always yields exactly one envelope.
    pub fn run(&self, city: &str) -> ResultEnvelope {
        let city = city.trim();
        if city.is_empty() {
            return ErrorBody::city_required().into();
        }

        let area = match self.resolver.resolve_city(city) {
            Ok(area) => area,
            Err(e) => {
                debug!(error = %e, "no bounding box");
                return ErrorBody::city_not_found(city).into();
            }
        };
        info!(city = %city, bbox = %area.bbox, source = %area.source, "resolved");

        let query = query::build(&area.bbox);
        match poi::fetch(self.interpreter.as_ref(), &query) {
            Ok(records) => {
                info!(city = %city, total = records.len(), "found supermarkets");
                ResultEnvelope::Success(Supermarkets::new(city, records))
            }
            Err(e) => ErrorBody::from(e).into(),
        }
    }
}
