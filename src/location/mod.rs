//! Location subsystem: city name → bounding box.
//!
//! Provides Nominatim geocoding with a localized-then-bare fallback and a
//! built-in bilingual gazetteer as the last resort.

pub mod gazetteer;
pub mod providers;
pub mod resolver;
pub mod types;

pub use gazetteer::CityInfo;
pub use providers::{Geocoder, Nominatim, NominatimPlace, PlaceSearch};
pub use resolver::LocationResolver;
pub use types::{BoundingBox, LocationError, LocationSource, ResolvedArea};
