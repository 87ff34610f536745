//! Points of interest: Overpass query construction, fetching, normalization.

pub mod overpass;
pub mod query;
pub mod types;

pub use overpass::{fetch, Interpreter, Overpass};
pub use types::{FetchError, Location, OverpassResponse, PoiRecord, RawElement};
