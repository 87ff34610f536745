//! Supermarket finder: locate supermarket-like shops in a city via
//! OpenStreetMap (Nominatim for the area, Overpass for the shops).

pub mod config;
pub mod envelope;
pub mod finder;
pub mod location;
pub mod poi;
pub mod server;

#[cfg(test)]
mod testing;

pub use config::FinderConfig;
pub use envelope::{ErrorBody, ErrorKind, ResultEnvelope, Supermarkets};
pub use finder::SupermarketFinder;
