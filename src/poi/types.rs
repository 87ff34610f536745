//! Overpass wire types and the normalized point-of-interest record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

pub const UNNAMED: &str = "Unnamed";
pub const NO_ADDRESS: &str = "No address";

/// Tags concatenated, in this order, to form the display address.
const ADDRESS_TAGS: [&str; 3] = ["addr:street", "addr:housenumber", "addr:city"];

#[derive(Deserialize, Debug, Default)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct RawElement {
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Raw coordinates, passed through as-is (either side may be missing).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoiRecord {
    pub name: String,
    pub phone: Option<String>,
    pub location: Location,
    pub address: String,
}

impl From<RawElement> for PoiRecord {
    fn from(element: RawElement) -> Self {
        let tags = element.tags.unwrap_or_default();
        let tag = |key: &str| tags.get(key).filter(|v| !v.is_empty()).cloned();

        let address = ADDRESS_TAGS
            .iter()
            .filter_map(|key| tag(*key))
            .collect::<Vec<_>>()
            .join(" ");

        PoiRecord {
            name: tags.get("name").cloned().unwrap_or_else(|| UNNAMED.to_string()),
            phone: tags.get("phone").cloned(),
            location: Location {
                lat: element.lat,
                lng: element.lon,
            },
            address: if address.is_empty() {
                NO_ADDRESS.to_string()
            } else {
                address
            },
        }
    }
}

/// Overpass failures. Unlike geocoding errors these are always surfaced.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Overpass API error (status {0})")]
    Status(u16),

    #[error("{0}")]
    Request(String),
}
