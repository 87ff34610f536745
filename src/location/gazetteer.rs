//! Built-in gazetteer: a fixed bilingual table of major Iranian cities.
//!
//! Only consulted after the geocoder has given up. Matching is exact:
//! no case folding, no transliteration, no fuzzy search.

use super::types::BoundingBox;
use serde::Serialize;

struct GazetteerEntry {
    name: &'static str,
    bbox: BoundingBox,
}

const fn entry(name: &'static str, south: f64, west: f64, north: f64, east: f64) -> GazetteerEntry {
    GazetteerEntry {
        name,
        bbox: BoundingBox::new(south, west, north, east),
    }
}

const GAZETTEER: &[GazetteerEntry] = &[
    // English
    entry("Tehran", 35.60, 51.20, 35.80, 51.60),
    entry("Isfahan", 32.60, 51.50, 32.80, 51.80),
    entry("Mashhad", 36.20, 59.40, 36.40, 59.70),
    entry("Shiraz", 29.50, 52.40, 29.70, 52.70),
    entry("Tabriz", 38.00, 46.20, 38.20, 46.40),
    entry("Karaj", 35.75, 50.90, 35.90, 51.10),
    entry("Qom", 34.60, 50.80, 34.75, 51.00),
    // Persian
    entry("تهران", 35.60, 51.20, 35.80, 51.60),
    entry("اصفهان", 32.60, 51.50, 32.80, 51.80),
    entry("مشهد", 36.20, 59.40, 36.40, 59.70),
    entry("شیراز", 29.50, 52.40, 29.70, 52.70),
    entry("تبریز", 38.00, 46.20, 38.20, 46.40),
    entry("کرج", 35.75, 50.90, 35.90, 51.10),
    entry("قم", 34.60, 50.80, 34.75, 51.00),
];

/// Exact-match lookup.
pub fn lookup(name: &str) -> Option<BoundingBox> {
    GAZETTEER.iter().find(|e| e.name == name).map(|e| e.bbox)
}

/// A gazetteer row for the public city list API.
#[derive(Debug, Clone, Serialize)]
pub struct CityInfo {
    pub name: String,
    #[serde(flatten)]
    pub bbox: BoundingBox,
}

/// Return every gazetteer entry, in table order.
pub fn entries() -> Vec<CityInfo> {
    GAZETTEER
        .iter()
        .map(|e| CityInfo {
            name: e.name.to_string(),
            bbox: e.bbox,
        })
        .collect()
}
