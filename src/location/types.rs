//! Core types for the location subsystem.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A geographic bounding box in degrees.
///
/// Field order follows the Overpass convention (south, west, north, east),
/// which is also the order used when the box is rendered into a query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    pub const fn new(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self { south, west, north, east }
    }

    /// Build a box from Nominatim's `boundingbox` field, which is ordered
    /// south, north, west, east and encoded as strings.
    pub fn from_nominatim(raw: &[String]) -> Result<Self, LocationError> {
        if raw.len() != 4 {
            return Err(LocationError::InvalidResponse(format!(
                "expected 4 boundingbox values, got {}",
                raw.len()
            )));
        }

        let mut values = [0.0_f64; 4];
        for (slot, text) in values.iter_mut().zip(raw) {
            *slot = text.trim().parse().map_err(|_| {
                LocationError::InvalidResponse(format!("non-numeric boundingbox value '{}'", text))
            })?;
        }

        let [south, north, west, east] = values;
        Ok(Self::new(south, west, north, east))
    }

    /// True when south < north and west < east.
    pub fn is_well_ordered(&self) -> bool {
        self.south < self.north && self.west < self.east
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}

/// How a bounding box was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSource {
    Nominatim,
    Gazetteer,
}

impl fmt::Display for LocationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominatim => write!(f, "Nominatim"),
            Self::Gazetteer => write!(f, "Built-in"),
        }
    }
}

/// A bounding box together with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArea {
    pub bbox: BoundingBox,
    pub source: LocationSource,
}

/// Geocoding errors. These never leave the resolver: every variant is
/// absorbed by the candidate fallback.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Geocoder returned status {0}")]
    Status(u16),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Location not found: '{0}'")]
    NotFound(String),
}
