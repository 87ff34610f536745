//! The single JSON document produced per lookup: a success listing or an
//! error object.

use crate::poi::{FetchError, PoiRecord};
use serde::Serialize;

pub const SOURCE_LABEL: &str = "OpenStreetMap";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultEnvelope {
    Success(Supermarkets),
    Error(ErrorBody),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supermarkets {
    pub city: String,
    pub source: String,
    pub total: usize,
    pub data: Vec<PoiRecord>,
}

impl Supermarkets {
    pub fn new(city: &str, data: Vec<PoiRecord>) -> Self {
        Self {
            city: city.to_string(),
            source: SOURCE_LABEL.to_string(),
            total: data.len(),
            data,
        }
    }
}

/// What went wrong, independent of the rendered label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty or whitespace-only city name.
    Input,
    /// Neither the geocoder nor the gazetteer knew the city.
    Resolution,
    /// Overpass answered with a non-success status.
    UpstreamStatus,
    /// Overpass could not be reached or sent an unreadable body.
    Transport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    #[serde(skip)]
    pub kind: ErrorKind,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

impl ErrorBody {
    fn new(kind: ErrorKind, error: &str) -> Self {
        Self {
            kind,
            error: error.to_string(),
            message: None,
            details: None,
            code: None,
        }
    }

    pub fn city_required() -> Self {
        Self::new(ErrorKind::Input, "City name is required")
    }

    pub fn city_not_found(city: &str) -> Self {
        Self {
            message: Some(format!(
                "Could not locate '{}'. Try major cities like Tehran, Isfahan, etc.",
                city
            )),
            ..Self::new(ErrorKind::Resolution, "City not found")
        }
    }
}

impl From<FetchError> for ErrorBody {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::Status(code) => Self {
                code: Some(code),
                ..Self::new(ErrorKind::UpstreamStatus, "Overpass API error")
            },
            FetchError::Request(details) => Self {
                details: Some(details),
                ..Self::new(ErrorKind::Transport, "Request failed")
            },
        }
    }
}

impl ResultEnvelope {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Render as pretty (2-space) or single-line JSON. Non-ASCII is kept as-is.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

impl From<ErrorBody> for ResultEnvelope {
    fn from(e: ErrorBody) -> Self {
        Self::Error(e)
    }
}
