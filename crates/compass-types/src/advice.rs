//! Advice request/response types for Career Compass.
//!
//! These types model the data shapes at the advice backend boundary:
//! the user's situation plus optional location going out, free-form text
//! plus grounded citations coming back.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::ad::CountryCode;
use crate::language::Language;

/// A latitude/longitude pair from the geolocation source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Best-effort picture of where the user is.
///
/// Both fields are optional: the geolocation source may be denied, time
/// out, or fail, and the flow proceeds regardless.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserLocation {
    /// Coordinates forwarded to the advice backend for local grounding.
    pub point: Option<GeoPoint>,
    /// Detected country, used only for ad targeting.
    pub country: Option<CountryCode>,
}

/// Request to the advice backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceRequest {
    /// The user's free-text description of their situation.
    pub situation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    pub language: Language,
}

/// Response from the advice backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdviceResponse {
    /// The generated advice, markdown-like. The backend may return nothing.
    pub text: Option<String>,
    /// Grounding sources, in the order the backend reported them.
    pub citations: Vec<Citation>,
}

/// What kind of source a citation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitationKind {
    Web,
    Maps,
}

impl fmt::Display for CitationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CitationKind::Web => write!(f, "web"),
            CitationKind::Maps => write!(f, "maps"),
        }
    }
}

impl FromStr for CitationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "web" => Ok(CitationKind::Web),
            "maps" => Ok(CitationKind::Maps),
            other => Err(format!("invalid citation kind: '{other}'")),
        }
    }
}

/// A source reference returned alongside generated advice.
///
/// Immutable once received; rendered as a list in backend order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub kind: CitationKind,
    pub uri: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_citation_kind_roundtrip() {
        for kind in [CitationKind::Web, CitationKind::Maps] {
            let s = kind.to_string();
            let parsed: CitationKind = s.parse().unwrap();
            assert_eq!(kind, parsed);
        }
    }

    #[test]
    fn test_citation_kind_serde() {
        let json = serde_json::to_string(&CitationKind::Maps).unwrap();
        assert_eq!(json, "\"maps\"");
    }

    #[test]
    fn test_user_location_default_is_empty() {
        let loc = UserLocation::default();
        assert!(loc.point.is_none());
        assert!(loc.country.is_none());
    }

    #[test]
    fn test_advice_request_omits_absent_location() {
        let request = AdviceRequest {
            situation: "laid off last month".to_string(),
            location: None,
            language: Language::En,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("location"));
    }
}
