//! Promotional ad types for the rotating banner.
//!
//! Ads are held in two independent ordered collections keyed by
//! [`Language`](crate::language::Language). They are created by admin
//! input, deleted by admin action, and never otherwise mutated.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

use crate::error::AdError;

/// Identifier for an ad, unique within one language's collection.
///
/// Assigned by the store at creation time from a monotonic counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AdId(pub u64);

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AdId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// An uppercase two-letter country code (e.g. "US", "MX").
///
/// Admin input is trimmed and uppercased on the way in; anything that is
/// not exactly two ASCII letters is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    pub fn new(code: &str) -> Result<Self, AdError> {
        let trimmed = code.trim();
        let valid = trimmed.chars().count() == 2
            && trimmed.chars().all(|c| c.is_ascii_alphabetic());
        if valid {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(AdError::InvalidCountry(code.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CountryCode {
    type Err = AdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = AdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

/// A promotional entry shown in the rotating banner.
///
/// Invariant, enforced at creation time: at least one of `image_url` and
/// `title` is present (an ad with neither has nothing to render), and
/// `link_url` is non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ad {
    pub id: AdId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub link_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// When set, the ad is shown only to users detected in this country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryCode>,
    pub created_at: DateTime<Utc>,
}

/// Admin input for a new ad. The id is assigned by the store.
///
/// String fields arrive raw from the admin form; the store trims them and
/// treats blank values as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateAdRequest {
    pub image_url: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub link_url: String,
    pub button_text: Option<String>,
    /// Raw country input; validated and uppercased by the store.
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ad_id_roundtrip() {
        let id = AdId(42);
        let parsed: AdId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_country_code_normalizes() {
        let code = CountryCode::new(" us ").unwrap();
        assert_eq!(code.as_str(), "US");
    }

    #[test]
    fn test_country_code_rejects_bad_input() {
        assert!(CountryCode::new("USA").is_err());
        assert!(CountryCode::new("U1").is_err());
        assert!(CountryCode::new("").is_err());
    }

    #[test]
    fn test_country_code_serde() {
        let code = CountryCode::new("mx").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"MX\"");
        let parsed: CountryCode = serde_json::from_str("\"us\"").unwrap();
        assert_eq!(parsed.as_str(), "US");
    }

    #[test]
    fn test_ad_serde_omits_absent_fields() {
        let ad = Ad {
            id: AdId(1),
            image_url: Some("https://example.com/banner.png".to_string()),
            title: None,
            text: None,
            link_url: "https://example.com".to_string(),
            button_text: None,
            country: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&ad).unwrap();
        assert!(!json.contains("button_text"));
        assert!(!json.contains("country"));
    }
}
