use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Languages the assistant can answer in.
///
/// Each language carries its own ad collection and its own set of
/// user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: [Language; 2] = [Language::En, Language::Es];
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Es => write!(f, "es"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(format!("invalid language: '{other}'")),
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::En
    }
}
