//! Application configuration for Career Compass.
//!
//! `AppConfig` represents the top-level `compass.toml`. All fields have
//! defaults, so a missing file is a fully working configuration.

use serde::{Deserialize, Serialize};

use std::time::Duration;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Inputs longer than this (in characters) are routed to the
    /// "complex case" message instead of the advice backend.
    #[serde(default = "default_max_input_chars")]
    pub max_input_chars: usize,

    /// Support contact shown in the complex-case message.
    #[serde(default = "default_support_email")]
    pub support_email: String,

    /// Advice backend model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the backend API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default)]
    pub rotation: RotationConfig,

    #[serde(default)]
    pub admin: AdminConfig,
}

fn default_max_input_chars() -> usize {
    1500
}

fn default_support_email() -> String {
    "hsegil@teamgroupcierge".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_input_chars: default_max_input_chars(),
            support_email: default_support_email(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            rotation: RotationConfig::default(),
            admin: AdminConfig::default(),
        }
    }
}

/// Banner rotation cadence. Tuning values, not adaptive policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RotationConfig {
    /// How long each ad stays on screen before the fade starts.
    #[serde(default = "default_display_interval_ms")]
    pub display_interval_ms: u64,

    /// How long the fading state lasts before the next ad appears.
    #[serde(default = "default_fade_duration_ms")]
    pub fade_duration_ms: u64,
}

fn default_display_interval_ms() -> u64 {
    5000
}

fn default_fade_duration_ms() -> u64 {
    500
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            display_interval_ms: default_display_interval_ms(),
            fade_duration_ms: default_fade_duration_ms(),
        }
    }
}

impl RotationConfig {
    pub fn display_interval(&self) -> Duration {
        Duration::from_millis(self.display_interval_ms)
    }

    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(self.fade_duration_ms)
    }
}

/// Admin credentials for the ad management surface.
///
/// A placeholder pair compared in-process; the verifier seam in
/// compass-core lets a real mechanism replace it without touching the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,

    #[serde(default = "default_admin_password")]
    pub password: String,
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "password".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            password: default_admin_password(),
        }
    }
}
