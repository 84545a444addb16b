//! Application state wiring the services together.
//!
//! All mutable state (ad collections, submission counter, admin session)
//! lives here, owned by `main` and passed down explicitly. Nothing is
//! persisted; everything resets when the process exits.

use std::path::Path;

use secrecy::SecretString;

use compass_core::ads::AdStore;
use compass_core::auth::AdminSession;
use compass_core::stats::SubmissionStats;
use compass_infra::config::load_config;
use compass_infra::gemini::GeminiAdviceProvider;
use compass_types::ad::CreateAdRequest;
use compass_types::config::AppConfig;
use compass_types::language::Language;

/// Shared application state for all CLI commands.
pub struct AppState {
    pub config: AppConfig,
    pub ads: AdStore,
    pub stats: SubmissionStats,
    pub session: AdminSession,
}

impl AppState {
    /// Load configuration and seed the demo ad collections.
    pub async fn init(config_path: &Path) -> anyhow::Result<Self> {
        let config = load_config(config_path).await;

        let mut ads = AdStore::new();
        seed_ads(&mut ads)?;

        Ok(Self {
            config,
            ads,
            stats: SubmissionStats::new(),
            session: AdminSession::new(),
        })
    }

    /// Build the Gemini provider from the configured API key variable.
    pub fn create_provider(&self) -> anyhow::Result<GeminiAdviceProvider> {
        let api_key = std::env::var(&self.config.api_key_env).map_err(|_| {
            anyhow::anyhow!(
                "{} not set. Export your Generative Language API key first.",
                self.config.api_key_env
            )
        })?;
        Ok(GeminiAdviceProvider::new(
            SecretString::from(api_key),
            self.config.model.clone(),
        ))
    }
}

/// Seed the out-of-the-box promotional ads for both languages.
fn seed_ads(ads: &mut AdStore) -> anyhow::Result<()> {
    ads.add_ad(
        Language::En,
        CreateAdRequest {
            image_url: Some(
                "https://images.unsplash.com/photo-1552664730-d307ca884978?q=80&w=800&h=128&fit=crop"
                    .to_string(),
            ),
            title: Some("Project Management Workshop (US Only)".to_string()),
            text: Some("Master the skills to lead successful projects in your area.".to_string()),
            link_url: "https://example.com/pm-workshop".to_string(),
            button_text: Some("Register Now".to_string()),
            country: Some("US".to_string()),
        },
    )?;
    ads.add_ad(
        Language::En,
        CreateAdRequest {
            image_url: Some(
                "https://placehold.co/800x128/31349A/FFF?text=Find+Your+Dream+Job".to_string(),
            ),
            link_url: "https://example.com/jobs".to_string(),
            ..Default::default()
        },
    )?;
    ads.add_ad(
        Language::En,
        CreateAdRequest {
            title: Some("Learn to Code in 2024!".to_string()),
            text: Some("Join our bootcamp and kickstart your new career in tech.".to_string()),
            link_url: "https://example.com/bootcamp".to_string(),
            button_text: Some("Learn More".to_string()),
            ..Default::default()
        },
    )?;

    ads.add_ad(
        Language::Es,
        CreateAdRequest {
            image_url: Some(
                "https://images.unsplash.com/photo-1519389950473-47ba0277781c?q=80&w=800&h=128&fit=crop"
                    .to_string(),
            ),
            title: Some("Taller de Emprendimiento (Solo México)".to_string()),
            text: Some("Inicia tu propio negocio con nuestra guía experta.".to_string()),
            link_url: "https://example.com/emprendimiento".to_string(),
            button_text: Some("Inscríbete".to_string()),
            country: Some("MX".to_string()),
        },
    )?;
    ads.add_ad(
        Language::Es,
        CreateAdRequest {
            image_url: Some(
                "https://placehold.co/800x128/D93A32/FFF?text=Encuentra+Trabajo".to_string(),
            ),
            link_url: "https://example.com/empleos".to_string(),
            ..Default::default()
        },
    )?;
    ads.add_ad(
        Language::Es,
        CreateAdRequest {
            title: Some("¡Aprende a Programar en 2024!".to_string()),
            text: Some("Únete a nuestro bootcamp e inicia tu nueva carrera en tecnología.".to_string()),
            link_url: "https://example.com/bootcamp-es".to_string(),
            button_text: Some("Aprende Más".to_string()),
            ..Default::default()
        },
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_fills_both_languages() {
        let mut ads = AdStore::new();
        seed_ads(&mut ads).unwrap();
        assert_eq!(ads.ads(Language::En).len(), 3);
        assert_eq!(ads.ads(Language::Es).len(), 3);
    }

    #[test]
    fn seeded_country_ads_are_normalized() {
        let mut ads = AdStore::new();
        seed_ads(&mut ads).unwrap();
        let restricted: Vec<_> = ads
            .ads(Language::En)
            .iter()
            .filter_map(|ad| ad.country.as_ref())
            .collect();
        assert_eq!(restricted.len(), 1);
        assert_eq!(restricted[0].as_str(), "US");
    }
}
