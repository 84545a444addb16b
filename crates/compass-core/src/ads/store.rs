//! In-memory ad collections, one per language.
//!
//! Explicit state owned by the composition point; all mutation goes
//! through the named operations here. Nothing is persisted -- the
//! collections reset when the process exits.

use std::collections::HashMap;

use compass_types::ad::{Ad, AdId, CountryCode, CreateAdRequest};
use compass_types::error::AdError;
use compass_types::language::Language;

/// Two independent ordered ad collections keyed by language.
#[derive(Debug)]
pub struct AdStore {
    collections: HashMap<Language, Vec<Ad>>,
    next_id: u64,
}

impl AdStore {
    pub fn new() -> Self {
        let mut collections = HashMap::new();
        for lang in Language::ALL {
            collections.insert(lang, Vec::new());
        }
        Self {
            collections,
            next_id: 1,
        }
    }

    /// The ads for a language, in insertion order.
    pub fn ads(&self, language: Language) -> &[Ad] {
        self.collections
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Validate admin input and append a new ad to one language's
    /// collection, assigning the next id.
    ///
    /// Blank optional fields are treated as absent. An ad must have a
    /// link and at least one of image url / title to be renderable.
    pub fn add_ad(&mut self, language: Language, request: CreateAdRequest) -> Result<Ad, AdError> {
        let image_url = clean(request.image_url);
        let title = clean(request.title);
        let text = clean(request.text);
        let button_text = clean(request.button_text);

        let link_url = request.link_url.trim().to_string();
        if link_url.is_empty() {
            return Err(AdError::MissingLink);
        }
        if image_url.is_none() && title.is_none() {
            return Err(AdError::MissingContent);
        }

        let country = match clean(request.country) {
            Some(raw) => Some(CountryCode::new(&raw)?),
            None => None,
        };

        let ad = Ad {
            id: AdId(self.next_id),
            image_url,
            title,
            text,
            link_url,
            button_text,
            country,
            created_at: chrono::Utc::now(),
        };
        self.next_id += 1;

        self.collections
            .entry(language)
            .or_default()
            .push(ad.clone());

        tracing::debug!(language = %language, id = %ad.id, "ad added");
        Ok(ad)
    }

    /// Remove an ad from one language's collection by id.
    pub fn delete_ad(&mut self, language: Language, id: AdId) -> Result<Ad, AdError> {
        let ads = self.collections.entry(language).or_default();
        let position = ads
            .iter()
            .position(|ad| ad.id == id)
            .ok_or(AdError::NotFound(id))?;
        let removed = ads.remove(position);
        tracing::debug!(language = %language, id = %id, "ad deleted");
        Ok(removed)
    }
}

impl Default for AdStore {
    fn default() -> Self {
        Self::new()
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
