//! Country targeting for the banner.
//!
//! Applied by the caller before the rotator ever sees the list, so the
//! rotator only deals with ads that are actually eligible.

use compass_types::ad::{Ad, CountryCode};

/// Order a language's ads for a user in the given country.
///
/// Ads matching the country come first, in original order, followed by
/// unrestricted ads, in original order. Ads restricted to a different
/// country are excluded. With no detected country, only unrestricted ads
/// are shown.
pub fn filter_for_country(ads: &[Ad], country: Option<&CountryCode>) -> Vec<Ad> {
    let unrestricted = ads.iter().filter(|ad| ad.country.is_none()).cloned();

    match country {
        None => unrestricted.collect(),
        Some(code) => {
            let mut filtered: Vec<Ad> = ads
                .iter()
                .filter(|ad| ad.country.as_ref() == Some(code))
                .cloned()
                .collect();
            filtered.extend(unrestricted);
            filtered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_types::ad::AdId;

    fn ad(id: u64, country: Option<&str>) -> Ad {
        Ad {
            id: AdId(id),
            image_url: None,
            title: Some(format!("ad {id}")),
            text: None,
            link_url: "https://example.com".to_string(),
            button_text: None,
            country: country.map(|c| CountryCode::new(c).unwrap()),
            created_at: chrono::Utc::now(),
        }
    }

    fn ids(ads: &[Ad]) -> Vec<u64> {
        ads.iter().map(|ad| ad.id.0).collect()
    }

    #[test]
    fn matching_country_sorts_first_and_others_are_excluded() {
        let ads = vec![ad(1, Some("US")), ad(2, None), ad(3, Some("MX"))];
        let us = CountryCode::new("US").unwrap();
        let filtered = filter_for_country(&ads, Some(&us));
        assert_eq!(ids(&filtered), vec![1, 2]);
    }

    #[test]
    fn unknown_country_shows_only_unrestricted_ads() {
        let ads = vec![ad(1, Some("US")), ad(2, None), ad(3, Some("MX"))];
        let filtered = filter_for_country(&ads, None);
        assert_eq!(ids(&filtered), vec![2]);
    }

    #[test]
    fn original_order_is_kept_within_each_group() {
        let ads = vec![
            ad(1, None),
            ad(2, Some("US")),
            ad(3, None),
            ad(4, Some("US")),
        ];
        let us = CountryCode::new("US").unwrap();
        let filtered = filter_for_country(&ads, Some(&us));
        assert_eq!(ids(&filtered), vec![2, 4, 1, 3]);
    }

    #[test]
    fn no_eligible_ads_yields_empty_list() {
        let ads = vec![ad(1, Some("MX"))];
        let us = CountryCode::new("US").unwrap();
        assert!(filter_for_country(&ads, Some(&us)).is_empty());
        assert!(filter_for_country(&ads, None).is_empty());
    }
}
