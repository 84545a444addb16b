//! The `compass banner` command: show the rotating promotional banner.

use console::style;

use compass_core::ads::{RotationEvent, filter_for_country, spawn_rotator};
use compass_core::advice::location::LocationSource;
use compass_infra::geo::IpApiLocationSource;
use compass_types::ad::{Ad, CountryCode};
use compass_types::language::Language;

use crate::i18n::messages;
use crate::state::AppState;

/// Rotate through the eligible ads until Ctrl+C.
///
/// With zero eligible ads nothing is shown; with exactly one the ad is
/// printed once and no timer ever starts.
pub async fn run_banner(
    state: &AppState,
    language: Language,
    country: Option<String>,
    no_location: bool,
) -> anyhow::Result<()> {
    let msgs = messages(language);

    let detected = resolve_country(country, no_location).await?;
    let ads = filter_for_country(state.ads.ads(language), detected.as_ref());

    if ads.is_empty() {
        println!("\n  {}", style(msgs.banner_empty).dim());
        return Ok(());
    }

    println!();
    print_ad(&ads[0]);

    let Some(mut rotator) = spawn_rotator(ads.len(), &state.config.rotation) else {
        return Ok(());
    };

    let mut interrupted = false;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                interrupted = true;
                break;
            }
            event = rotator.recv() => match event {
                Some(RotationEvent::FadeStarted) => {
                    println!("  {}", style("· · ·").dim());
                }
                Some(RotationEvent::Advanced { index }) => {
                    print_ad(&ads[index]);
                }
                None => break,
            },
        }
    }

    rotator.cancel();
    if interrupted {
        println!("\n  {}", style("Banner stopped.").dim());
    }

    Ok(())
}

async fn resolve_country(
    country: Option<String>,
    no_location: bool,
) -> anyhow::Result<Option<CountryCode>> {
    if let Some(raw) = country {
        return Ok(Some(CountryCode::new(&raw)?));
    }
    if no_location {
        return Ok(None);
    }
    Ok(IpApiLocationSource::new().locate().await.country)
}

fn print_ad(ad: &Ad) {
    println!("  {}", style("────────────────────────────────").dim());
    if let Some(title) = &ad.title {
        let tag = ad
            .country
            .as_ref()
            .map(|code| format!(" [{code}]"))
            .unwrap_or_default();
        println!("  {}{}", style(title).bold(), style(tag).dim());
    }
    if let Some(text) = &ad.text {
        println!("  {text}");
    }
    if let Some(image_url) = &ad.image_url {
        println!("  {}", style(image_url).dim());
    }
    match &ad.button_text {
        Some(button) => println!(
            "  {} {}",
            style(format!("[ {button} ]")).cyan(),
            style(&ad.link_url).underlined().dim(),
        ),
        None => println!("  {}", style(&ad.link_url).underlined().dim()),
    }
    println!("  {}", style("────────────────────────────────").dim());
}
