//! The `compass ask` flow: guard input, call the backend, render advice.

use console::style;
use dialoguer::Input;

use compass_core::advice::location::LocationSource;
use compass_core::advice::{AdviceService, FALLBACK_TEXT};
use compass_core::format::{InlineMode, format_response_with};
use compass_infra::geo::IpApiLocationSource;
use compass_types::error::SubmissionError;
use compass_types::language::Language;

use crate::i18n::messages;
use crate::render::{render_blocks, render_citations};
use crate::state::AppState;

/// Run a single advice submission.
pub async fn run_ask(
    state: &mut AppState,
    situation: Option<String>,
    language: Language,
    no_location: bool,
    strict_markup: bool,
    json: bool,
) -> anyhow::Result<()> {
    let msgs = messages(language);

    let situation = match situation {
        Some(text) => text,
        None => Input::new()
            .with_prompt(msgs.ask_prompt)
            .allow_empty(true)
            .interact_text()?,
    };

    let provider = state.create_provider()?;
    let service = AdviceService::new(provider, state.config.max_input_chars);

    let location = if no_location {
        None
    } else {
        IpApiLocationSource::new().locate().await.point
    };

    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .expect("spinner template is valid"),
    );
    spinner.set_message(msgs.results_loading);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let result = service.submit(&situation, location, language).await;
    spinner.finish_and_clear();

    let response = match result {
        Ok(response) => response,
        Err(SubmissionError::EmptyInput) => {
            println!("\n  {} {}", style("!").yellow().bold(), msgs.error_default);
            return Ok(());
        }
        Err(SubmissionError::OversizedInput { .. }) => {
            print_complex_case(state, language);
            return Ok(());
        }
        Err(SubmissionError::Backend(err)) => {
            tracing::error!(error = %err, "advice request failed");
            println!("\n  {} {}", style("✗").red().bold(), msgs.error_api);
            return Ok(());
        }
    };

    state.stats.record_submission();

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    let mode = if strict_markup {
        InlineMode::Matched
    } else {
        InlineMode::SplitParity
    };
    let text = response.text.as_deref().unwrap_or(FALLBACK_TEXT);
    let blocks = format_response_with(text, mode);

    println!();
    print!("{}", render_blocks(&blocks));
    print!("{}", render_citations(&response.citations, msgs));

    Ok(())
}

/// The oversized-input path: no backend call, point at the support team.
fn print_complex_case(state: &AppState, language: Language) {
    let msgs = messages(language);
    println!();
    println!("  {}", style(msgs.complex_case_title).yellow().bold());
    println!("  {}", msgs.complex_case_body);
    println!(
        "  {} {}",
        msgs.complex_case_contact,
        style(&state.config.support_email).cyan().underlined(),
    );
    println!();
}
