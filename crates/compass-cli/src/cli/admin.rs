//! The `compass admin` command: password-gated ad management.
//!
//! Login prompts repeat until the verifier accepts or the user aborts;
//! a failed attempt leaves the form open and clears nothing. After login
//! the session stays authenticated until `logout` or process exit.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use dialoguer::{Input, Password};

use compass_core::auth::CredentialVerifier;
use compass_infra::auth::StaticCredentialVerifier;
use compass_types::ad::CreateAdRequest;
use compass_types::language::Language;

use crate::i18n::{Messages, messages};
use crate::state::AppState;

/// Run the interactive admin session.
pub async fn run_admin(state: &mut AppState, language: Language) -> anyhow::Result<()> {
    let msgs = messages(language);
    let verifier = StaticCredentialVerifier::new(&state.config.admin);

    if !login(state, &verifier, msgs)? {
        return Ok(());
    }

    println!("\n  {}", style(msgs.admin_welcome).cyan().bold());

    loop {
        let line: String = Input::new()
            .with_prompt("admin")
            .allow_empty(true)
            .interact_text()?;
        let mut words = line.split_whitespace();

        match words.next() {
            None => continue,
            Some("list") => print_ads(state, msgs),
            Some("add") => add_ad(state)?,
            Some("delete") => {
                let args: Vec<&str> = words.collect();
                delete_ad(state, &args);
            }
            Some("stats") => {
                println!(
                    "  {}: {}",
                    msgs.admin_total_submissions,
                    style(state.stats.submission_count()).bold(),
                );
            }
            Some("help") => print_help(),
            Some("logout") | Some("quit") | Some("exit") => {
                state.session.logout();
                println!("  {}", style(msgs.admin_logged_out).dim());
                break;
            }
            Some(other) => {
                println!(
                    "  {} unknown command '{other}', try 'help'",
                    style("!").yellow().bold(),
                );
            }
        }
    }

    Ok(())
}

/// Prompt for credentials until they verify. Returns false on abort.
fn login(
    state: &mut AppState,
    verifier: &impl CredentialVerifier,
    msgs: &Messages,
) -> anyhow::Result<bool> {
    println!("\n  {}", style(msgs.admin_login_title).bold());

    loop {
        let username: String = Input::new()
            .with_prompt(msgs.admin_username_label)
            .allow_empty(true)
            .interact_text()?;
        if username.is_empty() {
            return Ok(false);
        }
        let password = Password::new()
            .with_prompt(msgs.admin_password_label)
            .interact()?;

        match state.session.login(verifier, &username, &password) {
            Ok(()) => return Ok(true),
            Err(err) => {
                tracing::debug!(error = %err, "admin login attempt rejected");
                println!("  {} {}", style("✗").red().bold(), msgs.admin_login_error);
            }
        }
    }
}

fn print_ads(state: &AppState, msgs: &Messages) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Lang").fg(Color::White),
        Cell::new("Id").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Link").fg(Color::White),
        Cell::new("Country").fg(Color::White),
        Cell::new("Button").fg(Color::White),
    ]);

    let mut total = 0;
    for lang in Language::ALL {
        for ad in state.ads.ads(lang) {
            total += 1;
            table.add_row(vec![
                Cell::new(lang).fg(Color::Cyan),
                Cell::new(ad.id),
                Cell::new(ad.title.as_deref().unwrap_or("(image ad)")),
                Cell::new(&ad.link_url),
                Cell::new(
                    ad.country
                        .as_ref()
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Cell::new(ad.button_text.as_deref().unwrap_or("-")),
            ]);
        }
    }

    if total == 0 {
        println!("  {}", style(msgs.admin_no_ads).dim());
    } else {
        println!("{table}");
    }
}

fn add_ad(state: &mut AppState) -> anyhow::Result<()> {
    let language: Language = loop {
        let raw: String = Input::new()
            .with_prompt("Language (en/es)")
            .default("en".to_string())
            .interact_text()?;
        match raw.parse() {
            Ok(lang) => break lang,
            Err(err) => println!("  {} {err}", style("!").yellow().bold()),
        }
    };

    let request = CreateAdRequest {
        image_url: optional_input("Image url")?,
        title: optional_input("Title")?,
        text: optional_input("Text")?,
        link_url: Input::new()
            .with_prompt("Link url")
            .allow_empty(true)
            .interact_text()?,
        button_text: optional_input("Button text")?,
        country: optional_input("Country code")?,
    };

    match state.ads.add_ad(language, request) {
        Ok(ad) => println!(
            "  {} ad {} added to '{language}'",
            style("✓").green().bold(),
            style(ad.id).bold(),
        ),
        Err(err) => println!("  {} {err}", style("✗").red().bold()),
    }

    Ok(())
}

fn delete_ad(state: &mut AppState, args: &[&str]) {
    let (Some(raw_lang), Some(raw_id)) = (args.first(), args.get(1)) else {
        println!(
            "  {} usage: delete <en|es> <id>",
            style("!").yellow().bold(),
        );
        return;
    };

    let (lang, id) = match (raw_lang.parse::<Language>(), raw_id.parse()) {
        (Ok(lang), Ok(id)) => (lang, id),
        _ => {
            println!(
                "  {} usage: delete <en|es> <id>",
                style("!").yellow().bold(),
            );
            return;
        }
    };

    match state.ads.delete_ad(lang, id) {
        Ok(ad) => println!(
            "  {} ad {} deleted from '{lang}'",
            style("✓").green().bold(),
            style(ad.id).bold(),
        ),
        Err(err) => println!("  {} {err}", style("✗").red().bold()),
    }
}

fn optional_input(prompt: &str) -> anyhow::Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(format!("{prompt} (optional)"))
        .allow_empty(true)
        .interact_text()?;
    Ok(if value.trim().is_empty() {
        None
    } else {
        Some(value)
    })
}

fn print_help() {
    println!("  list                 show all ads");
    println!("  add                  create a new ad");
    println!("  delete <lang> <id>   remove an ad");
    println!("  stats                show submission count");
    println!("  logout               end the admin session");
}
