//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::Select;

use crate::config::{ConfigFile, ConfigManager, TboxConfig};
use crate::translation::{DEFAULT_ENDPOINT, Language, SUPPORTED_LANGUAGES};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current settings. Otherwise lets the user pick
/// the default source and target language interactively.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    if show {
        let config = manager.load_or_default()?;
        print_config(&manager, &config);
        return Ok(());
    }
    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;

    print_config(manager, &config);

    let from = select_language("Default source language:", config.tbox.from)?;
    let to = select_language("Default target language:", config.tbox.to)?;

    config.tbox = TboxConfig {
        from: Some(from),
        to: Some(to),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_config(manager: &ConfigManager, config: &ConfigFile) {
    let not_set = || Style::secondary("(not set)");
    let command = |cmd: Option<&Vec<String>>| {
        cmd.map_or_else(|| Style::secondary("(auto-detect)"), |c| Style::value(c.join(" ")))
    };

    println!(
        "{} {}",
        Style::header("Current settings"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}       {}",
        Style::label("from"),
        config.tbox.from.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}         {}",
        Style::label("to"),
        config.tbox.to.map_or_else(not_set, Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("endpoint"),
        config.service.endpoint.as_deref().map_or_else(
            || Style::secondary(format!("{DEFAULT_ENDPOINT} (default)")),
            Style::value
        )
    );
    println!(
        "  {}  {}",
        Style::label("clipboard"),
        command(config.clipboard.command.as_ref())
    );
    println!(
        "  {}     {}",
        Style::label("speech"),
        command(config.speech.command.as_ref())
    );
    println!();
}

fn select_language(message: &str, default: Option<Language>) -> Result<Language> {
    // Build options with format "code - Name"
    let options: Vec<String> = SUPPORTED_LANGUAGES
        .iter()
        .map(|lang| format!("{} - {}", lang.code(), lang.name()))
        .collect();

    let default_index = default
        .and_then(|d| SUPPORTED_LANGUAGES.iter().position(|lang| *lang == d))
        .unwrap_or(0);

    let selection = Select::new(message, options)
        .with_starting_cursor(default_index)
        .prompt()?;

    // Extract code from "code - Name" format
    let code = selection.split(" - ").next().unwrap_or(&selection);
    code.parse()
}
