//! Interactive mode UI components.

use crate::session::{MAX_SOURCE_CHARS, SessionState, TranslationStatus};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header() {
    println!(
        "{} {} - Interactive Translation Box",
        Style::header("tbox"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

/// One-line summary shown above the prompt: `en → fr  19/500`.
pub fn language_line(state: &SessionState) -> String {
    format!(
        "{} → {}  {}",
        Style::code(state.source_language()),
        Style::code(state.target_language()),
        Style::counter(state.character_count(), MAX_SOURCE_CHARS)
    )
}

pub fn print_translation(state: &SessionState) {
    println!("{}", Style::translation(state.translated_text()));
    println!();
}

pub fn print_status(state: &SessionState, endpoint: &str) {
    let status = match state.status() {
        TranslationStatus::Idle => "idle".to_string(),
        TranslationStatus::Requesting { seq } => format!("waiting for request #{seq}"),
        TranslationStatus::Translated => "translated".to_string(),
        TranslationStatus::Failed(err) => format!("failed: {err}"),
    };

    println!("{}", Style::header("Session"));
    println!(
        "  {}      {} {}",
        Style::label("from"),
        Style::value(state.source_language()),
        Style::secondary(format!("({})", state.source_language().name()))
    );
    println!(
        "  {}        {} {}",
        Style::label("to"),
        Style::value(state.target_language()),
        Style::secondary(format!("({})", state.target_language().name()))
    );
    println!(
        "  {}    {} {}",
        Style::label("source"),
        state.source_text(),
        Style::counter(state.character_count(), MAX_SOURCE_CHARS)
    );
    println!(
        "  {}    {}",
        Style::label("result"),
        state.translated_text()
    );
    println!("  {}    {}", Style::label("status"), Style::secondary(status));
    println!("  {}  {}", Style::label("endpoint"), Style::secondary(endpoint));
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    let commands = [
        ("<text>", "Replace the source text and translate it"),
        ("/from <code>", "Set the source language (en, fr, es)"),
        ("/to <code>", "Set the target language and translate"),
        ("/swap", "Swap source and translation"),
        ("/translate", "Translate the current text again"),
        ("/copy [source]", "Copy the translation or the source text"),
        ("/speak [source]", "Read the translation or the source text aloud"),
        ("/status", "Show languages, texts and character count"),
        ("/help", "Show this help"),
        ("/quit", "Exit"),
    ];
    for (command, description) in commands {
        println!(
            "  {} {}",
            Style::command(format!("{command:16}")),
            Style::secondary(description)
        );
    }
    println!(
        "\n  {}",
        Style::secondary("Start a line with // to translate text beginning with '/'.")
    );
    println!();
}
