use anyhow::{Result, bail};

use super::{load_resolved_config, open_session};
use crate::config::ResolveOptions;
use crate::input::InputReader;
use crate::session::{Applied, MAX_SOURCE_CHARS};
use crate::ui::{self, Spinner};

pub struct TranslateOptions {
    pub text: Option<String>,
    pub file: Option<String>,
    pub resolve: ResolveOptions,
    pub copy: bool,
    pub speak: bool,
}

/// Translates one text and prints the result to stdout.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_resolved_config(&options.resolve)?;

    let source_text = match options.text {
        Some(text) => text,
        None => InputReader::read(options.file.as_deref())?,
    };

    if source_text.trim().is_empty() {
        bail!("Input is empty");
    }

    let mut session = open_session(&config);
    if session.set_source_text(&source_text) {
        ui::print_warning(format!("Input truncated to {MAX_SOURCE_CHARS} characters"));
    }
    // Text identical to the initial box contents is not an edit.
    if !session.state().is_pending() {
        session.translate();
    }

    let spinner = Spinner::new("Translating...");
    let applied = session.settle().await;
    spinner.stop();

    match applied {
        Some(Applied::Updated) => println!("{}", session.state().translated_text()),
        Some(Applied::Failed(err)) => return Err(err.into()),
        Some(Applied::Stale) | None => bail!("Translation did not complete"),
    }

    let translated = session.state().translated_text();

    if options.copy {
        match session.copy_to_clipboard(translated).await {
            Ok(()) => ui::print_success("Copied to clipboard!"),
            Err(e) => ui::print_error(e),
        }
    }

    if options.speak {
        match session.speak(translated).await {
            // The process is about to exit and would cut the voice off.
            Ok(()) => session.finish_speaking().await,
            Err(e) => ui::print_error(e),
        }
    }

    Ok(())
}
