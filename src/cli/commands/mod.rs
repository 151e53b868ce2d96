//! Subcommand implementations.

/// Configure command handler.
pub mod configure;

/// Interactive mode command handler.
pub mod interactive;

/// One-shot translation command handler.
pub mod translate;

use anyhow::Result;
use std::sync::Arc;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::platform::{SystemClipboard, SystemSpeaker};
use crate::session::{Collaborators, SessionState, TranslationSession};
use crate::translation::MyMemoryClient;
use crate::ui;

/// Loads the config file and merges the CLI overrides into it.
///
/// Warns when both languages are the same.
fn load_resolved_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default()?;
    let config = resolve_config(options, &file_config)?;

    if config.same_language_pair() {
        ui::print_warning(format!(
            "source and target language are both '{}'; the service may reject this pair",
            config.source_language
        ));
    }

    Ok(config)
}

/// Builds a session wired to the real translation service and platform.
fn open_session(config: &ResolvedConfig) -> TranslationSession {
    let state = SessionState::new(config.source_language, config.target_language)
        .with_triggers(config.triggers.clone());

    let collaborators = Collaborators {
        translator: Arc::new(MyMemoryClient::new(
            config.endpoint.clone(),
            config.email.clone(),
        )),
        clipboard: Arc::new(SystemClipboard::new(config.clipboard_command.clone())),
        speaker: Arc::new(SystemSpeaker::new(config.speech_command.clone())),
    };

    TranslationSession::new(state, collaborators)
}
