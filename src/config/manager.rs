use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::session::{Transition, Triggers};
use crate::translation::{DEFAULT_ENDPOINT, Language};

/// Default settings in the `[tbox]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TboxConfig {
    /// Default source language.
    pub from: Option<Language>,
    /// Default target language.
    pub to: Option<Language>,
}

/// The `[service]` section: where translations come from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// MyMemory-compatible `get` endpoint.
    pub endpoint: Option<String>,
    /// Contact address sent as MyMemory's `de` parameter.
    pub email: Option<String>,
}

/// The `[translate_on]` section: which changes retranslate automatically.
///
/// Source-text and target-language changes always do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateOnConfig {
    /// Also retranslate when the source language changes.
    #[serde(default)]
    pub source_language: bool,
    /// Retranslate right after a swap.
    #[serde(default)]
    pub swap: bool,
}

/// An external program override, e.g. `command = ["wl-copy"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandConfig {
    pub command: Option<Vec<String>>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tbox/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub tbox: TboxConfig,
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub translate_on: TranslateOnConfig,
    #[serde(default)]
    pub clipboard: CommandConfig,
    #[serde(default)]
    pub speech: CommandConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub source_language: Language,
    pub target_language: Language,
    pub endpoint: String,
    pub email: Option<String>,
    pub triggers: Triggers,
    pub clipboard_command: Option<Vec<String>>,
    pub speech_command: Option<Vec<String>>,
}

impl ResolvedConfig {
    /// Both sides use the same language; MyMemory usually rejects this pair.
    pub fn same_language_pair(&self) -> bool {
        self.source_language == self.target_language
    }
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub from: Option<Language>,
    pub to: Option<Language>,
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default
/// (`en` → `fr` against the public MyMemory endpoint).
///
/// # Errors
///
/// Returns an error if the endpoint is not an http(s) URL.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let source_language = options
        .from
        .or(config_file.tbox.from)
        .unwrap_or(Language::English);

    let target_language = options
        .to
        .or(config_file.tbox.to)
        .unwrap_or(Language::French);

    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.service.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
        bail!(
            "Invalid endpoint: '{endpoint}'\n\n\
             The endpoint must be an http:// or https:// URL, e.g.\n  \
             {DEFAULT_ENDPOINT}"
        );
    }

    let mut triggers = Triggers::default();
    if config_file.translate_on.source_language {
        triggers.subscribe(Transition::SourceLanguageChanged);
    }
    if config_file.translate_on.swap {
        triggers.subscribe(Transition::Swapped);
    }

    Ok(ResolvedConfig {
        source_language,
        target_language,
        endpoint,
        email: config_file.service.email.clone(),
        triggers,
        clipboard_command: config_file.clipboard.command.clone(),
        speech_command: config_file.speech.command.clone(),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/tbox/config.toml`
    /// or `~/.config/tbox/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a manager for an explicit file location.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.is_file()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        crate::fs::atomic_write(&self.config_path, &contents)
    }

    /// Loads the file; a missing file is the default configuration, but a
    /// file that exists and does not parse is an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
