//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use tbox_cli::config::{
    ConfigFile, ResolveOptions, ServiceConfig, TboxConfig, TranslateOnConfig, resolve_config,
};
use tbox_cli::session::Transition;
use tbox_cli::translation::{DEFAULT_ENDPOINT, Language};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        tbox: TboxConfig {
            from: Some(Language::Spanish),
            to: Some(Language::English),
        },
        service: ServiceConfig {
            endpoint: Some("http://translate.local/get".to_string()),
            email: Some("me@example.com".to_string()),
        },
        ..ConfigFile::default()
    }
}

#[test]
fn test_cli_languages_override_config_languages() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        from: Some(Language::French),
        to: Some(Language::Spanish),
        endpoint: None,
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.source_language, Language::French);
    assert_eq!(resolved.target_language, Language::Spanish);
}

#[test]
fn test_config_languages_used_when_cli_not_specified() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.source_language, Language::Spanish);
    assert_eq!(resolved.target_language, Language::English);
}

#[test]
fn test_cli_can_override_one_language_only() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        to: Some(Language::French),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    // from still comes from the config file
    assert_eq!(resolved.source_language, Language::Spanish);
    assert_eq!(resolved.target_language, Language::French);
}

#[test]
fn test_cli_endpoint_overrides_config_endpoint() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: Some("https://mirror.local/get".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.endpoint, "https://mirror.local/get");
    assert_eq!(resolved.email.as_deref(), Some("me@example.com"));
}

#[test]
fn test_builtin_defaults_when_nothing_configured() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.source_language, Language::English);
    assert_eq!(resolved.target_language, Language::French);
    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert!(resolved.email.is_none());
    assert!(resolved.clipboard_command.is_none());
    assert!(resolved.speech_command.is_none());
}

#[test]
fn test_default_triggers_skip_source_language_and_swap() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert!(resolved.triggers.fires_on(Transition::SourceTextChanged));
    assert!(resolved.triggers.fires_on(Transition::TargetLanguageChanged));
    assert!(!resolved.triggers.fires_on(Transition::SourceLanguageChanged));
    assert!(!resolved.triggers.fires_on(Transition::Swapped));
}

#[test]
fn test_translate_on_section_adds_triggers() {
    let config = ConfigFile {
        translate_on: TranslateOnConfig {
            source_language: true,
            swap: true,
        },
        ..ConfigFile::default()
    };

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert!(resolved.triggers.fires_on(Transition::SourceLanguageChanged));
    assert!(resolved.triggers.fires_on(Transition::Swapped));
}

#[test]
fn test_invalid_cli_endpoint_is_rejected_even_with_valid_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: Some("ftp://translate.local".to_string()),
        ..ResolveOptions::default()
    };

    let err = resolve_config(&options, &config).unwrap_err();

    assert!(err.to_string().contains("Invalid endpoint"));
}

#[test]
fn test_config_file_parses_from_toml() {
    let toml_str = r#"
[tbox]
from = "fr"
to = "es"

[translate_on]
swap = true

[speech]
command = ["espeak-ng", "-v", "fr"]
"#;
    let config: ConfigFile = toml::from_str(toml_str).unwrap();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.source_language, Language::French);
    assert_eq!(resolved.target_language, Language::Spanish);
    assert!(resolved.triggers.fires_on(Transition::Swapped));
    assert!(!resolved.triggers.fires_on(Transition::SourceLanguageChanged));
    assert_eq!(
        resolved.speech_command,
        Some(vec![
            "espeak-ng".to_string(),
            "-v".to_string(),
            "fr".to_string()
        ])
    );
}
