//! Language codes offered by the translation box.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ui::Style;

/// A language the user can pick on either side of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    English,
    French,
    Spanish,
}

/// Supported languages in the order they are offered.
pub const SUPPORTED_LANGUAGES: &[Language] =
    &[Language::English, Language::French, Language::Spanish];

impl Language {
    /// ISO 639-1 code, as sent in the `langpair` parameter.
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
            Self::Spanish => "es",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::French => "French",
            Self::Spanish => "Spanish",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        SUPPORTED_LANGUAGES
            .iter()
            .copied()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid language code: '{s}'\n\n\
                     Valid language codes: en, fr, es\n\
                     Run 'tbox languages' to see them with their names."
                )
            })
    }
}

impl TryFrom<String> for Language {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.code().to_string()
    }
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes"));
    for lang in SUPPORTED_LANGUAGES {
        println!(
            "  {:3} {}",
            Style::code(lang.code()),
            Style::secondary(lang.name())
        );
    }
}
