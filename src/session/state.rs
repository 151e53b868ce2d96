use tracing::debug;

use super::triggers::{Transition, Triggers};
use crate::error::WidgetError;
use crate::translation::{Language, TranslationRequest, TranslationResponse};

/// Maximum number of characters accepted as source text.
pub const MAX_SOURCE_CHARS: usize = 500;

/// Text shown in the box before the user types anything.
pub const DEFAULT_SOURCE_TEXT: &str = "Hello, how are you?";

/// Where the most recent translation attempt stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationStatus {
    Idle,
    Requesting { seq: u64 },
    Translated,
    Failed(WidgetError),
}

/// Result of replacing the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEdit {
    /// The input was longer than [`MAX_SOURCE_CHARS`] and was cut.
    pub truncated: bool,
    /// The request this edit scheduled, if any.
    pub request: Option<TranslationRequest>,
}

/// What happened when a response was handed to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// The translated text was replaced.
    Updated,
    /// The response belonged to a superseded request and was dropped.
    Stale,
    /// The latest request failed; the translated text is unchanged.
    Failed(WidgetError),
}

/// The four fields of a translation box plus the bookkeeping that keeps them
/// consistent.
///
/// Every method is a complete transition: callers never see a half-applied
/// state. Methods that may enqueue a translation return the request; sending
/// it is the caller's job.
#[derive(Debug, Clone)]
pub struct SessionState {
    source_text: String,
    translated_text: String,
    source_language: Language,
    target_language: Language,
    triggers: Triggers,
    latest_seq: u64,
    status: TranslationStatus,
}

impl SessionState {
    pub fn new(source_language: Language, target_language: Language) -> Self {
        Self {
            source_text: DEFAULT_SOURCE_TEXT.to_string(),
            translated_text: String::new(),
            source_language,
            target_language,
            triggers: Triggers::default(),
            latest_seq: 0,
            status: TranslationStatus::Idle,
        }
    }

    #[must_use]
    pub fn with_triggers(mut self, triggers: Triggers) -> Self {
        self.triggers = triggers;
        self
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn translated_text(&self) -> &str {
        &self.translated_text
    }

    pub const fn source_language(&self) -> Language {
        self.source_language
    }

    pub const fn target_language(&self) -> Language {
        self.target_language
    }

    /// Length of the source text in characters, never above [`MAX_SOURCE_CHARS`].
    pub fn character_count(&self) -> usize {
        self.source_text.chars().count()
    }

    pub const fn status(&self) -> &TranslationStatus {
        &self.status
    }

    pub const fn triggers(&self) -> &Triggers {
        &self.triggers
    }

    /// Sequence number of the most recently issued request (0 before any).
    pub const fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub const fn is_pending(&self) -> bool {
        matches!(self.status, TranslationStatus::Requesting { .. })
    }

    /// Replaces the source text, cutting it to [`MAX_SOURCE_CHARS`].
    ///
    /// Setting the same text again is not a change and schedules nothing.
    pub fn set_source_text(&mut self, text: &str) -> SourceEdit {
        let cut = char_cut(text, MAX_SOURCE_CHARS);
        let truncated = cut.is_some();
        let text = cut.map_or(text, |index| &text[..index]);

        if text == self.source_text {
            return SourceEdit {
                truncated,
                request: None,
            };
        }

        text.clone_into(&mut self.source_text);
        SourceEdit {
            truncated,
            request: self.notify(Transition::SourceTextChanged),
        }
    }

    pub fn set_source_language(&mut self, language: Language) -> Option<TranslationRequest> {
        if language == self.source_language {
            return None;
        }
        self.source_language = language;
        self.notify(Transition::SourceLanguageChanged)
    }

    pub fn set_target_language(&mut self, language: Language) -> Option<TranslationRequest> {
        if language == self.target_language {
            return None;
        }
        self.target_language = language;
        self.notify(Transition::TargetLanguageChanged)
    }

    /// Issues a request for the current text and languages.
    ///
    /// Any request issued earlier becomes stale.
    pub fn translate(&mut self) -> TranslationRequest {
        self.latest_seq += 1;
        self.status = TranslationStatus::Requesting {
            seq: self.latest_seq,
        };
        debug!(
            seq = self.latest_seq,
            chars = self.character_count(),
            "issued translation request"
        );

        TranslationRequest {
            seq: self.latest_seq,
            text: self.source_text.clone(),
            source_language: self.source_language,
            target_language: self.target_language,
        }
    }

    /// Applies a settled response if it answers the latest request.
    pub fn apply(&mut self, response: TranslationResponse) -> Applied {
        if response.seq != self.latest_seq || !self.is_pending() {
            debug!(
                seq = response.seq,
                latest = self.latest_seq,
                "discarding stale translation response"
            );
            return Applied::Stale;
        }

        match response.outcome {
            Ok(text) => {
                self.translated_text = text;
                self.status = TranslationStatus::Translated;
                Applied::Updated
            }
            Err(err) => {
                self.status = TranslationStatus::Failed(err.clone());
                Applied::Failed(err)
            }
        }
    }

    /// Exchanges source and target roles: texts and languages together.
    ///
    /// Requests still in flight become stale.
    pub fn swap(&mut self) -> Option<TranslationRequest> {
        std::mem::swap(&mut self.source_text, &mut self.translated_text);
        std::mem::swap(&mut self.source_language, &mut self.target_language);

        // The translation may be longer than the source box allows.
        if let Some(index) = char_cut(&self.source_text, MAX_SOURCE_CHARS) {
            self.source_text.truncate(index);
        }

        if self.is_pending() {
            self.latest_seq += 1;
            self.status = TranslationStatus::Idle;
        }

        self.notify(Transition::Swapped)
    }

    fn notify(&mut self, transition: Transition) -> Option<TranslationRequest> {
        self.triggers
            .fires_on(transition)
            .then(|| self.translate())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(Language::English, Language::French)
    }
}

/// Byte index at which `text` must be cut to keep `max` characters, if it
/// is longer than that.
fn char_cut(text: &str, max: usize) -> Option<usize> {
    text.char_indices().nth(max).map(|(index, _)| index)
}
