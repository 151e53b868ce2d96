//! Failures surfaced to the user by the translation box.
//!
//! None of these are fatal: each is reported where it happens and the
//! session keeps working. The user re-triggers the action to try again.

use thiserror::Error;

/// Errors produced by the session's collaborators.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WidgetError {
    /// The request to the translation service could not complete.
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The translation service answered, but not with a translation.
    #[error("Translation service error: {0}")]
    ServiceError(String),

    /// Writing to the system clipboard failed.
    #[error("Clipboard failure: {0}")]
    ClipboardFailure(String),

    /// The text-to-speech backend could not be started.
    #[error("Speech failure: {0}")]
    SpeechFailure(String),
}

impl WidgetError {
    /// Maps a transport error from the HTTP client.
    ///
    /// Status and decode errors are the service's fault; everything else
    /// (connect, timeout, body read) means the request never completed.
    pub fn from_http(err: &reqwest::Error) -> Self {
        if err.is_status() || err.is_decode() {
            Self::ServiceError(err.to_string())
        } else {
            Self::NetworkFailure(err.to_string())
        }
    }
}
