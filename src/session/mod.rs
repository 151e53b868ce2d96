//! The translation session: what the box shows and when it retranslates.
//!
//! [`SessionState`] holds the four fields and decides which transitions
//! enqueue a request. [`TranslationSession`] wraps it with the collaborators:
//! it sends requests to the translator on background tasks, collects their
//! responses over a channel and applies them on the owning task, so the
//! state itself is only ever touched from one place.

mod state;
mod triggers;

pub use state::{
    Applied, DEFAULT_SOURCE_TEXT, MAX_SOURCE_CHARS, SessionState, SourceEdit, TranslationStatus,
};
pub use triggers::{Transition, Triggers};

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::error::WidgetError;
use crate::platform::{Clipboard, Speaker};
use crate::translation::{Language, TranslationRequest, TranslationResponse, Translator};

/// External services the session delegates to.
#[derive(Clone)]
pub struct Collaborators {
    pub translator: Arc<dyn Translator>,
    pub clipboard: Arc<dyn Clipboard>,
    pub speaker: Arc<dyn Speaker>,
}

/// A live translation box.
pub struct TranslationSession {
    state: SessionState,
    collaborators: Collaborators,
    responses_tx: mpsc::UnboundedSender<TranslationResponse>,
    responses_rx: mpsc::UnboundedReceiver<TranslationResponse>,
}

impl TranslationSession {
    pub fn new(state: SessionState, collaborators: Collaborators) -> Self {
        let (responses_tx, responses_rx) = mpsc::unbounded_channel();
        Self {
            state,
            collaborators,
            responses_tx,
            responses_rx,
        }
    }

    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Replaces the source text; returns `true` if it had to be truncated.
    pub fn set_source_text(&mut self, text: &str) -> bool {
        let edit = self.state.set_source_text(text);
        self.dispatch(edit.request);
        edit.truncated
    }

    pub fn set_source_language(&mut self, language: Language) {
        let request = self.state.set_source_language(language);
        self.dispatch(request);
    }

    pub fn set_target_language(&mut self, language: Language) {
        let request = self.state.set_target_language(language);
        self.dispatch(request);
    }

    /// Sends a translation of the current text; returns its sequence number.
    pub fn translate(&mut self) -> u64 {
        let request = self.state.translate();
        let seq = request.seq;
        self.dispatch(Some(request));
        seq
    }

    pub fn swap(&mut self) {
        let request = self.state.swap();
        self.dispatch(request);
    }

    /// Applies every response that has already arrived, without waiting.
    pub fn drain(&mut self) -> Vec<Applied> {
        let mut applied = Vec::new();
        while let Ok(response) = self.responses_rx.try_recv() {
            applied.push(self.state.apply(response));
        }
        applied
    }

    /// Waits for the latest request to settle and applies it.
    ///
    /// Stale responses that arrive first are applied (and so dropped) along
    /// the way. Returns `None` when nothing is pending. Cancelling the
    /// returned future loses no response.
    pub async fn settle(&mut self) -> Option<Applied> {
        while self.state.is_pending() {
            let response = self.responses_rx.recv().await?;
            match self.state.apply(response) {
                Applied::Stale => {}
                applied => return Some(applied),
            }
        }
        None
    }

    pub async fn copy_to_clipboard(&self, text: &str) -> Result<(), WidgetError> {
        self.collaborators.clipboard.write_text(text).await
    }

    pub async fn speak(&self, text: &str) -> Result<(), WidgetError> {
        self.collaborators.speaker.speak(text).await
    }

    /// Waits for the current utterance to end.
    pub async fn finish_speaking(&self) {
        self.collaborators.speaker.finish().await;
    }

    fn dispatch(&self, request: Option<TranslationRequest>) {
        let Some(request) = request else {
            return;
        };

        let translator = Arc::clone(&self.collaborators.translator);
        let tx = self.responses_tx.clone();
        tokio::spawn(async move {
            let outcome = translator.translate(&request).await;
            if let Err(err) = &outcome {
                debug!(seq = request.seq, "translation failed: {err}");
            }
            // The receiver lives as long as the session.
            let _ = tx.send(request.respond(outcome));
        });
    }
}
