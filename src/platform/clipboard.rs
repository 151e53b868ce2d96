use async_trait::async_trait;
use cli_clipboard::{ClipboardContext, ClipboardProvider};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::WidgetError;

/// Writes text to the system clipboard.
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), WidgetError>;
}

/// The system clipboard.
///
/// Talks to the platform clipboard directly unless a copy program is
/// configured, in which case the text is piped to that program's stdin.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    command: Option<Vec<String>>,
}

impl SystemClipboard {
    pub fn new(command: Option<Vec<String>>) -> Self {
        Self {
            command: command.filter(|c| !c.is_empty()),
        }
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), WidgetError> {
        match self.command.as_deref().and_then(<[String]>::split_first) {
            Some((program, args)) => pipe_to(program, args, text).await,
            None => write_native(text.to_owned()).await,
        }
    }
}

async fn write_native(text: String) -> Result<(), WidgetError> {
    tokio::task::spawn_blocking(move || {
        ClipboardContext::new()
            .and_then(|mut ctx| ctx.set_contents(text))
            .map_err(|e| e.to_string())
    })
    .await
    .map_err(|e| WidgetError::ClipboardFailure(e.to_string()))?
    .map_err(WidgetError::ClipboardFailure)
}

async fn pipe_to(program: &str, args: &[String], text: &str) -> Result<(), WidgetError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| WidgetError::ClipboardFailure(format!("failed to run '{program}': {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .await
            .map_err(|e| WidgetError::ClipboardFailure(e.to_string()))?;
        // Closing stdin tells the copy program the text is complete.
        drop(stdin);
    }

    let status = child
        .wait()
        .await
        .map_err(|e| WidgetError::ClipboardFailure(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(WidgetError::ClipboardFailure(format!(
            "'{program}' exited with {status}"
        )))
    }
}
