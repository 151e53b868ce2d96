//! Interactive mode: a REPL-style translation box.
//!
//! Plain lines replace the source text; slash commands switch languages,
//! swap, copy and speak.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod ui;

pub use session::InteractiveSession;
