//! # tbox - Terminal Translation Box
//!
//! `tbox` puts a small translation box in the terminal: type text, pick the
//! languages, and the MyMemory translation API fills in the other side.
//! The box can swap sides, copy the translation to the clipboard and read
//! either side aloud.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the interactive box (English → French by default)
//! tbox
//!
//! # Translate once
//! tbox --from en --to es "Where is the station?"
//!
//! # Translate stdin and copy the result
//! echo "Bonjour" | tbox -f fr -t en --copy
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/tbox/config.toml`:
//!
//! ```toml
//! [tbox]
//! from = "en"
//! to = "fr"
//!
//! [service]
//! endpoint = "https://api.mymemory.translated.net/get"
//!
//! [translate_on]
//! source_language = false
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// User-visible failure kinds.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Interactive translation box.
pub mod interactive;

/// Diagnostic logging setup.
pub mod logging;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Clipboard and text-to-speech backends.
pub mod platform;

/// Translation session state and synchronization.
pub mod session;

/// MyMemory client and language codes.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
