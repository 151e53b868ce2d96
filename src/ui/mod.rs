//! Terminal UI components (spinner, colors, prompts, notifications).

use anyhow::Result;
use inquire::InquireError;
use std::fmt::Display;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

/// Shows a failure to the user. Always printed, even in quiet mode.
pub fn print_error(message: impl Display) {
    crate::alert!("{} {message}", Style::error("Error:"));
}

/// Shows a confirmation such as "Copied to clipboard!".
pub fn print_success(message: impl Display) {
    crate::status!("{} {message}", Style::success("✓"));
}

/// Shows a non-fatal warning.
pub fn print_warning(message: impl Display) {
    crate::alert!("{} {message}", Style::warning("Warning:"));
}

/// Check if the inquire error is a user cancellation/interruption.
pub const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Wraps a function that uses interactive prompts and handles user cancellation gracefully.
///
/// If the user cancels the prompt (Ctrl+C or Escape), this function prints a newline
/// to clean up the terminal and returns `Ok(())` instead of propagating the error.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Ok(()) => Ok(()),
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        Err(e) => Err(e),
    }
}
