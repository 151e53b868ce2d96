//! Clipboard and text-to-speech backends.
//!
//! The clipboard goes through `cli-clipboard` and speech through the `tts`
//! voice where the platform has one. Either can be pointed at an external
//! program in the config file instead.

mod clipboard;
mod speech;

pub use clipboard::{Clipboard, SystemClipboard};
pub use speech::{Speaker, SystemSpeaker};

use std::env;
use std::path::PathBuf;

/// Looks `program` up in `PATH`.
pub fn find_program(program: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths).find_map(|dir| {
        let candidate = dir.join(program);
        if candidate.is_file() {
            return Some(candidate);
        }
        if cfg!(windows) {
            let exe = dir.join(format!("{program}.exe"));
            if exe.is_file() {
                return Some(exe);
            }
        }
        None
    })
}

/// Picks the first candidate command whose program is installed.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn detect(candidates: &[&[&str]]) -> Option<Vec<String>> {
    candidates
        .iter()
        .find(|cmd| cmd.first().is_some_and(|p| find_program(p).is_some()))
        .map(|cmd| cmd.iter().map(ToString::to_string).collect())
}
