use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, Read};

/// Largest input accepted before truncation to the box size.
///
/// The box only holds 500 characters, so anything this large is almost
/// certainly the wrong file.
pub const MAX_INPUT_SIZE: usize = 64 * 1024;

pub struct InputReader;

impl InputReader {
    /// Reads source text from `file_path`, or from stdin if it is `None`.
    ///
    /// A single trailing newline is removed.
    pub fn read(file_path: Option<&str>) -> Result<String> {
        let text = match file_path {
            Some(path) => {
                let file =
                    File::open(path).with_context(|| format!("Failed to open file: {path}"))?;
                read_limited(file).with_context(|| format!("Failed to read file: {path}"))?
            }
            None => read_limited(io::stdin().lock()).context("Failed to read from stdin")?,
        };
        Ok(strip_trailing_newline(text))
    }
}

fn read_limited<R: Read>(reader: R) -> Result<String> {
    let mut buffer = Vec::new();
    // One byte past the limit tells "exactly at" from "over".
    reader
        .take(MAX_INPUT_SIZE as u64 + 1)
        .read_to_end(&mut buffer)?;

    if buffer.len() > MAX_INPUT_SIZE {
        bail!(
            "Input exceeds maximum allowed size ({} KB).\n\n\
             Only the first 500 characters are translated anyway.",
            MAX_INPUT_SIZE / 1024
        );
    }

    String::from_utf8(buffer).context("Input is not valid UTF-8")
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Hello, how are you?").unwrap();

        let content = InputReader::read(Some(temp_file.path().to_str().unwrap())).unwrap();
        assert_eq!(content, "Hello, how are you?");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read(Some("/nonexistent/path/to/file.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_read_limited_at_max_size() {
        let content = "x".repeat(MAX_INPUT_SIZE);
        let result = read_limited(Cursor::new(content)).unwrap();
        assert_eq!(result.len(), MAX_INPUT_SIZE);
    }

    #[test]
    fn test_read_limited_exceeds_max_size() {
        let content = "x".repeat(MAX_INPUT_SIZE + 1);
        let err = read_limited(Cursor::new(content)).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_read_limited_rejects_invalid_utf8() {
        let err = read_limited(Cursor::new(vec![0xff, 0xfe])).unwrap_err();
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn test_strip_trailing_newline() {
        assert_eq!(strip_trailing_newline("Hola\n".to_string()), "Hola");
        assert_eq!(strip_trailing_newline("Hola\r\n".to_string()), "Hola");
        assert_eq!(strip_trailing_newline("a\nb\n\n".to_string()), "a\nb\n");
        assert_eq!(strip_trailing_newline("Hola".to_string()), "Hola");
    }
}
