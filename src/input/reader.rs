use std::fs;
use std::io;

use crate::errors::{Result, TranslationError};

/// Cap for reading a whole file into memory for console display. Streaming
/// mode has no cap; past this point the user is told to use `--output`.
const MAX_WHOLE_READ: u64 = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Opens a file for streaming.
    ///
    /// This is the input-validation step for streaming mode: it runs before
    /// the output sink is created, so a missing or unreadable input never
    /// leaves a truncated output file behind.
    ///
    /// # Errors
    ///
    /// [`TranslationError::InputUnreadable`] when the file cannot be opened.
    pub fn open(path: &str) -> Result<fs::File> {
        fs::File::open(path).map_err(|source| unreadable(path, source))
    }

    /// Reads a whole file into memory, for the console display path.
    ///
    /// # Errors
    ///
    /// [`TranslationError::InputTooLarge`] past the display cap, otherwise
    /// [`TranslationError::InputUnreadable`] for I/O or UTF-8 problems.
    pub fn read_whole(path: &str) -> Result<String> {
        let metadata = fs::metadata(path).map_err(|source| unreadable(path, source))?;

        let size = metadata.len();
        if size > MAX_WHOLE_READ {
            return Err(TranslationError::InputTooLarge {
                path: path.to_string(),
                size,
                limit: MAX_WHOLE_READ,
            });
        }

        fs::read_to_string(path).map_err(|source| unreadable(path, source))
    }
}

fn unreadable(path: &str, source: io::Error) -> TranslationError {
    TranslationError::InputUnreadable {
        path: path.to_string(),
        source,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_read_whole_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Hello, World!").unwrap();

        let content = InputReader::read_whole(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(content.trim(), "Hello, World!");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let result = InputReader::read_whole("/nonexistent/path/to/file.txt");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("cannot read input"), "got: {message}");
        assert!(message.contains("/nonexistent/path/to/file.txt"), "got: {message}");
    }

    #[test]
    fn test_open_nonexistent_file() {
        let result = InputReader::open("/nonexistent/path/to/file.txt");
        assert!(matches!(
            result.unwrap_err(),
            TranslationError::InputUnreadable { .. }
        ));
    }

    #[test]
    fn test_read_whole_unicode() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "こんにちは世界！🌍\n日本語テスト";
        write!(temp_file, "{content}").unwrap();

        let result = InputReader::read_whole(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_whole_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();

        let content = InputReader::read_whole(temp_file.path().to_str().unwrap()).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_read_whole_rejects_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&[0x66, 0xFF, 0x66]).unwrap();

        let result = InputReader::read_whole(temp_file.path().to_str().unwrap());
        assert!(matches!(
            result.unwrap_err(),
            TranslationError::InputUnreadable { .. }
        ));
    }

    #[test]
    fn test_read_whole_exceeds_display_cap() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("large_file.txt");

        // One byte past the cap
        let large_content = "x".repeat(usize::try_from(MAX_WHOLE_READ).unwrap() + 1);
        fs::write(&file_path, &large_content).unwrap();

        let result = InputReader::read_whole(file_path.to_str().unwrap());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("--output"), "got: {message}");
    }

    #[test]
    fn test_read_whole_at_display_cap() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("max_file.txt");

        let content = "x".repeat(usize::try_from(MAX_WHOLE_READ).unwrap());
        fs::write(&file_path, &content).unwrap();

        let result = InputReader::read_whole(file_path.to_str().unwrap());
        assert_eq!(result.unwrap().len(), content.len());
    }

    #[test]
    fn test_read_whole_multiline() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let content = "Line 1\nLine 2\nLine 3";
        write!(temp_file, "{content}").unwrap();

        let result = InputReader::read_whole(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(result, content);
    }
}
