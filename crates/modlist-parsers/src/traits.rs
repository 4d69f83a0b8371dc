// modlist-parsers/src/traits.rs
//! Core traits defining the parser interface for the input formats.
//!
//! Parsing is split in two layers. [`Parser::parse_str`] works on content that
//! is already in memory and reports format problems as [`ParseError`]. The
//! file-level entry points wrap any read or format failure into
//! [`modlist_core::Error::Unavailable`], so callers never see a partial result.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use thiserror::Error;

use crate::{log_parse_complete, log_parse_error, log_parse_start};

/// Errors that can occur while parsing in-memory content
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("Malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid structure: {0}")]
    InvalidStructure(String),
}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Core trait for all input format parsers
pub trait Parser: Send + Sync {
    /// The parsed output type
    type Output: Send + Sync;

    /// Returns a human-readable name for this parser
    fn name(&self) -> &str;

    /// Returns the file extensions this parser usually handles (e.g., ["txt"])
    fn extensions(&self) -> &[&str];

    /// Parse content that is already in memory
    fn parse_str(&self, content: &str) -> ParseResult<Self::Output>;

    /// Parse everything a reader yields
    fn parse_reader<R: Read>(&self, mut reader: R) -> ParseResult<Self::Output> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let content = String::from_utf8(bytes)?;
        self.parse_str(&content)
    }

    /// Parse from a file path.
    ///
    /// Any failure, whether reading or parsing, yields
    /// [`modlist_core::Error::Unavailable`] for `path`.
    fn parse_file(&self, path: &Path) -> modlist_core::Result<Self::Output> {
        log_parse_start!(self.name(), path);
        let start = Instant::now();

        let result = std::fs::File::open(path)
            .map_err(ParseError::from)
            .and_then(|file| self.parse_reader(std::io::BufReader::new(file)));

        match result {
            Ok(output) => {
                log_parse_complete!(self.name(), start.elapsed(), path.display());
                Ok(output)
            }
            Err(e) => {
                log_parse_error!(self.name(), e);
                Err(modlist_core::Error::unavailable(path.display().to_string(), e))
            }
        }
    }

    /// Check if this parser is the usual handler for the given file
    fn can_parse(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions().iter().any(|e| e.eq_ignore_ascii_case(&ext)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LineCounter;

    impl Parser for LineCounter {
        type Output = usize;

        fn name(&self) -> &str {
            "line counter"
        }

        fn extensions(&self) -> &[&str] {
            &["txt"]
        }

        fn parse_str(&self, content: &str) -> ParseResult<usize> {
            Ok(content.lines().count())
        }
    }

    #[test]
    fn test_parse_reader_rejects_invalid_utf8() {
        let bytes: &[u8] = &[b'+', 0xFF, 0xFE, b'\n'];
        let err = LineCounter.parse_reader(bytes).unwrap_err();
        assert!(matches!(err, ParseError::InvalidUtf8(_)));
    }

    #[test]
    fn test_parse_file_missing_is_unavailable() {
        let err = LineCounter
            .parse_file(Path::new("/definitely/not/here/modlist.txt"))
            .unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn test_can_parse_by_extension() {
        assert!(LineCounter.can_parse(Path::new("profiles/Default/modlist.TXT")));
        assert!(!LineCounter.can_parse(Path::new("versions.json")));
        assert!(!LineCounter.can_parse(Path::new("modlist")));
    }
}
