//! Unified error handling for modlist-changelog
//!
//! Every failure a comparison can hit falls into one of three user-facing
//! categories: an input that could not be loaded, too little input to compare
//! anything, or a report that could not be written. The remaining variants are
//! plumbing that gets folded into one of those at the crate boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for all modlist-changelog operations
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Input Errors ====================

    /// A required list or manifest could not be read or parsed.
    ///
    /// Distinct from an empty result: callers must never treat this as
    /// "no mods".
    #[error("Input unavailable: {input}: {reason}")]
    Unavailable {
        input: String,
        reason: String,
    },

    /// Not enough data was supplied to compare anything
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    // ==================== Output Errors ====================

    /// Writing the report (or a manifest) failed
    #[error("Failed to write {path}: {source}")]
    PersistenceFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ==================== Plumbing ====================

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
    },

    /// Custom error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

/// Result type using the unified Error
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error with additional context
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Error::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Create an unavailable-input error.
    ///
    /// `input` names what failed to load, usually a file path.
    pub fn unavailable(input: impl Into<String>, reason: impl ToString) -> Self {
        Error::Unavailable {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an insufficient-data error
    pub fn insufficient(message: impl Into<String>) -> Self {
        Error::InsufficientData(message.into())
    }

    /// Create a persistence error for `path`
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::PersistenceFailed {
            path: path.into(),
            source,
        }
    }

    /// The innermost error, skipping any context wrappers
    pub fn root(&self) -> &Error {
        match self {
            Error::WithContext { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if an input could not be loaded
    pub fn is_unavailable(&self) -> bool {
        matches!(self.root(), Error::Unavailable { .. })
    }

    /// Check if the caller supplied too little to compare
    pub fn is_insufficient(&self) -> bool {
        matches!(self.root(), Error::InsufficientData(_))
    }

    /// Check if writing output failed
    pub fn is_persistence(&self) -> bool {
        matches!(self.root(), Error::PersistenceFailed { .. })
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_with_context() {
        let err = Error::unavailable("/old/modlist.txt", "not found");
        let contextualized = err.with_context("while loading old modlist");

        assert!(contextualized.to_string().contains("while loading old modlist"));
        assert!(contextualized.is_unavailable());
    }

    #[test]
    fn test_categories_are_exclusive() {
        let unavailable = Error::unavailable("a.json", "bad json");
        let insufficient = Error::insufficient("no old data");
        let persistence = Error::persistence(
            "out.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );

        assert!(unavailable.is_unavailable());
        assert!(!unavailable.is_insufficient());
        assert!(insufficient.is_insufficient());
        assert!(!insufficient.is_persistence());
        assert!(persistence.is_persistence());
        assert!(!persistence.is_unavailable());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::insufficient("nothing to compare"));
        let with_context = result.context("composing changelog");

        let err = with_context.unwrap_err();
        assert!(err.to_string().contains("composing changelog"));
        assert!(err.is_insufficient());
    }
}
