//! Error taxonomy shared by validators, migrations, and analyzers
//!
//! Every failure maps onto one of a small set of [`ErrorKind`]s so callers can
//! tell "conversion not supported" apart from "invalid content" without
//! matching on individual variants.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Result type for docshift operations
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Content or input does not match the expected structural schema
    Validation,
    /// No migration, migration path, analyzer, or content type
    NotFound,
    /// Registration conflict
    AlreadyExists,
    /// A wrapped migration did not finish in time
    Timeout,
    /// Anything else a migration or analyzer reports
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::Validation => "invalid content",
            ErrorKind::NotFound => "conversion not supported",
            ErrorKind::AlreadyExists => "conflicting registration",
            ErrorKind::Timeout => "timed out",
            ErrorKind::Internal => "internal error",
        };
        f.write_str(label)
    }
}

/// A value failed a structural schema check
///
/// `path` uses `$` for the root value, `[n]` for array indices and `.key`
/// for object members, e.g. `$[1].children[0].text`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value at {path}: expected {expected}, received {received}")]
pub struct ValidationError {
    pub path: String,
    pub expected: String,
    pub received: String,
}

impl ValidationError {
    pub fn new(
        path: impl Into<String>,
        expected: impl Into<String>,
        received: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            expected: expected.into(),
            received: received.into(),
        }
    }
}

/// Errors raised by the conversion and analysis engine
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No migration registered from {from} to {to}")]
    NoMigration { from: String, to: String },

    #[error("No migration path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("No analyzer registered for {content_type}")]
    NoAnalyzer { content_type: String },

    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    #[error("A migration from {from} to {to} is already registered")]
    MigrationExists { from: String, to: String },

    #[error("{content_type} is already handled by analyzer '{existing}'")]
    AnalyzerConflict {
        content_type: String,
        existing: String,
    },

    #[error("Step {index} of {total} ({from} -> {to}) failed: {source}")]
    Step {
        index: usize,
        total: usize,
        from: String,
        to: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Migration from {from} to {to} timed out after {after:?}")]
    Timeout {
        from: String,
        to: String,
        after: Duration,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Classify this error. Chain-step errors report the kind of the step's
    /// own failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::NoMigration { .. }
            | Error::NoPath { .. }
            | Error::NoAnalyzer { .. }
            | Error::UnknownContentType(_) => ErrorKind::NotFound,
            Error::MigrationExists { .. } | Error::AnalyzerConflict { .. } => {
                ErrorKind::AlreadyExists
            }
            Error::Step { source, .. } => source.kind(),
            Error::Timeout { .. } => ErrorKind::Timeout,
            Error::Serialization(_) | Error::Internal(_) => ErrorKind::Internal,
        }
    }

    /// The innermost error, looking through chain-step annotations
    pub fn root(&self) -> &Error {
        match self {
            Error::Step { source, .. } => source.root(),
            other => other,
        }
    }

    /// The validation failure behind this error, if any
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self.root() {
            Error::Validation(v) => Some(v),
            _ => None,
        }
    }
}
