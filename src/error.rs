//! Crate-wide error type

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the pattern store and compiler.
///
/// Each variant formats as a single line suitable for printing to the
/// invoking terminal; none are retried.
#[derive(Error, Debug)]
pub enum GfError {
    /// The current user's home directory could not be determined.
    #[error("unable to determine the user's home directory")]
    HomeDirUnavailable,

    /// No pattern file exists for the requested name. The message is kept
    /// generic on purpose: it must not leak the filesystem path.
    #[error("no such pattern")]
    PatternNotFound,

    /// A pattern file exists but does not parse as a pattern definition.
    #[error("pattern file '{}' is malformed: {source}", path.display())]
    MalformedPattern {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Save was called with a required field left empty.
    #[error("{0} cannot be empty")]
    MissingField(&'static str),

    /// The pattern name would escape the pattern directory.
    #[error("invalid pattern name '{0}': must not contain path separators or '..'")]
    InvalidName(String),

    /// Save refuses to overwrite an existing pattern file.
    #[error("pattern '{0}' already exists")]
    PatternExists(String),

    /// I/O failure while persisting a pattern.
    #[error("failed to write pattern file: {0}")]
    WriteFailed(#[source] std::io::Error),

    /// Compile was called on a definition with neither a single pattern nor
    /// any alternatives.
    #[error("pattern contains no pattern(s)")]
    NoPattern,
}

pub type Result<T> = std::result::Result<T, GfError>;
