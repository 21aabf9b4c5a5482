//! Error types for diffmeta.
//!
//! Uses thiserror for derive macros. Header parse failures carry the position
//! of the offending line so callers can annotate diagnostics.

use crate::file::{Side, DEV_NULL};
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Why a filename token could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The token was empty (`""` or nothing before the terminator).
    #[error("missing name")]
    Missing,

    /// A quoted name had no closing quote on its line.
    #[error("unterminated quoted name")]
    Unterminated,

    /// A backslash sequence inside a quoted name was not recognized.
    #[error("invalid escape sequence {0:?}")]
    BadEscape(String),

    /// The unescaped bytes of a quoted name are not UTF-8.
    #[error("name is not valid UTF-8")]
    InvalidUtf8,
}

/// How a parsed name contradicted what earlier header lines established.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameConflict {
    /// The side already has a different name.
    Mismatch,
    /// The side is flagged as `/dev/null` but a real name was parsed.
    ExpectedNull,
    /// The side is flagged as `/dev/null` but already carries a name.
    AlreadySet(String),
}

impl fmt::Display for NameConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameConflict::Mismatch => write!(f, "name differs from an earlier header line"),
            NameConflict::ExpectedNull => write!(f, "expected {}", DEV_NULL),
            NameConflict::AlreadySet(existing) => {
                write!(f, "expected {}, but filename is set to {}", DEV_NULL, existing)
            }
        }
    }
}

/// The kinds of failure a file header parse can produce.
#[derive(Error, Debug)]
pub enum HeaderError {
    /// A filename token was empty, unterminated or badly escaped.
    #[error("malformed name: {0}")]
    MalformedName(#[from] NameError),

    /// A mode field was not an octal number.
    #[error("invalid mode line {text:?}: {source}")]
    MalformedMode {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// A similarity/dissimilarity score was not a decimal number.
    #[error("invalid score line {text:?}: {source}")]
    MalformedScore {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// An index line without the `..` separator.
    #[error("invalid index line {0:?}: missing \"..\"")]
    MalformedIndex(String),

    /// A name contradicts the stored name or null flag for its side.
    #[error("inconsistent {side} filename: {conflict}")]
    InconsistentName { side: Side, conflict: NameConflict },

    /// No usable name for a required side once the header ended.
    #[error("missing filename information")]
    MissingFilename,

    /// The first line is neither a git marker nor a `---`/`+++` pair.
    #[error("unrecognized file header {0:?}")]
    UnrecognizedHeader(String),

    /// Input ended where another header line was required.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// The line source failed.
    #[error("failed to read patch: {0}")]
    Io(#[from] std::io::Error),
}

/// A header parse failure positioned relative to the start of the header.
#[derive(Error, Debug)]
#[error("line {line}: {kind}", line = .header_line + .offset)]
pub struct ParseError {
    /// Absolute 1-based line number of the first header line (0 if unknown).
    pub header_line: usize,
    /// Offset of the failing line from the first header line.
    pub offset: usize,
    /// What went wrong.
    pub kind: HeaderError,
}

impl ParseError {
    pub fn new(header_line: usize, offset: usize, kind: HeaderError) -> Self {
        Self {
            header_line,
            offset,
            kind,
        }
    }

    /// Absolute line number of the failing line.
    pub fn line(&self) -> usize {
        self.header_line + self.offset
    }
}

/// Failures while loading parse options.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("config validation failed: {0}")]
    Invalid(String),
}

/// Result type alias for header parsing.
pub type Result<T> = std::result::Result<T, ParseError>;
