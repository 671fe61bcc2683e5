//! Caller-visible error types

use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of the synchronization operations.
///
/// A missing or malformed index is an ordinary "no synchronization available"
/// condition, never a panic. Backward search swallows these and degrades to a
/// no-op; forward search surfaces them because its caller needs a page number
/// and has no fallback without one.
#[derive(Debug, Error)]
pub enum SyncError {
    /// No synchronization index could be located or opened for the document.
    #[error("cannot open synchronization index for '{}'", .path.display())]
    Open { path: PathBuf },

    /// An index file was found but could not be parsed.
    #[error("malformed synchronization index for '{}'", .path.display())]
    Parse { path: PathBuf },

    /// A required argument was empty.
    #[error("missing {0}")]
    MissingInput(&'static str),
}

/// Failure modes of editor-command tokenization.
///
/// These never propagate out of [`crate::search::edit`]; they are logged and
/// the launch is skipped.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template contained an unterminated single or double quote.
    #[error("unterminated quote in editor command")]
    UnterminatedQuote,

    /// The template ended in the middle of a backslash escape.
    #[error("trailing escape in editor command")]
    TrailingEscape,

    /// The template produced no arguments at all.
    #[error("empty editor command")]
    Empty,
}
