//! Error types for data parsing in newsdesk-types.

use thiserror::Error;

/// Errors that can occur when parsing Newsdesk values from text.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// Unknown capability name.
    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    /// Unknown news category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

/// Result type alias using newsdesk-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
