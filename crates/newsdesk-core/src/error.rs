//! Error types for newsdesk-core.
//!
//! Capability providers report failures with this [`Error`]. The flows in
//! this crate catch provider failures where they happen and turn them into
//! notices or degraded results; the only error a flow itself returns is
//! [`Error::Cancelled`], when its cancellation token fires.
//!
//! | Error | Where it is handled |
//! |-------|---------------------|
//! | [`Error::PermissionDenied`] | Treated as a denied permission |
//! | [`Error::LocationUnavailable`] | Capture continues without location |
//! | [`Error::Camera`] | Capture aborts with a notice |
//! | [`Error::MediaSave`] | Download reports a notice |
//! | [`Error::Storage`] | Store keeps its in-memory state |
//! | [`Error::Cancelled`] | Propagated to the caller |

use thiserror::Error;

use newsdesk_types::Capability;

/// Errors raised by capability providers and flows.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A capability was refused.
    #[error("Permission denied: {0}")]
    PermissionDenied(Capability),

    /// Position fix or reverse geocoding failed.
    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// The camera could not be launched or returned an error.
    #[error("Camera error: {0}")]
    Camera(String),

    /// Writing to the media library failed.
    #[error("Failed to save to media library: {0}")]
    MediaSave(String),

    /// Any other provider failure.
    #[error("Provider error in '{operation}': {message}")]
    Provider {
        /// The provider call that failed.
        operation: String,
        /// Description of the failure.
        message: String,
    },

    /// The operation was cancelled through its cancellation token.
    #[error("Operation '{operation}' was cancelled")]
    Cancelled {
        /// The provider call that was pending.
        operation: String,
    },

    /// Key-value storage failure.
    #[error(transparent)]
    Storage(#[from] newsdesk_store::Error),
}

impl Error {
    /// Create a provider error.
    pub fn provider(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Provider {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Whether this error is a cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled { .. })
    }
}

/// Result type alias using newsdesk-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::PermissionDenied(Capability::MediaLibrary).to_string(),
            "Permission denied: media library"
        );
        assert_eq!(
            Error::Cancelled {
                operation: "camera".to_string()
            }
            .to_string(),
            "Operation 'camera' was cancelled"
        );
        assert_eq!(
            Error::provider("geocode", "offline").to_string(),
            "Provider error in 'geocode': offline"
        );
    }

    #[test]
    fn test_is_cancelled() {
        assert!(
            Error::Cancelled {
                operation: "x".to_string()
            }
            .is_cancelled()
        );
        assert!(!Error::Camera("x".to_string()).is_cancelled());
    }

    #[test]
    fn test_storage_error_conversion() {
        let err: Error = newsdesk_store::Error::Unavailable("full".to_string()).into();
        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(err.to_string(), "Storage unavailable: full");
    }
}
