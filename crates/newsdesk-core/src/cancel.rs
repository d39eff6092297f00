//! Cancellable provider calls.
//!
//! Provider calls have no timeout. Wrapping each one with [`cancellable`]
//! lets the caller abandon a flow that is stuck on a provider that never
//! answers.

use std::future::Future;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{Error, Result};

/// Await `future` unless `token` is cancelled first.
///
/// If the token is already cancelled, the future is not polled at all.
pub async fn cancellable<T, F>(token: &CancellationToken, operation: &str, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => {
            debug!("{} cancelled", operation);
            Err(Error::Cancelled {
                operation: operation.to_string(),
            })
        }
        result = future => result,
    }
}
