//! Download a captured photo into the device gallery.

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use newsdesk_types::{Capability, PermissionStatus};

use crate::cancel::cancellable;
use crate::error::Result;
use crate::notice::{Notice, NoticeDispatcher};
use crate::traits::Platform;

/// How a download attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The image was copied into the gallery.
    Saved,
    /// Media library permission was refused.
    PermissionDenied,
    /// The media library rejected the save.
    Failed(String),
}

/// Copy the image behind `image_handle` into the shared media library.
///
/// Never touches the photo store. Failures publish a notice; only
/// cancellation is returned as an error.
pub async fn download_to_gallery<P: Platform + ?Sized>(
    platform: &P,
    image_handle: &str,
    notices: &NoticeDispatcher,
    token: &CancellationToken,
) -> Result<DownloadOutcome> {
    let status = match cancellable(
        token,
        "media library permission",
        platform.permissions().request(Capability::MediaLibrary),
    )
    .await
    {
        Ok(status) => status,
        Err(e) if e.is_cancelled() => return Err(e),
        Err(e) => {
            warn!("Media library permission request failed: {}", e);
            PermissionStatus::Denied
        }
    };

    if !status.is_granted() {
        notices.notify(Notice::media_permission_denied());
        return Ok(DownloadOutcome::PermissionDenied);
    }

    match cancellable(
        token,
        "media library save",
        platform.media_library().save(image_handle),
    )
    .await
    {
        Ok(()) => {
            info!("Saved {} to gallery", image_handle);
            notices.notify(Notice::download_saved());
            Ok(DownloadOutcome::Saved)
        }
        Err(e) if e.is_cancelled() => Err(e),
        Err(e) => {
            error!("Failed to save {} to gallery: {}", image_handle, e);
            notices.notify(Notice::download_failed());
            Ok(DownloadOutcome::Failed(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPlatform;
    use crate::notice::drain;

    #[tokio::test]
    async fn test_download_saves() {
        let platform = MockPlatform::builder().build();
        let notices = NoticeDispatcher::default();
        let mut rx = notices.subscribe();

        let outcome = download_to_gallery(&platform, "img-1", &notices, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome, DownloadOutcome::Saved);
        assert_eq!(platform.media.saved(), vec!["img-1".to_string()]);
        assert_eq!(drain(&mut rx), vec![Notice::download_saved()]);
    }

    #[tokio::test]
    async fn test_download_permission_denied() {
        let platform = MockPlatform::builder().media_permission(false).build();
        let notices = NoticeDispatcher::default();
        let mut rx = notices.subscribe();

        let outcome = download_to_gallery(&platform, "img-1", &notices, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome, DownloadOutcome::PermissionDenied);
        assert_eq!(platform.media.save_count(), 0);
        assert_eq!(drain(&mut rx), vec![Notice::media_permission_denied()]);
    }

    #[tokio::test]
    async fn test_download_failure() {
        let platform = MockPlatform::builder().build();
        platform.media.set_fails(true);
        let notices = NoticeDispatcher::default();
        let mut rx = notices.subscribe();

        let outcome = download_to_gallery(&platform, "img-1", &notices, &CancellationToken::new())
            .await
            .unwrap();

        assert!(matches!(outcome, DownloadOutcome::Failed(_)));
        assert!(platform.media.saved().is_empty());
        assert_eq!(drain(&mut rx), vec![Notice::download_failed()]);
    }
}
