//! The geotagged photo capture flow.
//!
//! Steps run strictly in order: camera permission, location lookup, camera
//! launch, store append. There is one success path and two abort points
//! (camera permission refused, user cancelled the camera); neither abort
//! touches the store.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use newsdesk_store::{KeyValueStore, PhotoStore, WriteThrough};
use newsdesk_types::{Capability, CaptureOptions, CaptureResult, PermissionStatus, PhotoRecord};

use crate::cancel::cancellable;
use crate::error::Result;
use crate::location::{LocationLookup, lookup_location};
use crate::notice::{Notice, NoticeDispatcher};
use crate::traits::Platform;

/// How a capture attempt ended.
#[derive(Debug)]
pub enum CaptureOutcome {
    /// A record was added to the store.
    Saved {
        /// The new record, now first in the store.
        record: PhotoRecord,
        /// What the location lookup produced.
        location: LocationLookup,
        /// Whether the store write reached storage.
        write: WriteThrough,
    },
    /// Camera permission was refused.
    CameraDenied,
    /// The user backed out of the camera.
    Cancelled,
    /// The camera reported an error.
    CameraFailed(String),
}

impl CaptureOutcome {
    /// The saved record, if any.
    pub fn record(&self) -> Option<&PhotoRecord> {
        match self {
            CaptureOutcome::Saved { record, .. } => Some(record),
            _ => None,
        }
    }

    /// Whether a record was added to the store.
    pub fn is_saved(&self) -> bool {
        matches!(self, CaptureOutcome::Saved { .. })
    }
}

/// Run the capture flow and append the result to `store`.
///
/// Provider failures degrade or abort with a notice. The only error returned
/// is [`crate::Error::Cancelled`] when `token` fires while a provider call is
/// pending; steps already completed stay completed.
pub async fn capture_photo<S, P>(
    platform: &P,
    store: &mut PhotoStore<S>,
    notices: &NoticeDispatcher,
    options: &CaptureOptions,
    token: &CancellationToken,
) -> Result<CaptureOutcome>
where
    S: KeyValueStore,
    P: Platform + ?Sized,
{
    let camera_status = match cancellable(
        token,
        "camera permission",
        platform.permissions().request(Capability::Camera),
    )
    .await
    {
        Ok(status) => status,
        Err(e) if e.is_cancelled() => return Err(e),
        Err(e) => {
            warn!("Camera permission request failed: {}", e);
            PermissionStatus::Denied
        }
    };

    if !camera_status.is_granted() {
        info!("Camera permission denied; capture aborted");
        notices.notify(Notice::camera_permission_denied());
        return Ok(CaptureOutcome::CameraDenied);
    }

    let location = lookup_location(platform, notices, token).await?;

    let image_handle = match cancellable(token, "camera", platform.camera().capture(options)).await
    {
        Ok(CaptureResult::Captured { image_handle }) => image_handle,
        Ok(CaptureResult::Cancelled) => {
            debug!("Camera cancelled by user");
            return Ok(CaptureOutcome::Cancelled);
        }
        Err(e) if e.is_cancelled() => return Err(e),
        Err(e) => {
            warn!("Camera failed: {}", e);
            notices.notify(Notice::camera_failed());
            return Ok(CaptureOutcome::CameraFailed(e.to_string()));
        }
    };

    let (city, precise_location) = location.tags();
    let record = PhotoRecord::new(image_handle).with_location(city, precise_location);
    info!(
        "Captured {} ({})",
        record.uri,
        record.precise_location.as_deref().unwrap_or("no location")
    );

    let write = store.append(record.clone()).await;
    if write.is_persisted() {
        notices.notify(Notice::photo_saved());
    } else {
        notices.notify(Notice::photo_save_failed());
    }

    Ok(CaptureOutcome::Saved {
        record,
        location,
        write,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use newsdesk_store::MemoryStore;
    use newsdesk_types::Address;

    use super::*;
    use crate::mock::MockPlatform;
    use crate::notice::drain;

    fn new_store() -> (Arc<MemoryStore>, PhotoStore<Arc<MemoryStore>>) {
        let backend = Arc::new(MemoryStore::new());
        (Arc::clone(&backend), PhotoStore::new(backend))
    }

    #[tokio::test]
    async fn test_camera_denied_skips_everything() {
        let platform = MockPlatform::builder().camera_permission(false).build();
        let (backend, mut store) = new_store();
        let notices = NoticeDispatcher::default();
        let mut rx = notices.subscribe();

        let outcome = capture_photo(
            &platform,
            &mut store,
            &notices,
            &CaptureOptions::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert!(matches!(outcome, CaptureOutcome::CameraDenied));
        assert_eq!(platform.permissions.requests(), vec![Capability::Camera]);
        assert_eq!(platform.camera.capture_count(), 0);
        assert_eq!(backend.write_count(), 0);
        assert_eq!(drain(&mut rx), vec![Notice::camera_permission_denied()]);
    }

    #[tokio::test]
    async fn test_passes_capture_options() {
        let platform = MockPlatform::builder().build();
        let (_backend, mut store) = new_store();
        let options = CaptureOptions {
            allows_editing: false,
            aspect: (4, 3),
            quality: 0.5,
        };

        capture_photo(
            &platform,
            &mut store,
            &NoticeDispatcher::default(),
            &options,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(platform.camera.last_options(), Some(options));
    }

    #[tokio::test]
    async fn test_camera_error_aborts_with_notice() {
        let platform = MockPlatform::builder().build();
        platform.camera.set_fails(true);
        let (backend, mut store) = new_store();
        let notices = NoticeDispatcher::default();
        let mut rx = notices.subscribe();

        let outcome = capture_photo(
            &platform,
            &mut store,
            &notices,
            &CaptureOptions::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert!(matches!(outcome, CaptureOutcome::CameraFailed(_)));
        assert!(store.is_empty());
        assert_eq!(backend.write_count(), 0);
        assert_eq!(drain(&mut rx), vec![Notice::camera_failed()]);
    }

    #[tokio::test]
    async fn test_saved_record_carries_lookup() {
        let address = Address::builder().subregion("Kings County").build();
        let platform = MockPlatform::builder()
            .geocode(vec![address.clone()])
            .capture(CaptureResult::captured("file:///p/1.jpg"))
            .build();
        let (_backend, mut store) = new_store();

        let outcome = capture_photo(
            &platform,
            &mut store,
            &NoticeDispatcher::default(),
            &CaptureOptions::default(),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        match outcome {
            CaptureOutcome::Saved {
                record,
                location,
                write,
            } => {
                assert_eq!(record.city.as_deref(), Some("Kings County"));
                // Sub-region is not part of the full address
                assert_eq!(record.precise_location, None);
                assert_eq!(location, LocationLookup::Resolved(address));
                assert!(write.is_persisted());
            }
            other => panic!("expected saved outcome, got {:?}", other),
        }
    }
}
