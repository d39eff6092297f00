//! Capture, geotagging and gallery flows for Newsdesk.
//!
//! This crate drives the user-facing actions of the app against a set of
//! capability providers (permissions, camera, location, media library and
//! URL handling) supplied through the [`Platform`] trait.
//!
//! # Features
//!
//! - **Photo capture**: permission check, best-effort location tag, camera,
//!   then an optimistic write to the [`PhotoStore`](newsdesk_store::PhotoStore)
//! - **Download to gallery**: copy a captured photo into the shared media library
//! - **Notices**: provider failures become user-visible [`Notice`]s instead of errors
//! - **Cancellation**: every provider call can be abandoned through a
//!   [`CancellationToken`](tokio_util::sync::CancellationToken)
//! - **News feed**: sample stories with a simulated fetch delay
//! - **Mocks**: [`MockPlatform`] for tests and demos
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//!
//! use newsdesk_core::{MockPlatform, NoticeDispatcher, capture_photo};
//! use newsdesk_store::{MemoryStore, PhotoStore};
//! use newsdesk_types::CaptureOptions;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> newsdesk_core::Result<()> {
//!     let platform = MockPlatform::new();
//!     let mut store = PhotoStore::new(Arc::new(MemoryStore::new()));
//!     let notices = NoticeDispatcher::default();
//!
//!     let outcome = capture_photo(
//!         &platform,
//!         &mut store,
//!         &notices,
//!         &CaptureOptions::default(),
//!         &CancellationToken::new(),
//!     )
//!     .await?;
//!
//!     if let Some(record) = outcome.record() {
//!         println!("Saved {} at {:?}", record.uri, record.city);
//!     }
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cancel;
pub mod capture;
pub mod error;
pub mod feed;
pub mod gallery;
pub mod live;
pub mod location;
pub mod mock;
pub mod notice;
pub mod traits;
pub mod viewer;

pub use app::{App, LiveOutcome};
pub use cancel::cancellable;
pub use capture::{CaptureOutcome, capture_photo};
pub use error::{Error, Result};
pub use feed::{DEFAULT_FEED_DELAY, NewsFeed, sample_news, share_notice};
pub use gallery::{DownloadOutcome, download_to_gallery};
pub use live::{GoLiveOption, YOUTUBE_URL, open_youtube_live};
pub use location::{LocationLookup, lookup_location};
pub use mock::{MockPlatform, MockPlatformBuilder};
pub use notice::{Notice, NoticeDispatcher, NoticeKind, NoticeReceiver, NoticeSender, drain};
pub use traits::{
    CameraProvider, LocationProvider, MediaLibrary, PermissionProvider, Platform, UrlOpener,
};

// Re-export types for convenience
pub use newsdesk_types::{
    Address, Capability, CaptureOptions, CaptureResult, Coordinates, LocationAccuracy,
    PermissionStatus, PhotoRecord,
};
pub use viewer::{Tab, Viewer};
