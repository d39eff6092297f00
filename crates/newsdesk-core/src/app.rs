//! Application context tying the store, the providers and UI state together.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use newsdesk_store::{KeyValueStore, PhotoStore, WriteThrough};
use newsdesk_types::{CaptureOptions, NewsItem, PhotoRecord};

use crate::capture::{CaptureOutcome, capture_photo};
use crate::error::Result;
use crate::feed::{NewsFeed, share_notice};
use crate::gallery::{DownloadOutcome, download_to_gallery};
use crate::live::{GoLiveOption, open_youtube_live};
use crate::notice::{Notice, NoticeDispatcher, NoticeReceiver};
use crate::traits::Platform;
use crate::viewer::{Tab, Viewer};

/// What a go-live choice led to.
#[derive(Debug)]
pub enum LiveOutcome {
    /// The sheet was dismissed.
    Dismissed,
    /// The live-streaming site was offered; `opened` is false when no handler exists.
    YouTube {
        /// Whether the URL was handed off.
        opened: bool,
    },
    /// The capture flow ran.
    Capture(CaptureOutcome),
}

/// One running instance of the app.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use newsdesk_core::{App, MockPlatform};
/// use newsdesk_store::MemoryStore;
/// use tokio_util::sync::CancellationToken;
///
/// #[tokio::main]
/// async fn main() {
///     let mut app = App::new(Arc::new(MemoryStore::new()), MockPlatform::new())
///         .with_feed_delay(Duration::ZERO);
///     app.start().await;
///     assert_eq!(app.feed().items().len(), 4);
///
///     let outcome = app.capture(&CancellationToken::new()).await.unwrap();
///     assert!(outcome.is_saved());
///     assert_eq!(app.photos().len(), 1);
/// }
/// ```
pub struct App<S, P> {
    store: PhotoStore<S>,
    platform: P,
    notices: NoticeDispatcher,
    feed: NewsFeed,
    viewer: Viewer,
    active_tab: Tab,
    capture_options: CaptureOptions,
}

impl<S, P> std::fmt::Debug for App<S, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("active_tab", &self.active_tab)
            .field("viewer", &self.viewer)
            .finish_non_exhaustive()
    }
}

impl<S: KeyValueStore, P: Platform> App<S, P> {
    /// Create an app over `storage` and `platform`. Nothing is loaded until
    /// [`App::start`].
    pub fn new(storage: S, platform: P) -> Self {
        Self {
            store: PhotoStore::new(storage),
            platform,
            notices: NoticeDispatcher::default(),
            feed: NewsFeed::default(),
            viewer: Viewer::default(),
            active_tab: Tab::default(),
            capture_options: CaptureOptions::default(),
        }
    }

    /// Use `delay` for simulated feed loads.
    pub fn with_feed_delay(mut self, delay: Duration) -> Self {
        self.feed = NewsFeed::new(delay);
        self
    }

    /// Use `options` for every capture.
    pub fn with_capture_options(mut self, options: CaptureOptions) -> Self {
        self.capture_options = options;
        self
    }

    /// Load persisted photos, then the news feed.
    pub async fn start(&mut self) {
        let photos = self.load_photos().await.len();
        let stories = self.feed.load().await.len();
        info!("Started with {} photos and {} stories", photos, stories);
    }

    /// Load persisted photos only.
    pub async fn load_photos(&mut self) -> &[PhotoRecord] {
        self.store.load().await
    }

    /// Subscribe to notices.
    pub fn subscribe(&self) -> NoticeReceiver {
        self.notices.subscribe()
    }

    /// Capture a geotagged photo.
    pub async fn capture(&mut self, token: &CancellationToken) -> Result<CaptureOutcome> {
        capture_photo(
            &self.platform,
            &mut self.store,
            &self.notices,
            &self.capture_options,
            token,
        )
        .await
    }

    /// Remove every record with `uri`, closing the viewer if it shows it.
    pub async fn dismiss(&mut self, uri: &str) -> WriteThrough {
        if self.viewer.is_showing(uri) {
            self.viewer.close();
        }
        self.store.dismiss(uri).await
    }

    /// Copy `image_handle` into the device gallery.
    pub async fn download(
        &self,
        image_handle: &str,
        token: &CancellationToken,
    ) -> Result<DownloadOutcome> {
        download_to_gallery(&self.platform, image_handle, &self.notices, token).await
    }

    /// Download the photo shown in the viewer. `None` when nothing is shown.
    pub async fn download_selected(
        &self,
        token: &CancellationToken,
    ) -> Result<Option<DownloadOutcome>> {
        let Some(record) = self.viewer.selected() else {
            debug!("Nothing selected to download");
            return Ok(None);
        };
        self.download(&record.uri, token).await.map(Some)
    }

    /// Act on a go-live choice.
    pub async fn go_live(
        &mut self,
        option: GoLiveOption,
        token: &CancellationToken,
    ) -> Result<LiveOutcome> {
        match option {
            GoLiveOption::Cancel => Ok(LiveOutcome::Dismissed),
            GoLiveOption::YouTubeLive => {
                let opened = open_youtube_live(&self.platform, &self.notices, token).await?;
                Ok(LiveOutcome::YouTube { opened })
            }
            GoLiveOption::OpenCamera => self.capture(token).await.map(LiveOutcome::Capture),
        }
    }

    /// Announce sharing the story with `id`. Returns the notice, or `None`
    /// for an unknown id.
    pub fn share(&self, id: u32) -> Option<Notice> {
        let notice = share_notice(self.feed.get(id)?);
        self.notices.notify(notice.clone());
        Some(notice)
    }

    /// Reload the news feed.
    pub async fn refresh_feed(&mut self) -> &[NewsItem] {
        self.feed.refresh().await
    }

    /// Show the first photo with `uri` full screen. Returns whether it exists.
    pub fn open_photo(&mut self, uri: &str) -> bool {
        match self.store.get(uri).cloned() {
            Some(record) => {
                self.viewer.open(record);
                true
            }
            None => false,
        }
    }

    /// Hide the full-screen viewer.
    pub fn close_viewer(&mut self) {
        self.viewer.close();
    }

    /// Switch tabs.
    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// The active tab.
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Captured photos, newest first.
    pub fn photos(&self) -> &[PhotoRecord] {
        self.store.records()
    }

    /// The photo store.
    pub fn store(&self) -> &PhotoStore<S> {
        &self.store
    }

    /// The news feed.
    pub fn feed(&self) -> &NewsFeed {
        &self.feed
    }

    /// The viewer.
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// The capability providers.
    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// The notice dispatcher.
    pub fn notices(&self) -> &NoticeDispatcher {
        &self.notices
    }
}
