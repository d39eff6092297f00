//! The captured-photo store.
//!
//! [`PhotoStore`] owns the authoritative in-memory list of captured photos
//! and mirrors it to a [`KeyValueStore`] under a single key. Every mutation
//! builds a new list, replaces the old one, and writes the whole list back.
//!
//! Writes are optimistic: the in-memory list always reflects the mutation,
//! and the outcome of the write is reported separately as a [`WriteThrough`].

use newsdesk_types::PhotoRecord;
use tracing::{debug, error, info, warn};

use crate::codec::{decode_records, encode_records};
use crate::error::Error;
use crate::kv::KeyValueStore;

/// Storage key the photo list is persisted under.
pub const PHOTOS_KEY: &str = "capturedImagesArray";

/// Outcome of persisting a mutation.
///
/// The in-memory update has already happened regardless of the variant.
#[derive(Debug)]
#[must_use]
pub enum WriteThrough {
    /// The new list was written to storage.
    Persisted,
    /// The write failed; storage now lags behind memory.
    Failed(Error),
}

impl WriteThrough {
    /// Whether the write succeeded.
    pub fn is_persisted(&self) -> bool {
        matches!(self, WriteThrough::Persisted)
    }

    /// The write error, if any.
    pub fn error(&self) -> Option<&Error> {
        match self {
            WriteThrough::Persisted => None,
            WriteThrough::Failed(e) => Some(e),
        }
    }

    /// Convert into a `Result`.
    pub fn into_result(self) -> crate::Result<()> {
        match self {
            WriteThrough::Persisted => Ok(()),
            WriteThrough::Failed(e) => Err(e),
        }
    }
}

/// New list with `record` in front of `records`.
pub fn prepend(records: &[PhotoRecord], record: PhotoRecord) -> Vec<PhotoRecord> {
    let mut next = Vec::with_capacity(records.len() + 1);
    next.push(record);
    next.extend_from_slice(records);
    next
}

/// New list without any record whose uri equals `uri`.
pub fn without(records: &[PhotoRecord], uri: &str) -> Vec<PhotoRecord> {
    records.iter().filter(|r| r.uri != uri).cloned().collect()
}

/// Ordered, newest-first collection of captured photos backed by key-value
/// storage.
///
/// # Example
///
/// ```
/// use newsdesk_store::{MemoryStore, PhotoStore};
/// use newsdesk_types::PhotoRecord;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let mut store = PhotoStore::new(MemoryStore::new());
/// store.load().await;
///
/// let outcome = store.append(PhotoRecord::new("file:///a.jpg")).await;
/// assert!(outcome.is_persisted());
/// assert_eq!(store.first().map(|r| r.uri.as_str()), Some("file:///a.jpg"));
/// # });
/// ```
#[derive(Debug)]
pub struct PhotoStore<S> {
    storage: S,
    key: String,
    records: Vec<PhotoRecord>,
}

impl<S: KeyValueStore> PhotoStore<S> {
    /// Create an empty store persisting under [`PHOTOS_KEY`].
    ///
    /// Call [`load`](Self::load) to restore previously persisted records.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, PHOTOS_KEY)
    }

    /// Create an empty store persisting under a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            records: Vec::new(),
        }
    }

    /// Restore the list from storage.
    ///
    /// An absent key yields an empty list. A read failure or a value that
    /// does not parse is logged and also yields an empty list. Never writes
    /// back to storage.
    pub async fn load(&mut self) -> &[PhotoRecord] {
        self.records = match self.storage.get(&self.key).await {
            Ok(None) => {
                debug!("No stored photos under '{}'", self.key);
                Vec::new()
            }
            Ok(Some(value)) => match decode_records(&value) {
                Ok(records) => {
                    info!("Loaded {} stored photos", records.len());
                    records
                }
                Err(e) => {
                    warn!("Failed to parse stored photos, starting empty: {}", e);
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("Failed to load photos from storage, starting empty: {}", e);
                Vec::new()
            }
        };
        &self.records
    }

    /// Put `record` at the front of the list and persist the whole list.
    ///
    /// Records sharing a uri are not deduplicated.
    pub async fn append(&mut self, record: PhotoRecord) -> WriteThrough {
        debug!("Appending photo {}", record.uri);
        let next = prepend(&self.records, record);
        self.replace(next, "save image to").await
    }

    /// Remove every record whose uri equals `uri` and persist the whole list.
    ///
    /// Dismissing a uri that is not present leaves the list unchanged and
    /// still persists it.
    pub async fn dismiss(&mut self, uri: &str) -> WriteThrough {
        let next = without(&self.records, uri);
        let removed = self.records.len() - next.len();
        debug!("Dismissing photo {} ({} matching records)", uri, removed);
        self.replace(next, "remove image from").await
    }

    async fn replace(&mut self, next: Vec<PhotoRecord>, action: &str) -> WriteThrough {
        self.records = next;

        let result = match encode_records(&self.records) {
            Ok(value) => self.storage.set(&self.key, &value).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => WriteThrough::Persisted,
            Err(e) => {
                error!("Failed to {} storage: {}", action, e);
                WriteThrough::Failed(e)
            }
        }
    }

    /// The current list, newest first.
    pub fn records(&self) -> &[PhotoRecord] {
        &self.records
    }

    /// The first record with the given uri.
    pub fn get(&self, uri: &str) -> Option<&PhotoRecord> {
        self.records.iter().find(|r| r.uri == uri)
    }

    /// The newest record.
    pub fn first(&self) -> Option<&PhotoRecord> {
        self.records.first()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
