//! Local persistence for Newsdesk.
//!
//! This crate provides device-local key-value storage and the captured-photo
//! store built on top of it.
//!
//! # Features
//!
//! - [`KeyValueStore`] trait with SQLite ([`SqliteStore`]) and in-memory
//!   ([`MemoryStore`]) backends
//! - [`PhotoStore`]: newest-first list of captured photos, persisted as one
//!   JSON array under a single key
//! - Optimistic writes: every mutation reports its [`WriteThrough`] outcome
//!   separately from the in-memory update
//!
//! # Example
//!
//! ```no_run
//! use newsdesk_store::{PhotoStore, SqliteStore};
//!
//! # async fn example() -> newsdesk_store::Result<()> {
//! let mut photos = PhotoStore::new(SqliteStore::open_default()?);
//! for record in photos.load().await {
//!     println!("{}", record.uri);
//! }
//! # Ok(())
//! # }
//! ```

mod codec;
mod error;
mod kv;
mod photos;
mod schema;

pub use codec::{decode_records, encode_records};
pub use error::{Error, Result};
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
pub use photos::{PHOTOS_KEY, PhotoStore, WriteThrough, prepend, without};

/// Default database path following platform conventions.
///
/// - Linux: `~/.local/share/newsdesk/data.db`
/// - macOS: `~/Library/Application Support/newsdesk/data.db`
/// - Windows: `C:\Users\<user>\AppData\Local\newsdesk\data.db`
pub fn default_db_path() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("newsdesk")
        .join("data.db")
}

/// Database path inside a custom data directory.
pub fn db_path_in(data_dir: &std::path::Path) -> std::path::PathBuf {
    data_dir.join("data.db")
}
