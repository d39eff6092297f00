//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use owo_colors::OwoColorize;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use newsdesk_core::{App, Notice, NoticeKind, NoticeReceiver, drain};
use newsdesk_store::{SqliteStore, db_path_in};

use crate::config::Config;
use crate::platform::DesktopPlatform;

/// The app wired to desktop providers and on-disk storage.
pub type DesktopApp = App<SqliteStore, DesktopPlatform>;

/// Settings every command needs.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub data_dir: PathBuf,
    pub quiet: bool,
}

impl Context {
    pub fn new(config: Config, data_dir: Option<&Path>, quiet: bool) -> Self {
        let data_dir = config.resolve_data_dir(data_dir);
        Self {
            config,
            data_dir,
            quiet,
        }
    }

    /// Open the database and build the app. Nothing is loaded yet.
    pub fn open_app(&self, image: Option<PathBuf>) -> Result<DesktopApp> {
        let db_path = db_path_in(&self.data_dir);
        let storage = SqliteStore::open(&db_path)
            .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
        debug!("Using database {}", db_path.display());

        let platform = DesktopPlatform::new(&self.config, &self.data_dir).with_image(image);
        Ok(App::new(storage, platform).with_feed_delay(self.config.feed_delay()))
    }
}

/// A token cancelled when the user presses Ctrl-C.
pub fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let child = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            child.cancel();
        }
    });
    token
}

/// Render a notice as one line.
pub fn format_notice(notice: &Notice) -> String {
    let title = match notice.kind {
        NoticeKind::Success => format!("{}", notice.title.green()),
        NoticeKind::Warning => format!("{}", notice.title.yellow()),
        NoticeKind::Error => format!("{}", notice.title.red()),
        NoticeKind::Info => format!("{}", notice.title.cyan()),
    };
    format!("{}: {}", title, notice.message)
}

/// Print buffered notices to stderr. Quiet mode keeps warnings and errors.
pub fn print_notices(receiver: &mut NoticeReceiver, quiet: bool) {
    for notice in drain(receiver) {
        if quiet && matches!(notice.kind, NoticeKind::Info | NoticeKind::Success) {
            continue;
        }
        eprintln!("{}", format_notice(&notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_notice_keeps_text() {
        let line = format_notice(&Notice::download_failed());
        assert!(line.contains("Error"));
        assert!(line.ends_with(": Failed to download image."));
    }

    #[test]
    fn test_context_resolves_data_dir() {
        let ctx = Context::new(Config::default(), Some(Path::new("/tmp/nd")), false);
        assert_eq!(ctx.data_dir, PathBuf::from("/tmp/nd"));
    }

    #[tokio::test]
    async fn test_open_app_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::new(Config::default(), Some(dir.path()), true);
        let mut app = ctx.open_app(None).unwrap();
        assert!(app.load_photos().await.is_empty());
        assert!(db_path_in(dir.path()).exists());
    }
}
