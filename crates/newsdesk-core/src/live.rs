//! The "Go Live" action sheet.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::cancel::cancellable;
use crate::error::Result;
use crate::notice::{Notice, NoticeDispatcher};
use crate::traits::Platform;

/// Live-streaming site opened by [`GoLiveOption::YouTubeLive`].
pub const YOUTUBE_URL: &str = "https://www.youtube.com";

/// Choices offered by the go-live sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoLiveOption {
    /// Close the sheet.
    Cancel,
    /// Stream through YouTube.
    YouTubeLive,
    /// Capture a photo instead.
    OpenCamera,
}

impl GoLiveOption {
    /// All options in sheet order.
    pub const ALL: [GoLiveOption; 3] = [
        GoLiveOption::Cancel,
        GoLiveOption::YouTubeLive,
        GoLiveOption::OpenCamera,
    ];
}

impl fmt::Display for GoLiveOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoLiveOption::Cancel => write!(f, "Cancel"),
            GoLiveOption::YouTubeLive => write!(f, "YouTube Live"),
            GoLiveOption::OpenCamera => write!(f, "Open Camera"),
        }
    }
}

impl FromStr for GoLiveOption {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cancel" => Ok(GoLiveOption::Cancel),
            "youtube" | "youtube-live" | "youtube_live" => Ok(GoLiveOption::YouTubeLive),
            "camera" | "open-camera" | "open_camera" => Ok(GoLiveOption::OpenCamera),
            _ => Err(format!(
                "Invalid option '{}'. Valid values: cancel, youtube, camera",
                s
            )),
        }
    }
}

/// Open the live-streaming site, or tell the user it is not installed.
///
/// Returns whether the site was opened.
pub async fn open_youtube_live<P: Platform + ?Sized>(
    platform: &P,
    notices: &NoticeDispatcher,
    token: &CancellationToken,
) -> Result<bool> {
    let opener = platform.url_opener();

    let supported = match cancellable(token, "url check", opener.can_open(YOUTUBE_URL)).await {
        Ok(supported) => supported,
        Err(e) if e.is_cancelled() => return Err(e),
        Err(e) => {
            warn!("Could not check {}: {}", YOUTUBE_URL, e);
            false
        }
    };

    if !supported {
        notices.notify(Notice::youtube_not_found());
        return Ok(false);
    }

    match cancellable(token, "url open", opener.open(YOUTUBE_URL)).await {
        Ok(()) => {
            info!("Opened {}", YOUTUBE_URL);
            Ok(true)
        }
        Err(e) if e.is_cancelled() => Err(e),
        Err(e) => {
            warn!("Failed to open {}: {}", YOUTUBE_URL, e);
            notices.notify(Notice::youtube_not_found());
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockPlatform;
    use crate::notice::drain;

    #[test]
    fn test_option_parsing() {
        assert_eq!("youtube".parse::<GoLiveOption>(), Ok(GoLiveOption::YouTubeLive));
        assert_eq!("Camera".parse::<GoLiveOption>(), Ok(GoLiveOption::OpenCamera));
        assert!("twitch".parse::<GoLiveOption>().is_err());
        assert_eq!(GoLiveOption::ALL[1].to_string(), "YouTube Live");
    }

    #[tokio::test]
    async fn test_opens_when_installed() {
        let platform = MockPlatform::builder().url_handler_installed(true).build();
        let notices = NoticeDispatcher::default();

        let opened = open_youtube_live(&platform, &notices, &CancellationToken::new())
            .await
            .unwrap();

        assert!(opened);
        assert_eq!(platform.urls.opened(), vec![YOUTUBE_URL.to_string()]);
    }

    #[tokio::test]
    async fn test_not_installed_notifies() {
        let platform = MockPlatform::builder().url_handler_installed(false).build();
        let notices = NoticeDispatcher::default();
        let mut rx = notices.subscribe();

        let opened = open_youtube_live(&platform, &notices, &CancellationToken::new())
            .await
            .unwrap();

        assert!(!opened);
        assert!(platform.urls.opened().is_empty());
        assert_eq!(drain(&mut rx), vec![Notice::youtube_not_found()]);
    }
}
