//! The news feed.
//!
//! Stories are static sample data; loading only simulates a fetch delay.

use std::time::Duration;

use tracing::debug;

use newsdesk_types::{Category, NewsItem};

use crate::notice::Notice;

/// Default simulated fetch delay.
pub const DEFAULT_FEED_DELAY: Duration = Duration::from_secs(1);

/// The built-in sample stories, newest first.
pub fn sample_news() -> Vec<NewsItem> {
    vec![
        NewsItem {
            id: 1,
            title: "Breaking: Major Economic Summit Begins Today".to_string(),
            description: "World leaders gather to discuss global economic policies and trade agreements."
                .to_string(),
            image: "https://placehold.co/600x400/3498db/ffffff?text=Economy".to_string(),
            category: Category::Politics,
            age: time::Duration::hours(2),
        },
        NewsItem {
            id: 2,
            title: "Tech Giant Announces Revolutionary AI Platform".to_string(),
            description: "New artificial intelligence platform promises to transform various industries."
                .to_string(),
            image: "https://placehold.co/600x400/e67e22/ffffff?text=AI".to_string(),
            category: Category::Technology,
            age: time::Duration::hours(4),
        },
        NewsItem {
            id: 3,
            title: "Climate Change Conference Reaches Historic Agreement".to_string(),
            description: "Nations commit to ambitious carbon reduction targets for the next decade."
                .to_string(),
            image: "https://placehold.co/600x400/2ecc71/ffffff?text=Climate".to_string(),
            category: Category::Environment,
            age: time::Duration::hours(6),
        },
        NewsItem {
            id: 4,
            title: "Sports: Championship Finals This Weekend".to_string(),
            description: "Two powerhouse teams prepare for the ultimate showdown in this year's finals."
                .to_string(),
            image: "https://placehold.co/600x400/e74c3c/ffffff?text=Sports".to_string(),
            category: Category::Sports,
            age: time::Duration::hours(8),
        },
    ]
}

/// Feed state: the loaded stories and whether a load is in flight.
#[derive(Debug, Clone)]
pub struct NewsFeed {
    items: Vec<NewsItem>,
    loading: bool,
    delay: Duration,
}

impl NewsFeed {
    /// Create an empty feed that simulates `delay` per load.
    pub fn new(delay: Duration) -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            delay,
        }
    }

    /// Load the sample stories after the simulated delay.
    pub async fn load(&mut self) -> &[NewsItem] {
        self.loading = true;
        debug!("Loading news feed ({:?} simulated delay)", self.delay);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.items = sample_news();
        self.loading = false;
        &self.items
    }

    /// Reload the feed.
    pub async fn refresh(&mut self) -> &[NewsItem] {
        self.load().await
    }

    /// Loaded stories.
    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Look up a story by id.
    pub fn get(&self, id: u32) -> Option<&NewsItem> {
        self.items.iter().find(|item| item.id == id)
    }
}

impl Default for NewsFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_DELAY)
    }
}

/// Notice announcing that a story is being shared.
pub fn share_notice(item: &NewsItem) -> Notice {
    Notice::share(&item.title)
}
