//! Feed command implementation.

use std::fmt::Write as _;

use anyhow::{Context as _, Result};
use newsdesk_core::NewsFeed;
use newsdesk_types::NewsItem;

use crate::cli::OutputFormat;
use crate::util::Context;

/// Execute the feed command.
pub async fn cmd_feed(ctx: &Context, format: OutputFormat) -> Result<()> {
    let mut feed = NewsFeed::new(ctx.config.feed_delay());
    let items = feed.load().await;

    let content = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(items).context("Failed to serialize feed")? + "\n"
        }
        OutputFormat::Text => format_feed_text(items),
    };
    print!("{}", content);
    Ok(())
}

/// Render stories as text, one block per story.
pub fn format_feed_text(items: &[NewsItem]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(out, "[{}] {}", item.category, item.title);
        let _ = writeln!(out, "  {}", item.description);
        let _ = writeln!(out, "  {} ({})", item.published(), item.category.color());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use newsdesk_core::sample_news;

    use super::*;

    #[test]
    fn test_format_feed_text() {
        let text = format_feed_text(&sample_news());
        assert!(text.starts_with("[Politics] Breaking: Major Economic Summit Begins Today\n"));
        assert!(text.contains("  2 hours ago (#3498db)"));
        assert_eq!(text.matches('[').count(), 4);
    }
}
