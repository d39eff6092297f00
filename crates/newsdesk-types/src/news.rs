//! News feed items.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use time::Duration;

use crate::error::ParseError;

/// Editorial category of a news item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum Category {
    /// Politics and economy.
    Politics,
    /// Technology.
    Technology,
    /// Environment and climate.
    Environment,
    /// Sports.
    Sports,
    /// Anything without a dedicated badge.
    Other,
}

impl Category {
    /// Badge colour as a `#rrggbb` hex string.
    ///
    /// ```
    /// use newsdesk_types::Category;
    ///
    /// assert_eq!(Category::Sports.color(), "#e74c3c");
    /// assert_eq!(Category::Other.color(), "#95a5a6");
    /// ```
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Category::Politics => "#3498db",
            Category::Technology => "#e67e22",
            Category::Environment => "#2ecc71",
            Category::Sports => "#e74c3c",
            Category::Other => "#95a5a6",
        }
    }

    /// Badge colour as an RGB triple.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.color()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Politics => write!(f, "Politics"),
            Category::Technology => write!(f, "Technology"),
            Category::Environment => write!(f, "Environment"),
            Category::Sports => write!(f, "Sports"),
            Category::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for Category {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "politics" => Ok(Category::Politics),
            "technology" | "tech" => Ok(Category::Technology),
            "environment" => Ok(Category::Environment),
            "sports" | "sport" => Ok(Category::Sports),
            "other" => Ok(Category::Other),
            _ => Err(ParseError::UnknownCategory(s.to_string())),
        }
    }
}

/// A single news story shown in the feed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NewsItem {
    /// Stable identifier within the feed.
    pub id: u32,
    /// Headline.
    pub title: String,
    /// Short summary.
    pub description: String,
    /// Cover image URL.
    pub image: String,
    /// Editorial category.
    pub category: Category,
    /// How long ago the story was published.
    #[cfg_attr(feature = "serde", serde(with = "age_seconds"))]
    pub age: Duration,
}

impl NewsItem {
    /// Human-readable publication age, e.g. "2 hours ago".
    ///
    /// ```
    /// use newsdesk_types::{Category, NewsItem};
    /// use time::Duration;
    ///
    /// let item = NewsItem {
    ///     id: 1,
    ///     title: "Title".into(),
    ///     description: String::new(),
    ///     image: String::new(),
    ///     category: Category::Politics,
    ///     age: Duration::hours(2),
    /// };
    /// assert_eq!(item.published(), "2 hours ago");
    /// ```
    #[must_use]
    pub fn published(&self) -> String {
        format_age(self.age)
    }
}

/// Format a duration as a coarse relative age.
pub fn format_age(age: Duration) -> String {
    let (count, unit) = if age.whole_days() > 0 {
        (age.whole_days(), "day")
    } else if age.whole_hours() > 0 {
        (age.whole_hours(), "hour")
    } else if age.whole_minutes() > 0 {
        (age.whole_minutes(), "minute")
    } else {
        return "just now".to_string();
    };

    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

#[cfg(feature = "serde")]
mod age_seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Duration;

    pub fn serialize<S: Serializer>(age: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(age.whole_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        i64::deserialize(deserializer).map(Duration::seconds)
    }
}
