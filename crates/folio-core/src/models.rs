// Rust guideline compliant 2026-10-18

//! Core data models for Folio.
//!
//! Records are only ever produced by [`crate::validate`]; their fields are
//! crate-private so nothing downstream can assemble an unchecked value.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of thought-leadership content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Conference or meetup talk.
    Talk,
    /// Blog post.
    Blog,
    /// Long-form whitepaper.
    Whitepaper,
    /// Published article.
    Article,
}

impl ContentType {
    /// Parses the wire name of a content type.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "talk" => Some(ContentType::Talk),
            "blog" => Some(ContentType::Blog),
            "whitepaper" => Some(ContentType::Whitepaper),
            "article" => Some(ContentType::Article),
            _ => None,
        }
    }

    /// Returns the wire name of the content type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Talk => "talk",
            ContentType::Blog => "blog",
            ContentType::Whitepaper => "whitepaper",
            ContentType::Article => "article",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active content filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Every content item.
    #[default]
    All,
    /// Talks only.
    Talk,
    /// Blog posts only.
    Blog,
    /// Whitepapers only.
    Whitepaper,
    /// Articles only.
    Article,
}

impl Filter {
    /// Every filter value, `all` first.
    pub const ALL: [Filter; 5] = [
        Filter::All,
        Filter::Talk,
        Filter::Blog,
        Filter::Whitepaper,
        Filter::Article,
    ];

    /// Parses an exact filter name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Filter::All),
            other => ContentType::parse(other).map(Filter::from),
        }
    }

    /// Parses a filter name, falling back to [`Filter::All`] for anything unknown.
    pub fn coerce(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    /// Returns the content type this filter selects, or `None` for `all`.
    pub fn content_type(&self) -> Option<ContentType> {
        match self {
            Filter::All => None,
            Filter::Talk => Some(ContentType::Talk),
            Filter::Blog => Some(ContentType::Blog),
            Filter::Whitepaper => Some(ContentType::Whitepaper),
            Filter::Article => Some(ContentType::Article),
        }
    }

    /// Returns true if the item passes this filter.
    pub fn matches(&self, item: &ContentItem) -> bool {
        match self.content_type() {
            None => true,
            Some(content_type) => item.content_type == content_type,
        }
    }

    /// Returns the wire name of the filter.
    pub fn as_str(&self) -> &'static str {
        match self.content_type() {
            None => "all",
            Some(content_type) => content_type.as_str(),
        }
    }
}

impl From<ContentType> for Filter {
    fn from(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Talk => Filter::Talk,
            ContentType::Blog => Filter::Blog,
            ContentType::Whitepaper => Filter::Whitepaper,
            ContentType::Article => Filter::Article,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile picture with a text fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileImage {
    pub(crate) src: String,
    pub(crate) alt: String,
    pub(crate) fallback_initials: String,
}

impl ProfileImage {
    /// Image location.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Alternative text; empty when none was supplied.
    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Initials shown when the image cannot be loaded.
    pub fn fallback_initials(&self) -> &str {
        &self.fallback_initials
    }
}

/// The site owner's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub(crate) name: String,
    pub(crate) bio: String,
    pub(crate) profile_image: ProfileImage,
    pub(crate) linkedin_url: String,
}

impl Profile {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short biography.
    pub fn bio(&self) -> &str {
        &self.bio
    }

    /// Profile picture.
    pub fn profile_image(&self) -> &ProfileImage {
        &self.profile_image
    }

    /// LinkedIn profile URL.
    pub fn linkedin_url(&self) -> &str {
        &self.linkedin_url
    }
}

/// A single achievement shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) order: i64,
}

impl Achievement {
    /// Unique identifier within the collection.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Headline.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Longer description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Display position; passed through untouched by the store.
    pub fn order(&self) -> i64 {
        self.order
    }
}

/// A thought-leadership content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub(crate) id: String,
    pub(crate) title: String,
    #[serde(rename = "type")]
    pub(crate) content_type: ContentType,
    pub(crate) publication_date: Option<String>,
    #[serde(skip)]
    pub(crate) published_at: i64,
    pub(crate) description: String,
    pub(crate) external_link: Option<String>,
    pub(crate) featured: bool,
}

impl ContentItem {
    /// Unique identifier within the collection.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Headline.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Kind of content.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Publication date exactly as supplied.
    pub fn publication_date(&self) -> Option<&str> {
        self.publication_date.as_deref()
    }

    /// Publication date as Unix milliseconds; `0` when missing or unparseable.
    pub fn published_at(&self) -> i64 {
        self.published_at
    }

    /// Summary text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Link to the full piece, if hosted elsewhere.
    pub fn external_link(&self) -> Option<&str> {
        self.external_link.as_deref()
    }

    /// Whether the item is highlighted.
    pub fn featured(&self) -> bool {
        self.featured
    }
}

/// Display-relevant projection of a [`ContentItem`] kept in the session cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedItem {
    /// Item identifier.
    pub id: String,
    /// Headline.
    pub title: String,
    /// Kind of content.
    #[serde(rename = "type")]
    pub content_type: ContentType,
    /// Publication date as supplied.
    pub publication_date: Option<String>,
    /// Summary text.
    pub description: String,
    /// Link to the full piece.
    pub external_link: Option<String>,
}

impl From<&ContentItem> for CachedItem {
    fn from(item: &ContentItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            content_type: item.content_type,
            publication_date: item.publication_date.clone(),
            description: item.description.clone(),
            external_link: item.external_link.clone(),
        }
    }
}

/// Coerces a date-like string to Unix milliseconds.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DD`, `YYYY-MM`
/// and bare years of up to four digits. Date-only forms resolve to midnight
/// UTC on the first day they name. Everything else, including dates before
/// the epoch, maps to `0` so it sorts last.
pub fn coerce_timestamp(value: &str) -> i64 {
    let value = value.trim();
    let millis = if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        Some(dt.timestamp_millis())
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        Some(dt.and_utc().timestamp_millis())
    } else if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        midnight_millis(date)
    } else if let Ok(date) = NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d") {
        midnight_millis(date)
    } else if is_bare_year(value) {
        value
            .parse::<i32>()
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
            .and_then(midnight_millis)
    } else {
        None
    };

    millis.filter(|ms| *ms > 0).unwrap_or(0)
}

/// Coerces a numeric publication date, taken as Unix milliseconds.
pub fn coerce_millis(value: &serde_json::Number) -> i64 {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|ms| ms as i64))
        .filter(|ms| *ms > 0)
        .unwrap_or(0)
}

fn midnight_millis(date: NaiveDate) -> Option<i64> {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
}

fn is_bare_year(value: &str) -> bool {
    (1..=4).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_coerce_unknown_is_all() {
        assert_eq!(Filter::coerce("bogus"), Filter::All);
        assert_eq!(Filter::coerce(""), Filter::All);
        assert_eq!(Filter::coerce("Blog"), Filter::All);
        assert_eq!(Filter::coerce("blog"), Filter::Blog);
    }

    #[test]
    fn test_filter_names_round_trip() {
        for filter in Filter::ALL {
            assert_eq!(Filter::parse(filter.as_str()), Some(filter));
        }
    }

    #[test]
    fn test_coerce_timestamp_formats() {
        assert_eq!(coerce_timestamp("1970-01-02"), 86_400_000);
        assert_eq!(coerce_timestamp("1970-01-01T00:00:01Z"), 1_000);
        assert_eq!(coerce_timestamp("1970-01-01T00:00:02"), 2_000);
        assert_eq!(coerce_timestamp("1971"), 31_536_000_000);
        assert_eq!(coerce_timestamp("1970-02"), 2_678_400_000);
    }

    #[test]
    fn test_numeric_strings_are_not_millis() {
        assert_eq!(coerce_timestamp("1234"), 0);
        assert_eq!(coerce_timestamp("1700000000000"), 0);
    }

    #[test]
    fn test_coerce_millis() {
        assert_eq!(coerce_millis(&serde_json::Number::from(1_234)), 1_234);
        assert_eq!(coerce_millis(&serde_json::Number::from(-5)), 0);
    }

    #[test]
    fn test_coerce_timestamp_invalid_is_epoch() {
        assert_eq!(coerce_timestamp("not a date"), 0);
        assert_eq!(coerce_timestamp(""), 0);
        assert_eq!(coerce_timestamp("1969-12-31"), 0);
    }
}
