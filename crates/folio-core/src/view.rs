// Rust guideline compliant 2026-10-18

//! Filter and sort engine.
//!
//! Derives the filtered view from the canonical content collection: items
//! matching the active filter, newest first.

use crate::models::{ContentItem, Filter};
use rayon::prelude::*;

/// Collections at or above this size are filtered in parallel.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Filters `content` by `filter` and sorts the result newest-first.
///
/// The sort is stable, so items sharing a publication date keep their
/// canonical order. Items without a usable date carry timestamp `0` and
/// therefore sink to the end.
///
/// # Arguments
///
/// * `content` - Canonical content collection
/// * `filter` - Active filter
///
/// # Returns
///
/// A freshly derived view; `content` is never modified.
pub fn filter_and_sort(content: &[ContentItem], filter: Filter) -> Vec<ContentItem> {
    let mut view: Vec<ContentItem> = if content.len() >= PARALLEL_THRESHOLD {
        content
            .par_iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    } else {
        content
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    };

    view.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate_content;
    use serde_json::json;

    fn sample_content() -> Vec<ContentItem> {
        validate_content(&[
            json!({ "id": "old", "title": "Old", "type": "blog", "publicationDate": "2023-01-01", "description": "d" }),
            json!({ "id": "undated", "title": "Undated", "type": "talk", "description": "d" }),
            json!({ "id": "new", "title": "New", "type": "talk", "publicationDate": "2024-06-01", "description": "d" }),
            json!({ "id": "garbled", "title": "Garbled", "type": "blog", "publicationDate": "someday", "description": "d" }),
        ])
        .expect("sample content should validate")
    }

    fn ids(items: &[ContentItem]) -> Vec<&str> {
        items.iter().map(|item| item.id()).collect()
    }

    #[test]
    fn test_all_sorted_newest_first_with_undated_last() {
        let view = filter_and_sort(&sample_content(), Filter::All);
        assert_eq!(ids(&view), vec!["new", "old", "undated", "garbled"]);
    }

    #[test]
    fn test_type_filter_selects_matching_only() {
        let view = filter_and_sort(&sample_content(), Filter::Talk);
        assert_eq!(ids(&view), vec!["new", "undated"]);

        let view = filter_and_sort(&sample_content(), Filter::Article);
        assert!(view.is_empty());
    }

    #[test]
    fn test_partial_dates_sort_by_first_day() {
        let content = validate_content(&[
            json!({ "id": "old", "title": "Old", "type": "blog", "publicationDate": "1999-05-01", "description": "d" }),
            json!({ "id": "year", "title": "Year", "type": "blog", "publicationDate": "2024", "description": "d" }),
            json!({ "id": "month", "title": "Month", "type": "blog", "publicationDate": "2024-06", "description": "d" }),
            json!({ "id": "millis", "title": "Millis", "type": "blog", "publicationDate": 1_000, "description": "d" }),
        ])
        .expect("dated content should validate");

        let view = filter_and_sort(&content, Filter::All);
        assert_eq!(ids(&view), vec!["month", "year", "old", "millis"]);
        assert_eq!(view[1].published_at(), 1_704_067_200_000);
        assert_eq!(view[0].published_at(), 1_717_200_000_000);
    }

    #[test]
    fn test_large_collection_uses_same_ordering() {
        let values: Vec<_> = (0..PARALLEL_THRESHOLD + 10)
            .map(|i| {
                json!({
                    "id": format!("item-{i}"),
                    "title": "T",
                    "type": if i % 2 == 0 { "blog" } else { "article" },
                    "publicationDate": i as i64 + 1,
                    "description": "d",
                })
            })
            .collect();
        let content = validate_content(&values).expect("generated content should validate");

        let view = filter_and_sort(&content, Filter::Blog);
        assert_eq!(view.len(), (PARALLEL_THRESHOLD + 10) / 2);
        assert!(view
            .windows(2)
            .all(|pair| pair[0].published_at() >= pair[1].published_at()));
    }
}
