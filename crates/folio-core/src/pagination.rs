// Rust guideline compliant 2026-10-18

//! Pagination calculator.

use serde::Serialize;

/// Fixed number of content items per page.
pub const ITEMS_PER_PAGE: usize = 6;

/// Current position within the paginated view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// 1-based page number.
    pub current_page: usize,
    /// Number of pages in the filtered view; `0` when it is empty.
    pub total_pages: usize,
}

/// Returns `ceil(len / ITEMS_PER_PAGE)`.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(ITEMS_PER_PAGE)
}

/// Clamps a requested page into `[1, max(1, total_pages)]`.
pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let max = total_pages.max(1) as i64;
    requested.clamp(1, max) as usize
}

/// Returns the items on the given 1-based page, or an empty slice when the
/// page lies outside the view.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(ITEMS_PER_PAGE);
    if page == 0 || start >= items.len() {
        return &[];
    }
    let end = (start + ITEMS_PER_PAGE).min(items.len());
    &items[start..end]
}
