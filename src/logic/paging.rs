//! Page-count math and visible-slice derivation for the filtered list.

/// Number of posts shown per page.
pub const PAGE_SIZE: usize = 6;

/// What: Derive the total page count for a filtered list.
///
/// Inputs:
/// - `filtered_count`: Number of posts surviving the active filters.
///
/// Output:
/// - `max(1, ceil(filtered_count / PAGE_SIZE))`; an empty list still has
///   one (empty) page so the page indicator never reads "0 of 0".
#[must_use]
pub const fn total_pages(filtered_count: usize) -> usize {
    let pages = filtered_count.div_ceil(PAGE_SIZE);
    if pages == 0 { 1 } else { pages }
}

/// What: Clamp a requested page into the valid range.
///
/// Inputs:
/// - `page`: Requested 1-based page (possibly stale after a filter change).
/// - `total`: Total pages as computed by [`total_pages`].
///
/// Output:
/// - A page in `[1, total]`; out-of-range requests are pulled back rather
///   than surfaced as an empty page.
#[must_use]
pub const fn clamp_page(page: usize, total: usize) -> usize {
    if page < 1 {
        1
    } else if page > total {
        total
    } else {
        page
    }
}

/// What: Select the visible window of the filtered list.
///
/// Inputs:
/// - `filtered`: The ordered, filtered list.
/// - `page`: A page already clamped into range.
///
/// Output:
/// - The slice `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)`, shorter on the last
///   page.
#[must_use]
pub fn page_slice<T>(filtered: &[T], page: usize) -> &[T] {
    let start = (page.saturating_sub(1)) * PAGE_SIZE;
    if start >= filtered.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(filtered.len());
    &filtered[start..end]
}
