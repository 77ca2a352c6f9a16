//! Page arithmetic and page-number navigation.

use url::Url;

/// Page strips with at most this many pages list every page.
const FULL_STRIP_LIMIT: u32 = 7;

/// Number of pages needed for `count` items, never less than one.
#[must_use]
pub const fn total_pages(count: u32, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    let pages = count.div_ceil(page_size);
    if pages == 0 { 1 } else { pages }
}

/// Builds the URL of page `page` on the listing endpoint.
///
/// Any `page` query pair already on `listing` is replaced; other pairs are
/// kept in order.
#[must_use]
pub fn page_url(listing: &Url, page: u32) -> Url {
    let kept: Vec<(String, String)> = listing
        .query_pairs()
        .filter(|(key, _)| key != "page")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = listing.clone();
    url.query_pairs_mut()
        .clear()
        .extend_pairs(kept)
        .append_pair("page", &page.to_string());
    url
}

/// One slot in the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Page(u32),
    /// Skipped pages.
    Ellipsis,
}

/// Page numbers to show around `current` out of `total`.
///
/// Small totals list every page. Larger ones always show the first and last
/// page, a window around the current page (pages 2-4 near the start, the
/// last four near the end) and an ellipsis wherever pages are skipped.
#[must_use]
pub fn page_window(current: u32, total: u32) -> Vec<PageItem> {
    if total <= FULL_STRIP_LIMIT {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = (current + 1).min(total - 1);

    if current <= 3 {
        start = 2;
        end = 4;
    }
    if current >= total - 2 {
        start = total - 3;
        end = total - 1;
    }

    let mut items = vec![PageItem::Page(1)];
    if start > 2 {
        items.push(PageItem::Ellipsis);
    }
    items.extend((start..=end).map(PageItem::Page));
    if end < total - 1 {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::PageItem::{Ellipsis, Page};
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(82, 10), 9);
        assert_eq!(total_pages(80, 10), 8);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(0, 10), 1);
    }

    #[test]
    fn test_page_url_sets_query() {
        let listing = Url::parse("https://swapi.dev/api/people/").unwrap();
        assert_eq!(
            page_url(&listing, 3).as_str(),
            "https://swapi.dev/api/people/?page=3"
        );
    }

    #[test]
    fn test_page_url_replaces_existing_page() {
        let listing = Url::parse("https://swapi.dev/api/people/?format=json&page=2").unwrap();
        assert_eq!(
            page_url(&listing, 5).as_str(),
            "https://swapi.dev/api/people/?format=json&page=5"
        );
    }

    #[test]
    fn test_small_window_lists_all() {
        assert_eq!(page_window(1, 1), vec![Page(1)]);
        assert_eq!(
            page_window(4, 7),
            (1..=7).map(Page).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_window_near_start() {
        assert_eq!(
            page_window(1, 9),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(9)]
        );
        assert_eq!(
            page_window(3, 9),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_window(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_window_near_end() {
        assert_eq!(
            page_window(9, 9),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9)]
        );
        assert_eq!(
            page_window(7, 9),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9)]
        );
    }

    proptest! {
        #[test]
        fn prop_total_pages_covers_count(count in 1u32..100_000) {
            let pages = total_pages(count, 10);
            prop_assert!(pages * 10 >= count);
            prop_assert!((pages - 1) * 10 < count);
        }

        #[test]
        fn prop_window_is_ordered_and_bounded(total in 1u32..500, pick in 0u32..500) {
            let current = pick % total + 1;
            let window = page_window(current, total);
            let pages: Vec<u32> = window
                .iter()
                .filter_map(|item| match item {
                    Page(n) => Some(*n),
                    Ellipsis => None,
                })
                .collect();

            prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(pages.first().copied(), Some(1));
            prop_assert_eq!(pages.last().copied(), Some(total));
            prop_assert!(pages.contains(&current));
            prop_assert!(window.len() <= 9);
        }
    }
}
