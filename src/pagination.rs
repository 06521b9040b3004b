//! Page slicing for list views.
//!
//! [`paginate`] is a pure function: it never fails and always reports a valid
//! page. Requests beyond the last page clamp to the last page, page `0` clamps
//! to the first, and an empty input still has exactly one (empty) page.
//!
//! ```
//! use edudesk::pagination::paginate;
//!
//! let items: Vec<u32> = (1..=60).collect();
//! let page = paginate(&items, 9, 25);
//! assert_eq!(page.current_page, 3);
//! assert_eq!(page.data, (51..=60).collect::<Vec<_>>());
//! assert_eq!((page.start_index, page.end_index), (51, 60));
//! ```

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// One page of an ordered result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// 1-based page number, clamped into `1..=total_pages`.
    pub current_page: usize,
    /// Never less than 1.
    pub total_pages: usize,
    pub total_items: usize,
    /// 1-based position of the first item on this page.
    pub start_index: usize,
    /// 1-based position of the last item on this page; 0 when there are no items.
    pub end_index: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Number of pages needed for `total_items`; at least 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// Slice `items` into the requested page.
///
/// A `page_size` of 0 is treated as 1.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let current_page = page.clamp(1, total_pages);

    let offset = (current_page - 1) * page_size;
    let end = (offset + page_size).min(total_items);

    Page {
        data: items[offset..end].to_vec(),
        current_page,
        total_pages,
        total_items,
        start_index: offset + 1,
        end_index: end,
    }
}

/// Stateful page navigation over a changing result set.
///
/// The cursor remembers the requested page and page size; every read clamps
/// against the item count at that moment, so a shrinking result set never
/// leaves the cursor on a page that no longer exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
    page_size: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        PageCursor {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageCursor {
    /// Cursor on page 1 with the given page size.
    pub fn new(page_size: usize) -> Self {
        PageCursor {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Start on a specific page.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Requested page; may exceed the current page count until clamped.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    fn effective_page(&self, total_items: usize) -> usize {
        self.page.clamp(1, total_pages(total_items, self.page_size))
    }

    /// The current page of `items`.
    pub fn page_of<T: Clone>(&self, items: &[T]) -> Page<T> {
        paginate(items, self.page, self.page_size)
    }

    /// Jump to `page`, clamped to the pages available for `total_items`.
    pub fn go_to(&mut self, page: usize, total_items: usize) {
        self.page = page.clamp(1, total_pages(total_items, self.page_size));
    }

    /// Advance one page. Returns `false` if already on the last page.
    pub fn next(&mut self, total_items: usize) -> bool {
        let current = self.effective_page(total_items);
        if current < total_pages(total_items, self.page_size) {
            self.page = current + 1;
            true
        } else {
            self.page = current;
            false
        }
    }

    /// Go back one page. Returns `false` if already on the first page.
    pub fn previous(&mut self, total_items: usize) -> bool {
        let current = self.effective_page(total_items);
        if current > 1 {
            self.page = current - 1;
            true
        } else {
            self.page = current;
            false
        }
    }

    pub fn can_go_next(&self, total_items: usize) -> bool {
        self.effective_page(total_items) < total_pages(total_items, self.page_size)
    }

    pub fn can_go_previous(&self, total_items: usize) -> bool {
        self.effective_page(total_items) > 1
    }

    /// Change the page size and return to the first page.
    pub fn change_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Return to the first page.
    pub fn reset(&mut self) {
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_concatenate_to_input() {
        for len in [0usize, 1, 24, 25, 26, 49, 50, 51, 101] {
            let items: Vec<usize> = (0..len).collect();
            for page_size in [1usize, 7, 25] {
                let first = paginate(&items, 1, page_size);
                assert!(first.total_pages >= 1);

                let mut joined = Vec::new();
                for page in 1..=first.total_pages {
                    joined.extend(paginate(&items, page, page_size).data);
                }
                assert_eq!(joined, items, "len={len} page_size={page_size}");
            }
        }
    }

    #[test]
    fn test_out_of_range_pages_clamp() {
        let items: Vec<u32> = (1..=30).collect();

        let last = paginate(&items, 99, 25);
        assert_eq!(last.current_page, 2);
        assert_eq!(last.data, (26..=30).collect::<Vec<_>>());
        assert!(!last.has_next());
        assert!(last.has_previous());

        let first = paginate(&items, 0, 25);
        assert_eq!(first.current_page, 1);
        assert_eq!((first.start_index, first.end_index), (1, 25));
    }

    #[test]
    fn test_empty_input_has_one_empty_page() {
        let page = paginate::<u32>(&[], 3, 25);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_items, 0);
        assert!(page.is_empty());
        assert_eq!((page.start_index, page.end_index), (1, 0));
    }

    #[test]
    fn test_zero_page_size_is_treated_as_one() {
        let page = paginate(&[10, 20, 30], 2, 0);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.data, vec![20]);
    }

    #[test]
    fn test_cursor_navigation() {
        let items: Vec<u32> = (1..=60).collect();
        let mut cursor = PageCursor::new(25);

        assert!(!cursor.can_go_previous(items.len()));
        assert!(cursor.next(items.len()));
        assert!(cursor.next(items.len()));
        assert!(!cursor.next(items.len()));
        assert_eq!(cursor.page(), 3);
        assert!(!cursor.can_go_next(items.len()));

        assert!(cursor.previous(items.len()));
        assert_eq!(cursor.page_of(&items).data[0], 26);

        cursor.go_to(10, items.len());
        assert_eq!(cursor.page(), 3);

        cursor.change_page_size(10);
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.page_of(&items).total_pages, 6);

        cursor.go_to(4, items.len());
        cursor.reset();
        assert_eq!(cursor.page(), 1);
    }

    #[test]
    fn test_cursor_reclamps_when_items_shrink() {
        let mut cursor = PageCursor::new(10).with_page(5);
        let shrunk: Vec<u32> = (1..=15).collect();

        let page = cursor.page_of(&shrunk);
        assert_eq!(page.current_page, 2);
        assert!(!cursor.can_go_next(shrunk.len()));
        assert!(!cursor.next(shrunk.len()));
        assert_eq!(cursor.page(), 2);
    }

    #[test]
    fn test_cursor_steps_back_from_clamped_page() {
        let shrunk: Vec<u32> = (1..=15).collect();
        let mut cursor = PageCursor::new(10).with_page(5);

        assert!(cursor.can_go_previous(shrunk.len()));
        assert!(cursor.previous(shrunk.len()));
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.page_of(&shrunk).current_page, 1);
        assert!(!cursor.previous(shrunk.len()));

        let mut cursor = PageCursor::new(10).with_page(3);
        assert_eq!(cursor.page_of::<u32>(&[]).current_page, 1);
        assert!(!cursor.can_go_previous(0));
        assert!(!cursor.previous(0));
        assert_eq!(cursor.page(), 1);
    }
}
