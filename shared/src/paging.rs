use std::ops::Range;

pub const MAPS_PER_PAGE: usize = 12;

/// Client-side paginator over a list the caller already holds in full.
/// Pages are 1-based; bounds are recomputed from the current list length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: usize,
    current: usize,
}

impl Paginator {
    pub const fn new(page_size: usize) -> Self {
        Self {
            page_size: if page_size == 0 { 1 } else { page_size },
            current: 1,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    pub fn bounds(&self, len: usize) -> Range<usize> {
        let start = ((self.current - 1) * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.bounds(items.len())]
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self, len: usize) -> bool {
        self.current < self.total_pages(len)
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1).max(1);
    }

    pub fn next(&mut self, len: usize) {
        self.current = (self.current + 1).min(self.total_pages(len)).max(1);
    }

    /// Back to page 1; called whenever the filter text changes.
    pub fn reset(&mut self) {
        self.current = 1;
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(MAPS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maps(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_shows_first_twelve() {
        let items = maps(37);
        let pager = Paginator::default();
        assert_eq!(pager.total_pages(items.len()), 4);
        assert_eq!(pager.slice(&items), &items[0..12]);
        assert!(!pager.has_previous());
        assert!(pager.has_next(items.len()));
    }

    #[test]
    fn last_page_holds_the_remainder_and_disables_next() {
        let items = maps(37);
        let mut pager = Paginator::default();
        for _ in 0..3 {
            pager.next(items.len());
        }
        assert_eq!(pager.current(), 4);
        assert_eq!(pager.slice(&items), &[37]);
        assert!(!pager.has_next(items.len()));

        pager.next(items.len());
        assert_eq!(pager.current(), 4);
    }

    #[test]
    fn previous_stops_at_first_page() {
        let mut pager = Paginator::default();
        pager.previous();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn reset_returns_to_first_page() {
        let items = maps(30);
        let mut pager = Paginator::default();
        pager.next(items.len());
        pager.reset();
        assert_eq!(pager.current(), 1);
    }

    #[test]
    fn shrinking_list_never_slices_out_of_range() {
        let mut pager = Paginator::default();
        pager.next(40);
        pager.next(40);
        let filtered = maps(5);
        assert!(pager.slice(&filtered).is_empty());
        assert_eq!(pager.bounds(filtered.len()), 5..5);
    }

    #[test]
    fn empty_list_has_no_pages() {
        let mut pager = Paginator::default();
        assert_eq!(pager.total_pages(0), 0);
        assert!(!pager.has_next(0));
        pager.next(0);
        assert_eq!(pager.current(), 1);
    }
}
