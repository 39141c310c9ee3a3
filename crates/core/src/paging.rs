//! Client-side search and paging over an already fetched collection

use crate::traits::Searchable;

/// Page sizes offered in the list footer
pub const PAGE_SIZES: [usize; 5] = [5, 10, 20, 50, 100];

/// Default client page size
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Search term, page index and page size for one list view.
///
/// Pages are one-based. Changing the term or the page size goes back to
/// the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientPager {
    term: String,
    page: usize,
    page_size: usize,
}

impl Default for ClientPager {
    fn default() -> Self {
        Self {
            term: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientPager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.page = 1;
    }

    /// Change the page size. Zero is treated as one.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    /// Go back to page one, e.g. after a server-side parameter changed
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Jump to a page, clamped to at least one
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Advance one page if `total` records leave room for it
    pub fn next(&mut self, total: usize) {
        if self.has_next(total) {
            self.page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Number of pages needed for `total` records
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Page shown for `total` records: the stored page, pulled back to the
    /// last page when the collection has shrunk below it
    pub fn effective_page(&self, total: usize) -> usize {
        self.page.min(self.total_pages(total).max(1))
    }

    /// Pull the stored page back into range for `total` records.
    ///
    /// Returns whether the page changed.
    pub fn clamp(&mut self, total: usize) -> bool {
        let page = self.effective_page(total);
        let changed = page != self.page;
        self.page = page;
        changed
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.total_pages(total)
    }

    /// Records matching the search term. An empty term matches everything.
    pub fn filter<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.term.is_empty() {
            return items.iter().collect();
        }
        items.iter().filter(|item| item.matches(&self.term)).collect()
    }

    /// Slice of `filtered` shown on the current page
    pub fn page_of<'a, T>(&self, filtered: &'a [T]) -> &'a [T] {
        let page = self.effective_page(filtered.len());
        let start = (page - 1).saturating_mul(self.page_size);
        if start >= filtered.len() {
            return &[];
        }
        let end = (start + self.page_size).min(filtered.len());
        &filtered[start..end]
    }

    /// One-based range of records shown, for "Showing x-y of n"
    pub fn visible_range(&self, total: usize) -> Option<(usize, usize)> {
        let start = (self.effective_page(total) - 1) * self.page_size;
        if start >= total {
            return None;
        }
        Some((start + 1, (start + self.page_size).min(total)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Customer, EntityId};
    use pretty_assertions::assert_eq;

    fn numbered(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn test_twenty_five_items_page_size_ten() {
        let items = numbered(25);
        let mut pager = ClientPager::new();

        assert_eq!(pager.page_of(&items), &items[0..10]);
        assert_eq!(pager.total_pages(items.len()), 3);
        assert!(pager.has_next(items.len()));

        pager.next(items.len());
        assert!(pager.has_next(items.len()));

        pager.next(items.len());
        assert_eq!(pager.page(), 3);
        assert!(!pager.has_next(items.len()));
        assert_eq!(pager.page_of(&items), &items[20..25]);
        assert_eq!(pager.visible_range(items.len()), Some((21, 25)));

        pager.next(items.len());
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn test_empty_collection() {
        let items: Vec<usize> = Vec::new();
        let pager = ClientPager::new();
        assert_eq!(pager.total_pages(0), 0);
        assert!(!pager.has_next(0));
        assert!(!pager.has_previous());
        assert!(pager.page_of(&items).is_empty());
        assert_eq!(pager.visible_range(0), None);
    }

    #[test]
    fn test_shrinking_collection_pulls_page_back() {
        let mut items = numbered(11);
        let mut pager = ClientPager::new();
        pager.next(items.len());
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.page_of(&items), &[11]);

        items.pop();
        assert_eq!(pager.effective_page(items.len()), 1);
        assert_eq!(pager.page_of(&items), &items[0..10]);
        assert_eq!(pager.visible_range(items.len()), Some((1, 10)));

        assert!(pager.clamp(items.len()));
        assert_eq!(pager.page(), 1);
        assert!(!pager.has_previous());
        assert!(!pager.clamp(items.len()));
    }

    #[test]
    fn test_clamp_on_empty_collection_keeps_page_one() {
        let mut pager = ClientPager::new();
        pager.go_to(3);
        assert!(pager.clamp(0));
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_term_and_size_changes_reset_page() {
        let mut pager = ClientPager::new();
        pager.go_to(4);
        pager.set_term("ada");
        assert_eq!(pager.page(), 1);

        pager.go_to(2);
        pager.set_page_size(50);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.page_size(), 50);

        pager.go_to(3);
        pager.reset();
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_filter_uses_search() {
        let items = vec![
            Customer {
                id: EntityId::new("1"),
                full_name: "Ada Lovelace".to_string(),
                mobile_number: "777".to_string(),
                ..Default::default()
            },
            Customer {
                id: EntityId::new("2"),
                full_name: "Charles Babbage".to_string(),
                mobile_number: "888".to_string(),
                ..Default::default()
            },
        ];

        let mut pager = ClientPager::new();
        assert_eq!(pager.filter(&items).len(), 2);

        pager.set_term("lovelace");
        let hits = pager.filter(&items);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "1");

        pager.set_term("88");
        assert_eq!(pager.filter(&items)[0].id.as_str(), "2");
    }
}
