//! Server-side list parameters
//!
//! The backend pages lists with `SkipCount` / `MaxResultCount` and accepts a
//! free-text `Filter` and a `Sorting` expression.

use serde::{Deserialize, Serialize};

/// Sort orders offered for the customer list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOption {
    #[default]
    NewestFirst,
    OldestFirst,
    NameAscending,
    NameDescending,
}

impl SortOption {
    /// All options in display order
    pub const ALL: [SortOption; 4] = [
        SortOption::NewestFirst,
        SortOption::OldestFirst,
        SortOption::NameAscending,
        SortOption::NameDescending,
    ];

    /// Sorting expression sent to the server
    pub fn expression(&self) -> &'static str {
        match self {
            SortOption::NewestFirst => "creationTime DESC",
            SortOption::OldestFirst => "creationTime ASC",
            SortOption::NameAscending => "fullName ASC",
            SortOption::NameDescending => "fullName DESC",
        }
    }

    /// Parse a sorting expression back into an option
    pub fn from_expression(expr: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.expression() == expr)
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::NewestFirst => "Newest first",
            SortOption::OldestFirst => "Oldest first",
            SortOption::NameAscending => "Name A-Z",
            SortOption::NameDescending => "Name Z-A",
        }
    }
}

/// Parameters of one list request.
///
/// `filter` is `None` for resources whose endpoint takes no `Filter`
/// parameter, in which case the key is left out of the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    pub filter: Option<String>,
    pub sorting: String,
    pub skip_count: u32,
    pub max_result_count: u32,
}

impl ListQuery {
    /// Default customer query: no filter, newest first, first page
    pub fn customers(page_size: u32) -> Self {
        Self {
            filter: Some(String::new()),
            sorting: SortOption::NewestFirst.expression().to_string(),
            skip_count: 0,
            max_result_count: page_size,
        }
    }

    /// Default subscription query: server order, first page
    pub fn subscriptions(page_size: u32) -> Self {
        Self {
            filter: None,
            sorting: String::new(),
            skip_count: 0,
            max_result_count: page_size,
        }
    }

    /// Replace the filter text and go back to the first page
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = Some(filter.into());
        self.skip_count = 0;
    }

    /// Replace the sorting expression and go back to the first page
    pub fn set_sorting(&mut self, sorting: impl Into<String>) {
        self.sorting = sorting.into();
        self.skip_count = 0;
    }

    /// Replace the page size and go back to the first page
    pub fn set_max_result_count(&mut self, count: u32) {
        self.max_result_count = count.max(1);
        self.skip_count = 0;
    }

    /// Whether a previous server page exists
    pub fn has_previous(&self) -> bool {
        self.skip_count > 0
    }

    /// Whether a next server page may exist, given how many rows the
    /// current page returned
    pub fn has_next(&self, returned: usize) -> bool {
        returned >= self.max_result_count as usize
    }

    /// Advance by one server page
    pub fn next_page(&mut self) {
        self.skip_count = self.skip_count.saturating_add(self.max_result_count);
    }

    /// Step back one server page, stopping at zero
    pub fn previous_page(&mut self) {
        self.skip_count = self.skip_count.saturating_sub(self.max_result_count);
    }

    /// One-based server page number
    pub fn page_number(&self) -> u32 {
        self.skip_count / self.max_result_count.max(1) + 1
    }

    /// Query string pairs in the order the backend documents them
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(filter) = &self.filter {
            pairs.push(("Filter", filter.clone()));
        }
        pairs.push(("Sorting", self.sorting.clone()));
        pairs.push(("SkipCount", self.skip_count.to_string()));
        pairs.push(("MaxResultCount", self.max_result_count.to_string()));
        pairs
    }
}
