pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;

/// 1-based page selection over an in-memory list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl PageRequest {
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    /// Items in `[(page-1)*per_page, (page-1)*per_page + per_page)`, clamped
    /// to the list. Pages before the first are empty.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.page < 1 || self.per_page < 1 {
            return &[];
        }
        let start = (self.page - 1).saturating_mul(self.per_page);
        let end = start.saturating_add(self.per_page);
        let len = items.len() as i64;
        if start >= len {
            return &[];
        }
        &items[start as usize..end.min(len) as usize]
    }
}
