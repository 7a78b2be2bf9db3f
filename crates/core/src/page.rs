//! Pagination state for a fetched collection.

/// Current position within a paginated result set.
///
/// Pages are 1-indexed; `total` comes from the API's `info.pages` metadata.
/// Invariant: `1 <= current <= total` whenever `total > 0`. An empty result
/// set (`total == 0`) has no current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current: u32,
    pub total: u32,
}

impl PageState {
    /// First page of a result set with `total` pages.
    pub fn new(total: u32) -> Self {
        Self {
            current: if total == 0 { 0 } else { 1 },
            total,
        }
    }

    /// True when the result set has no pages at all.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Move to `page` if it is within `[1, total]`.
    ///
    /// Out-of-range targets are a no-op and return `false`; the pagination
    /// control itself renders every page number unconditionally, so the
    /// boundary check lives here, with the caller.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page >= 1 && page <= self.total {
            self.current = page;
            true
        } else {
            false
        }
    }

    /// Page numbers `1..=total`, in order, for the pagination control.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total
    }
}
