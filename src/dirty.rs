//! Per-page dirty tracking
//!
//! One bit per page, so a 128x128 panel (16 pages) fits in a `u16`.

/// Set of pages with unflushed buffer changes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirtyPages(u16);

impl DirtyPages {
    /// Maximum number of trackable pages
    pub const MAX_PAGES: u8 = 16;

    /// Create an empty set
    pub const fn new() -> Self {
        Self(0)
    }

    /// Mark `page` as modified
    pub fn mark(&mut self, page: u8) {
        if page < Self::MAX_PAGES {
            self.0 |= 1 << page;
        }
    }

    /// Mark the first `page_count` pages as modified
    pub fn mark_all(&mut self, page_count: u8) {
        if page_count > 0 {
            self.0 |= Self::range_mask(0, page_count - 1);
        }
    }

    /// Clear pages `start..=end`
    pub fn clear_range(&mut self, start: u8, end: u8) {
        self.0 &= !Self::range_mask(start, end);
    }

    /// Whether `page` has unflushed changes
    pub fn is_dirty(&self, page: u8) -> bool {
        page < Self::MAX_PAGES && self.0 & (1 << page) != 0
    }

    /// Whether nothing is pending
    pub fn is_clean(&self) -> bool {
        self.0 == 0
    }

    /// Iterate dirty pages in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + use<> {
        let bits = self.0;
        (0..Self::MAX_PAGES).filter(move |page| bits & (1 << page) != 0)
    }

    fn range_mask(start: u8, end: u8) -> u16 {
        if start > end || start >= Self::MAX_PAGES {
            return 0;
        }
        let end = end.min(Self::MAX_PAGES - 1);
        let upper = if end == Self::MAX_PAGES - 1 {
            u16::MAX
        } else {
            (1u16 << (end + 1)) - 1
        };
        upper & !((1u16 << start) - 1)
    }
}
