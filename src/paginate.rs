// src/paginate.rs
use std::ops::Range;

/// Where a page request landed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page actually shown
    pub page: usize,
    /// Always ≥ 1, even for an empty view
    pub total_pages: usize,
    /// Row range into the filtered view, already clipped to `len`
    pub range: Range<usize>,
    /// The request was outside `1..=total_pages` and got pulled in
    pub clamped: bool,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool { self.range.is_empty() }
}

/// max(1, ceil(len / page_size))
pub fn total_pages(len: usize, page_size: usize) -> usize {
    let size = page_size.max(1);
    len.div_ceil(size).max(1)
}

/// Clamp a 1-based page request into range and slice `[0, len)` for it.
pub fn paginate(len: usize, page_size: usize, requested: usize) -> PageWindow {
    let size = page_size.max(1);
    let total = total_pages(len, size);
    let page = requested.clamp(1, total);

    let start = ((page - 1) * size).min(len);
    let end = (page * size).min(len);

    PageWindow { page, total_pages: total, range: start..end, clamped: page != requested }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    #[test]
    fn page_zero_pulls_up_to_one() {
        let w = paginate(25, 10, 0);
        assert_eq!(w.page, 1);
        assert!(w.clamped);
        assert_eq!(w.range, 0..10);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let w = paginate(3, 0, 2);
        assert_eq!(w.total_pages, 3);
        assert_eq!(w.range, 1..2);
    }
}
