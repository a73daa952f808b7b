//! Pagination stage for the filtered and sorted records.
//!
//! This module slices a record sequence into pages and works out which
//! navigation controls are usable. Page indices are never clamped here: an
//! index past the end simply yields an empty page, and the disabled
//! next/last controls are what keep the user in range.
//!
//! # Example
//!
//! ```rust
//! use teagrid::paginate::{max_page_index, paginate, Navigation};
//!
//! let items = vec![1, 2, 3, 4, 5, 6, 7];
//! let refs: Vec<&i32> = items.iter().collect();
//!
//! assert_eq!(paginate(&refs, 3, 2), &[&7]);
//! assert_eq!(max_page_index(items.len(), 3), 2);
//!
//! let nav = Navigation::new(2, 3, items.len());
//! assert!(nav.prev && !nav.next);
//! assert_eq!(nav.label(), "7–7 of 7");
//! ```

/// Returns the records on page `page_index` of size `page_size`.
///
/// A page size of zero is treated as one.
#[must_use]
pub fn paginate<T>(records: &[T], page_size: usize, page_index: usize) -> &[T] {
    let (start, end) = slice_bounds(records.len(), page_size, page_index);
    &records[start..end]
}

/// Returns the `[start, end)` bounds of a page, clamped to `len`.
#[must_use]
pub fn slice_bounds(len: usize, page_size: usize, page_index: usize) -> (usize, usize) {
    let page_size = page_size.max(1);
    let start = page_index.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    (start, end)
}

/// Returns the index of the last page that holds any records.
///
/// An empty sequence has a single, empty page 0.
#[must_use]
pub fn max_page_index(len: usize, page_size: usize) -> usize {
    len.saturating_sub(1) / page_size.max(1)
}

/// Which navigation controls are enabled, plus the range label numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Navigation {
    /// "First page" is usable.
    pub first: bool,
    /// "Previous page" is usable.
    pub prev: bool,
    /// "Next page" is usable.
    pub next: bool,
    /// "Last page" is usable.
    pub last: bool,
    /// One-based index of the first record shown, 0 when the page is empty.
    pub start: usize,
    /// One-based index of the last record shown, 0 when the page is empty.
    pub end: usize,
    /// Number of records after filtering.
    pub total: usize,
    /// Page the "last" control jumps to.
    pub last_page: usize,
}

impl Navigation {
    /// Computes navigation for `page_index` over `total` filtered records.
    #[must_use]
    pub fn new(page_index: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let at_start = page_index == 0;
        let more = page_index
            .saturating_add(1)
            .saturating_mul(page_size)
            < total;
        let (lo, hi) = slice_bounds(total, page_size, page_index);
        let (start, end) = if lo < hi { (lo + 1, hi) } else { (0, 0) };

        Self {
            first: !at_start,
            prev: !at_start,
            next: more,
            last: more,
            start,
            end,
            total,
            last_page: max_page_index(total, page_size),
        }
    }

    /// Renders the "start–end of total" label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}–{} of {}", self.start, self.end, self.total)
    }
}

/// The derived, visible slice of a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, R> {
    /// Records on this page, in display order.
    pub records: Vec<&'a R>,
    /// Page index the slice was taken at.
    pub index: usize,
    /// Page size the slice was taken with.
    pub size: usize,
    /// Number of records after filtering.
    pub filtered: usize,
    /// Navigation state for this page.
    pub navigation: Navigation,
}

impl<'a, R> Page<'a, R> {
    /// Slices `sorted` into the page at `index`.
    #[must_use]
    pub fn from_sorted(sorted: &[&'a R], size: usize, index: usize) -> Self {
        Self {
            records: paginate(sorted, size, index).to_vec(),
            index,
            size,
            filtered: sorted.len(),
            navigation: Navigation::new(index, size, sorted.len()),
        }
    }

    /// Returns whether the page shows no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records on the page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
