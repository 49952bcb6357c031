//! Pagination of list views.
//!
//! A pagination control always shows the first and the last page. The pages
//! in between are limited to a *window* of at most `page_show` pages centered
//! on the current page, see [`window`].
//!
//! ```text
//! «  1  …  3  4  [5]  6  7  …  20  »
//! ```
//!
//! [`Page`] describes one page of a listing as returned by the admin API and
//! [`Page::links`] turns it into the list of [`Link`]s making up the control.

mod links;
mod page;

use std::ops::Range;

pub use crate::pagination::links::Link;
pub use crate::pagination::page::{Page, Paginator, PaginatorBuilder};
use crate::{Error, Result};

/// The interior pages shown by a pagination control.
///
/// This is a contiguous ascending run of page numbers within
/// `2..=page_count - 1`, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    pages: Range<u64>,
    page_count: u64,
}

/// Compute the window of interior pages to show.
///
/// The window is centered on `page_index` and holds at most `page_show`
/// pages. It never contains the first or last page since those are always
/// rendered separately.
///
/// # Errors
///
/// If `page_show` is zero, or if `page_index` is past the last page of a
/// non-empty listing.
///
/// # Examples
///
/// ```
/// let w = quill::pagination::window(5, 20, 5)?;
/// assert_eq!(w.to_vec(), [3, 4, 5, 6, 7]);
///
/// let w = quill::pagination::window(19, 20, 5)?;
/// assert_eq!(w.to_vec(), [15, 16, 17, 18, 19]);
///
/// let w = quill::pagination::window(1, 2, 5)?;
/// assert!(w.is_empty());
/// # Ok::<(), quill::Error>(())
/// ```
pub fn window(page_index: u64, page_count: u64, page_show: u64) -> Result<Window> {
    if page_show == 0 {
        return Err(Error::invalid_argument("`page_show` must be at least 1"));
    }
    if page_count > 0 && page_index > page_count {
        return Err(Error::invalid_argument(format!(
            "`page_index` {page_index} is past the last page {page_count}"
        )));
    }

    let mut left = 2;
    let mut right = page_count;
    if page_count > page_show {
        left = page_index.saturating_sub(page_show / 2).max(2);
        match left.checked_add(page_show) {
            Some(end) if end <= page_count => right = end,
            _ => {
                // Stays clear of the first page even when the window is as
                // wide as the interior.
                left = (page_count - page_show).max(2);
            }
        }
    }

    tracing::trace!(page_index, page_count, page_show, left, right, "pagination window");

    Ok(Window {
        pages: left..right.max(left),
        page_count,
    })
}

impl Window {
    /// Returns the page numbers as a range.
    #[inline]
    pub fn pages(&self) -> Range<u64> {
        self.pages.clone()
    }

    /// Returns an iterator over the page numbers.
    #[inline]
    pub fn iter(&self) -> Range<u64> {
        self.pages()
    }

    /// Collect the page numbers.
    #[inline]
    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }

    /// Returns the number of pages in the window.
    #[inline]
    pub fn len(&self) -> usize {
        usize::try_from(self.pages.end - self.pages.start).unwrap_or(usize::MAX)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<u64> {
        (!self.is_empty()).then_some(self.pages.start)
    }

    #[inline]
    pub fn last(&self) -> Option<u64> {
        (!self.is_empty()).then(|| self.pages.end - 1)
    }

    /// Whether pages are hidden between the first page and the window.
    pub fn has_leading_gap(&self) -> bool {
        self.first().map_or(false, |first| first > 2)
    }

    /// Whether pages are hidden between the window and the last page.
    pub fn has_trailing_gap(&self) -> bool {
        self.last()
            .map_or(false, |last| last + 1 < self.page_count)
    }
}

impl IntoIterator for &Window {
    type Item = u64;
    type IntoIter = Range<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn window_centered() {
        assert_eq!(window(5, 20, 5).unwrap().to_vec(), [3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_clamped_right() {
        assert_eq!(window(19, 20, 5).unwrap().to_vec(), [15, 16, 17, 18, 19]);
        assert_eq!(window(20, 20, 5).unwrap().to_vec(), [15, 16, 17, 18, 19]);
    }

    #[test]
    fn window_clamped_left() {
        assert_eq!(window(1, 20, 5).unwrap().to_vec(), [2, 3, 4, 5, 6]);
        assert_eq!(window(3, 20, 5).unwrap().to_vec(), [2, 3, 4, 5, 6]);
    }

    #[test]
    fn window_never_contains_first_page() {
        assert_eq!(window(1, 6, 5).unwrap().to_vec(), [2, 3, 4, 5]);
    }

    #[test]
    fn window_small_page_count() {
        assert!(window(1, 2, 5).unwrap().is_empty());
        assert!(window(1, 1, 5).unwrap().is_empty());
        assert!(window(1, 0, 5).unwrap().is_empty());
        assert_eq!(window(2, 5, 5).unwrap().to_vec(), [2, 3, 4]);
    }

    #[test]
    fn window_single_page_show() {
        assert_eq!(window(7, 20, 1).unwrap().to_vec(), [7]);
    }

    #[test]
    fn window_rejects_zero_page_show() {
        let err = window(1, 10, 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn window_rejects_page_past_end() {
        let err = window(11, 10, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        let err = window(u64::MAX, 10, 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn window_extreme_values() {
        let w = window(u64::MAX, u64::MAX, u64::MAX - 1).unwrap();
        assert_eq!(w.first(), Some(2));
        assert_eq!(w.last(), Some(u64::MAX - 1));
        assert_eq!(w.len(), usize::try_from(u64::MAX - 2).unwrap_or(usize::MAX));

        let w = window(u64::MAX - 1, u64::MAX, 3).unwrap();
        assert_eq!(w.to_vec(), [u64::MAX - 3, u64::MAX - 2, u64::MAX - 1]);

        let w = window(1, u64::MAX, u64::MAX).unwrap();
        assert_eq!(w.first(), Some(2));
        assert_eq!(w.last(), Some(u64::MAX - 1));
    }

    #[test]
    fn window_gaps() {
        let w = window(10, 20, 5).unwrap();
        assert!(w.has_leading_gap());
        assert!(w.has_trailing_gap());

        let w = window(2, 20, 5).unwrap();
        assert!(!w.has_leading_gap());
        assert!(w.has_trailing_gap());

        let w = window(19, 20, 5).unwrap();
        assert!(w.has_leading_gap());
        assert!(!w.has_trailing_gap());

        let w = window(1, 2, 5).unwrap();
        assert!(!w.has_leading_gap());
        assert!(!w.has_trailing_gap());
    }
}
