use serde::Serialize;

use crate::pagination::Page;
use crate::Result;

/// An element of a pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Link {
    /// The "previous page" arrow, disabled if `page` is `None`.
    Prev { page: Option<u64> },
    /// A numbered page link.
    Page { page: u64, current: bool },
    /// An ellipsis standing in for hidden pages.
    Gap,
    /// The "next page" arrow, disabled if `page` is `None`.
    Next { page: Option<u64> },
}

impl Page {
    /// Lay out the pagination control for this page.
    ///
    /// # Examples
    ///
    /// ```
    /// use quill::pagination::{Link, Paginator};
    ///
    /// let paginator = Paginator::builder().page_show(5).build()?;
    /// let links = paginator.page(100, 5).links()?;
    /// assert_eq!(
    ///     links,
    ///     [
    ///         Link::Prev { page: Some(4) },
    ///         Link::Page { page: 1, current: false },
    ///         Link::Gap,
    ///         Link::Page { page: 4, current: false },
    ///         Link::Page { page: 5, current: true },
    ///         Link::Page { page: 6, current: false },
    ///         Link::Gap,
    ///         Link::Page { page: 10, current: false },
    ///         Link::Next { page: Some(6) },
    ///     ]
    /// );
    /// # Ok::<(), quill::Error>(())
    /// ```
    pub fn links(&self) -> Result<Vec<Link>> {
        let window = self.window()?;
        let current = |page| Link::Page {
            page,
            current: page == self.page_index,
        };

        let mut links = Vec::with_capacity(window.len().saturating_add(6));
        links.push(Link::Prev { page: self.prev() });
        links.push(current(1));
        if window.has_leading_gap() {
            links.push(Link::Gap);
        }
        links.extend(window.iter().map(current));
        if window.has_trailing_gap() {
            links.push(Link::Gap);
        }
        if self.page_count > 1 {
            links.push(current(self.page_count));
        }
        links.push(Link::Next { page: self.next() });
        Ok(links)
    }
}
