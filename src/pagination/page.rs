use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pagination::{window, Window};
use crate::{Error, Result};

/// Describes one page of a listing.
///
/// This is the page descriptor returned by the admin API next to the listed
/// items, it is usually created on the server using a [`Paginator`] and
/// deserialized on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    /// The total number of items in the listing.
    pub item_count: u64,
    /// The current page, starting from 1.
    pub page_index: u64,
    /// The number of items on each page.
    #[serde(alias = "item_page")]
    pub page_size: u64,
    /// The total number of pages.
    pub page_count: u64,
    /// The number of interior page links to show, this excludes the first
    /// and last page.
    pub page_show: u64,
    /// The offset of the first item on this page.
    pub offset: u64,
    /// The number of items to fetch for this page.
    pub limit: u64,
    pub has_next: bool,
    #[serde(alias = "has_previous")]
    pub has_pre: bool,
}

/// Computes [`Page`]s for a fixed page size.
///
/// Use [`Paginator::default()`] for 10 items per page and three page links,
/// or [`Paginator::builder()`] to configure them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    page_size: u64,
    page_show: u64,
}

/// A builder for a [`Paginator`].
///
/// This struct is typically created using [`Paginator::builder()`].
#[derive(Debug, Clone)]
pub struct PaginatorBuilder {
    page_size: u64,
    page_show: u64,
}

impl Default for Paginator {
    /// Returns a paginator with 10 items per page that shows three page
    /// links: the first page, the last page and one page in between.
    #[inline]
    fn default() -> Self {
        Self {
            page_size: 10,
            page_show: 3,
        }
    }
}

impl Paginator {
    /// Create a new paginator builder.
    ///
    /// # Examples
    ///
    /// ```
    /// let paginator = quill::pagination::Paginator::builder()
    ///     .page_size(20)
    ///     .page_show(7)
    ///     .build()?;
    ///
    /// let page = paginator.page(95, 2);
    /// assert_eq!(page.page_count, 5);
    /// assert_eq!(page.offset, 20);
    /// assert_eq!(page.page_show, 5);
    /// # Ok::<(), quill::Error>(())
    /// ```
    #[inline]
    pub fn builder() -> PaginatorBuilder {
        PaginatorBuilder::new()
    }

    /// Returns the number of items on each page.
    #[inline]
    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    /// Returns the total number of page links shown, including the first and
    /// last page.
    #[inline]
    pub fn page_show(&self) -> u64 {
        self.page_show
    }

    /// Describe page `page_index` of a listing with `item_count` items.
    ///
    /// A listing without items, or a `page_index` past the last page,
    /// results in an empty first page with `limit` zero.
    pub fn page(&self, item_count: u64, page_index: u64) -> Page {
        let page_size = self.page_size;
        let page_count = item_count / page_size + u64::from(item_count % page_size > 0);

        let (page_index, offset, limit) = if item_count == 0 || page_index > page_count {
            (1, 0, 0)
        } else {
            // Page zero is treated like the first page.
            let page_index = page_index.max(1);
            (page_index, page_size * (page_index - 1), page_size)
        };

        Page {
            item_count,
            page_index,
            page_size,
            page_count,
            page_show: self.page_show - 2,
            offset,
            limit,
            has_next: page_index < page_count,
            has_pre: page_index > 1,
        }
    }
}

impl PaginatorBuilder {
    /// Creates a new builder with the default settings.
    #[inline]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let Paginator {
            page_size,
            page_show,
        } = Paginator::default();
        Self {
            page_size,
            page_show,
        }
    }

    /// Set the number of items on each page.
    #[inline]
    pub fn page_size(&mut self, page_size: u64) -> &mut Self {
        self.page_size = page_size;
        self
    }

    /// Set the total number of page links shown, including the always
    /// visible first and last page.
    #[inline]
    pub fn page_show(&mut self, page_show: u64) -> &mut Self {
        self.page_show = page_show;
        self
    }

    /// Builds the paginator.
    ///
    /// # Errors
    ///
    /// If the page size is zero or fewer than three page links are shown.
    pub fn build(&self) -> Result<Paginator> {
        if self.page_size == 0 {
            return Err(Error::invalid_argument("`page_size` must be at least 1"));
        }
        if self.page_show < 3 {
            return Err(Error::invalid_argument("`page_show` must be at least 3"));
        }
        Ok(Paginator {
            page_size: self.page_size,
            page_show: self.page_show,
        })
    }
}

impl Default for Page {
    /// An empty listing.
    fn default() -> Self {
        Paginator::default().page(0, 1)
    }
}

impl Page {
    /// Compute the interior pages to show for this page.
    ///
    /// # Errors
    ///
    /// If `page_show` is zero or `page_index` is past the last page, this can
    /// only happen for deserialized pages.
    #[inline]
    pub fn window(&self) -> Result<Window> {
        window(self.page_index, self.page_count, self.page_show)
    }

    /// Returns the previous page number, if any.
    ///
    /// A deserialized page may claim a previous page that does not exist,
    /// e.g. `has_pre` on page zero, in which case this returns `None`.
    #[inline]
    pub fn prev(&self) -> Option<u64> {
        if !self.has_pre {
            return None;
        }
        self.page_index
            .checked_sub(1)
            .filter(|&page| page >= 1 && page <= self.page_count)
    }

    /// Returns the next page number, if any.
    #[inline]
    pub fn next(&self) -> Option<u64> {
        if !self.has_next {
            return None;
        }
        self.page_index
            .checked_add(1)
            .filter(|&page| page <= self.page_count)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item_count:{}, page_count:{}, page_index:{}, page_size:{}, offset:{}, limit:{}",
            self.item_count,
            self.page_count,
            self.page_index,
            self.page_size,
            self.offset,
            self.limit
        )
    }
}
