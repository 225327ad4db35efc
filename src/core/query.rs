//! Paging requests, page results, and sort expressions

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::core::error::SearchError;

/// A window onto an ordered result set.
///
/// Offsets are zero-based; the limit is the maximum number of rows a
/// page may hold. Construction validates rather than clamps: a negative
/// offset or a non-positive limit is an error, never silently adjusted.
///
/// # Example
/// ```rust,ignore
/// let page = PageRequest::new(0, 20)?;          // first 20 rows
/// let next = page.next();                       // rows 20..40
/// assert!(PageRequest::new(0, 0).is_err());     // zero limit rejected
/// assert!(PageRequest::new(-1, 20).is_err());   // negative offset rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    offset: u64,
    limit: u64,
}

impl PageRequest {
    /// Create a page request, rejecting malformed bounds
    pub fn new(offset: i64, limit: i64) -> Result<Self, SearchError> {
        if offset < 0 || limit < 1 {
            return Err(SearchError::InvalidPageRequest { offset, limit });
        }
        Ok(Self {
            offset: offset as u64,
            limit: limit as u64,
        })
    }

    /// The first page with the given limit
    pub fn first(limit: i64) -> Result<Self, SearchError> {
        Self::new(0, limit)
    }

    /// Zero-based index of the first row in the window
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum number of rows in the window
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// The request for the window immediately after this one
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset + self.limit,
            limit: self.limit,
        }
    }
}

/// Pagination metadata attached to a [`Page`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Offset the page was fetched at
    pub offset: u64,

    /// Limit the page was fetched with
    pub limit: u64,

    /// Exact total number of matching rows
    pub total: u64,

    /// Whether rows exist beyond this page
    pub has_next: bool,
}

/// One page of results plus pagination metadata.
///
/// Pages produced by the eager and deferred counting strategies are
/// indistinguishable by shape; callers always get content and an exact
/// total.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// The page content, at most `meta.limit` rows
    pub content: Vec<T>,

    /// Pagination metadata
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Assemble a page, invoking `count` only when the total cannot be
    /// derived from the content itself.
    ///
    /// With `n = content.len()`, the total is known without counting
    /// when the window provably was not truncated by the limit:
    /// - `offset == 0 && n < limit` — the whole result set fit on the
    ///   first page, so `total = n`;
    /// - `n > 0 && n < limit` — a short page at a non-zero offset marks
    ///   the end of the data, so `total = offset + n`.
    ///
    /// A full page may or may not be the last one, and an empty page at
    /// a non-zero offset says nothing about how many rows precede it;
    /// both cases invoke the deferred `count`.
    pub async fn assemble<F, Fut>(
        content: Vec<T>,
        request: PageRequest,
        count: F,
    ) -> Result<Self, SearchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<u64, SearchError>>,
    {
        let n = content.len() as u64;
        let total = if request.offset() == 0 && n < request.limit() {
            tracing::debug!(total = n, "page total derived from first-page content");
            n
        } else if n > 0 && n < request.limit() {
            let total = request.offset() + n;
            tracing::debug!(total, "page total derived from short page at offset");
            total
        } else {
            let total = count().await?;
            tracing::debug!(total, "page total resolved by count query");
            total
        };

        Ok(Self {
            meta: PageMeta {
                offset: request.offset(),
                limit: request.limit(),
                total,
                has_next: request.offset() + n < total,
            },
            content,
        })
    }

    /// Build a page from content and an already-known exact total
    pub fn with_total(content: Vec<T>, request: PageRequest, total: u64) -> Self {
        let n = content.len() as u64;
        Self {
            meta: PageMeta {
                offset: request.offset(),
                limit: request.limit(),
                total,
                has_next: request.offset() + n < total,
            },
            content,
        }
    }
}

/// Field a result set can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// The order rows were stored in (the backend's stable default)
    #[default]
    Insertion,

    /// Member name
    Name,

    /// Member score
    Score,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// A sort expression: field plus direction.
///
/// Content and count queries for the same page must run under the same
/// ordering, so the repository resolves one `SortOrder` per call and
/// hands it to both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortOrder {
    /// Field to sort by
    pub key: SortKey,

    /// Direction to sort in
    pub direction: Direction,
}

impl SortOrder {
    /// Ascending order on the given field
    pub fn ascending(key: SortKey) -> Self {
        Self {
            key,
            direction: Direction::Asc,
        }
    }

    /// Descending order on the given field
    pub fn descending(key: SortKey) -> Self {
        Self {
            key,
            direction: Direction::Desc,
        }
    }

    /// Parse a sort expression.
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    ///
    /// Fields: `insertion`, `name`, `score`.
    pub fn parse(expr: &str) -> Option<Self> {
        let (field, direction) = match expr.split_once(':') {
            Some((field, direction)) => (field, direction),
            None => (expr, "asc"),
        };

        let key = match field.trim() {
            "insertion" => SortKey::Insertion,
            "name" => SortKey::Name,
            "score" => SortKey::Score,
            _ => return None,
        };
        let direction = match direction.trim() {
            "asc" => Direction::Asc,
            "desc" => Direction::Desc,
            _ => return None,
        };

        Some(Self { key, direction })
    }
}
