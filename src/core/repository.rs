//! Member search repository: filtered queries and paginated fetches

use futures::try_join;

use crate::config::SearchConfig;
use crate::core::condition::SearchCondition;
use crate::core::error::SearchError;
use crate::core::projection::MemberGroupRow;
use crate::core::query::{Page, PageRequest, SortOrder};
use crate::core::store::SearchBackend;

/// Search operations over members and their groups.
///
/// The repository translates a [`SearchCondition`] into predicates,
/// hands them to the storage backend, and shapes the results: either
/// a full list or a page with total-count metadata. Each call is
/// an independent unit of work; the repository holds no per-call state
/// and no locks.
///
/// Two paging strategies are available:
/// - [`search_page`](Self::search_page) issues the content query first
///   and runs the count query only when the content cannot prove the
///   total (the common last-page case costs one round-trip instead of
///   two);
/// - [`search_page_eager`](Self::search_page_eager) always issues both,
///   concurrently.
///
/// Both produce the same [`Page`] shape. Content and count queries for
/// one page always share the same predicates and ordering; totals are
/// still best-effort under concurrent writers, since the two queries
/// may observe storage at different instants.
pub struct MemberRepository<B> {
    backend: B,
    default_order: SortOrder,
    default_page_size: i64,
}

impl<B: SearchBackend> MemberRepository<B> {
    /// Create a repository over the given backend
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, &SearchConfig::default())
    }

    /// Create a repository configured from a [`SearchConfig`]
    pub fn with_config(backend: B, config: &SearchConfig) -> Self {
        Self {
            backend,
            default_order: config.order(),
            default_page_size: config.default_page_size,
        }
    }

    /// Ordering applied to every query this repository issues
    pub fn default_order(&self) -> SortOrder {
        self.default_order
    }

    /// Fetch every row matching the condition, unpaginated.
    ///
    /// An all-unset condition is valid and returns the whole joined
    /// collection.
    pub async fn search(
        &self,
        condition: &SearchCondition,
    ) -> Result<Vec<MemberGroupRow>, SearchError> {
        let predicates = condition.predicates();
        tracing::debug!(predicates = predicates.len(), "executing member search");

        self.backend
            .query(&predicates, self.default_order, None, None)
            .await
            .map_err(SearchError::storage)
    }

    /// Fetch one page, skipping the count query when the content size
    /// already proves the total.
    pub async fn search_page(
        &self,
        condition: &SearchCondition,
        page: PageRequest,
    ) -> Result<Page<MemberGroupRow>, SearchError> {
        let predicates = condition.predicates();
        tracing::debug!(
            predicates = predicates.len(),
            offset = page.offset(),
            limit = page.limit(),
            "executing paged member search"
        );

        let content = self
            .backend
            .query(
                &predicates,
                self.default_order,
                Some(page.offset()),
                Some(page.limit()),
            )
            .await
            .map_err(SearchError::storage)?;

        Page::assemble(content, page, move || async move {
            self.backend
                .count(&predicates)
                .await
                .map_err(SearchError::storage)
        })
        .await
    }

    /// Fetch the first page at the configured default page size
    pub async fn search_first_page(
        &self,
        condition: &SearchCondition,
    ) -> Result<Page<MemberGroupRow>, SearchError> {
        self.search_page(condition, PageRequest::first(self.default_page_size)?)
            .await
    }

    /// Fetch one page with content and count queries always issued,
    /// concurrently.
    pub async fn search_page_eager(
        &self,
        condition: &SearchCondition,
        page: PageRequest,
    ) -> Result<Page<MemberGroupRow>, SearchError> {
        let predicates = condition.predicates();
        tracing::debug!(
            predicates = predicates.len(),
            offset = page.offset(),
            limit = page.limit(),
            "executing paged member search with eager count"
        );

        let content_query = self.backend.query(
            &predicates,
            self.default_order,
            Some(page.offset()),
            Some(page.limit()),
        );
        let count_query = self.backend.count(&predicates);

        let (content, total) =
            try_join!(content_query, count_query).map_err(SearchError::storage)?;

        Ok(Page::with_total(content, page, total))
    }
}
