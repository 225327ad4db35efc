//! Storage collaborator contract for member/group search

use anyhow::Result;
use async_trait::async_trait;

use crate::core::predicate::Predicate;
use crate::core::projection::MemberGroupRow;
use crate::core::query::SortOrder;

/// The query-execution service the search layer runs against.
///
/// The base collection (members) and the join (members left-outer-joined
/// to their groups) are fixed by this contract: every member is
/// returned whether or not it has a group, with absent group fields on
/// unmatched rows. An inner join here would silently drop group-less
/// members, which is why the join is part of the contract and not an
/// implementation choice.
///
/// Both operations are read-only. Implementations own their error
/// domain (`anyhow::Result`) as well as whatever concurrency control
/// the underlying data needs; the search layer never retries.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Run the filtered, ordered query and materialize joined rows.
    ///
    /// `predicates` are combined as a conjunction; an empty slice means
    /// match-all. `offset`/`limit` window the ordered result; `None`
    /// leaves the corresponding bound open. Rows come back in a stable
    /// order for a given `order` and are not de-duplicated.
    async fn query(
        &self,
        predicates: &[Predicate],
        order: SortOrder,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<MemberGroupRow>>;

    /// Count rows matching the conjunction, unbounded by any window
    async fn count(&self, predicates: &[Predicate]) -> Result<u64>;
}
