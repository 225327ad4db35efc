//! # Roster
//!
//! A data-access layer for searching members and their groups by an
//! arbitrary subset of optional criteria, with results as a full list
//! or as a page with total-count metadata.
//!
//! ## Features
//!
//! - **Composable Filters**: Each filter is independently optional; set
//!   filters become predicates combined with AND, unset filters impose
//!   no constraint
//! - **Left-Join Projection**: Results are flattened member/group rows;
//!   members without a group are always found, with absent group fields
//! - **Count-Avoiding Pagination**: The total-count query is skipped
//!   whenever the page content alone proves the total; the common
//!   last-page case costs one backend round-trip instead of two
//! - **Eager Pagination**: An always-count strategy issuing content and
//!   count queries concurrently, for callers that prefer it
//! - **Pluggable Backend**: The storage collaborator sits behind an
//!   async trait; an in-memory store ships for development and testing
//! - **Validated Paging**: Malformed page bounds are rejected, never
//!   silently clamped
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use roster::prelude::*;
//!
//! let store = InMemoryStore::new();
//! let group = store.insert_group(Group::new("teamA"))?;
//! store.insert_member(Member::in_group("member1", 10, group.id))?;
//! store.insert_member(Member::in_group("member2", 20, group.id))?;
//!
//! let repo = MemberRepository::new(store);
//!
//! // Unpaginated: every member scored 15 or higher
//! let condition = SearchCondition {
//!     min_score: Some(15),
//!     ..Default::default()
//! };
//! let rows = repo.search(&condition).await?;
//!
//! // Paginated: first page of two, count query skipped when possible
//! let page = repo.search_page(&condition, PageRequest::new(0, 2)?).await?;
//! assert_eq!(page.meta.total, 1);
//! ```

pub mod config;
pub mod core;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        condition::SearchCondition,
        entity::{Group, Member},
        error::SearchError,
        predicate::{Conjunction, Predicate},
        projection::MemberGroupRow,
        query::{Direction, Page, PageMeta, PageRequest, SortKey, SortOrder},
        repository::MemberRepository,
        store::SearchBackend,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::SearchConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
