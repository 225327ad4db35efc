//! Shared test harness for search-layer testing
//!
//! Provides the canonical two-group roster fixture, a backend wrapper
//! that records how often each backend operation runs, and tracing
//! setup for debugging test failures.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod harness;
//! use harness::*;
//! ```

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use roster::prelude::*;

/// Initialize tracing output for a test run (idempotent)
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ---------------------------------------------------------------------------
// Roster fixture — two groups, four members, as in the classic scenario
// ---------------------------------------------------------------------------

/// Handle onto the seeded fixture
pub struct Roster {
    pub store: InMemoryStore,
    pub group_a: Group,
    pub group_b: Group,
}

/// Seed the canonical fixture: groups "teamA"/"teamB", members scored
/// 10 and 20 in teamA, 30 and 40 in teamB, inserted in score order.
pub fn seed_roster() -> Roster {
    let store = InMemoryStore::new();
    let group_a = store.insert_group(Group::new("teamA")).unwrap();
    let group_b = store.insert_group(Group::new("teamB")).unwrap();

    store
        .insert_member(Member::in_group("member1", 10, group_a.id))
        .unwrap();
    store
        .insert_member(Member::in_group("member2", 20, group_a.id))
        .unwrap();
    store
        .insert_member(Member::in_group("member3", 30, group_b.id))
        .unwrap();
    store
        .insert_member(Member::in_group("member4", 40, group_b.id))
        .unwrap();

    Roster {
        store,
        group_a,
        group_b,
    }
}

/// Seed a store with `n` members all scoring 100, in one group
pub fn seed_uniform(n: usize) -> InMemoryStore {
    let store = InMemoryStore::new();
    let group = store.insert_group(Group::new("bulk")).unwrap();
    for i in 0..n {
        store
            .insert_member(Member::in_group(format!("member{}", i + 1), 100, group.id))
            .unwrap();
    }
    store
}

/// Scores of the rows, in result order
pub fn scores(rows: &[MemberGroupRow]) -> Vec<i64> {
    rows.iter().map(|r| r.score).collect()
}

// ---------------------------------------------------------------------------
// CountingBackend — records backend round-trips for count-avoidance tests
// ---------------------------------------------------------------------------

/// Wraps a backend and counts how often each operation is invoked.
///
/// Clones share their counters, so a test can keep a handle while the
/// repository owns the wrapper.
#[derive(Clone)]
pub struct CountingBackend<B> {
    inner: B,
    query_calls: Arc<AtomicUsize>,
    count_calls: Arc<AtomicUsize>,
}

impl<B> CountingBackend<B> {
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            query_calls: Arc::new(AtomicUsize::new(0)),
            count_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of content queries issued so far
    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    /// Number of count queries issued so far
    pub fn count_calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<B: SearchBackend> SearchBackend for CountingBackend<B> {
    async fn query(
        &self,
        predicates: &[Predicate],
        order: SortOrder,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<MemberGroupRow>> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.query(predicates, order, offset, limit).await
    }

    async fn count(&self, predicates: &[Predicate]) -> Result<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.count(predicates).await
    }
}
