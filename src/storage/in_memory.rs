//! In-memory implementation of SearchBackend for testing and development

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::cmp::Reverse;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::core::entity::{Group, Member};
use crate::core::predicate::{Conjunction, Predicate};
use crate::core::projection::MemberGroupRow;
use crate::core::query::{Direction, SortKey, SortOrder};
use crate::core::store::SearchBackend;

/// In-memory member/group store.
///
/// Useful for testing and development. Uses RwLock for thread-safe
/// access; `IndexMap` keeps iteration in insertion order, which is the
/// backend's stable default ordering.
#[derive(Clone)]
pub struct InMemoryStore {
    members: Arc<RwLock<IndexMap<Uuid, Member>>>,
    groups: Arc<RwLock<IndexMap<Uuid, Group>>>,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            members: Arc::new(RwLock::new(IndexMap::new())),
            groups: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Insert a group
    pub fn insert_group(&self, group: Group) -> Result<Group> {
        let mut groups = self
            .groups
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        groups.insert(group.id, group.clone());

        Ok(group)
    }

    /// Insert a member
    pub fn insert_member(&self, member: Member) -> Result<Member> {
        let mut members = self
            .members
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        members.insert(member.id, member.clone());

        Ok(member)
    }

    /// Get a member by id
    pub fn member(&self, id: &Uuid) -> Result<Option<Member>> {
        let members = self
            .members
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(members.get(id).cloned())
    }

    /// List all members in insertion order
    pub fn members(&self) -> Result<Vec<Member>> {
        let members = self
            .members
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(members.values().cloned().collect())
    }

    /// Find members by exact name
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Member>> {
        let members = self
            .members
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(members
            .values()
            .filter(|member| member.name == name)
            .cloned()
            .collect())
    }

    /// Find the members of a group.
    ///
    /// The member → group association is one-directional; this is the
    /// reverse-direction lookup.
    pub fn members_of(&self, group_id: &Uuid) -> Result<Vec<Member>> {
        let members = self
            .members
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(members
            .values()
            .filter(|member| member.group_id.as_ref() == Some(group_id))
            .cloned()
            .collect())
    }

    /// Materialize the left-joined rows matching the conjunction, in
    /// insertion order
    fn matching_rows(&self, predicates: &[Predicate]) -> Result<Vec<MemberGroupRow>> {
        let members = self
            .members
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;
        let groups = self
            .groups
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        let filter = Conjunction::from(predicates);

        // Left outer join: every member keeps its row, with absent
        // group fields when group_id is unset or dangling.
        Ok(members
            .values()
            .map(|member| {
                let group = member.group_id.as_ref().and_then(|id| groups.get(id));
                MemberGroupRow::joined(member, group)
            })
            .filter(|row| filter.matches(row))
            .collect())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sort_rows(rows: &mut [MemberGroupRow], order: SortOrder) {
    match (order.key, order.direction) {
        // Rows arrive in insertion order from materialization.
        (SortKey::Insertion, Direction::Asc) => {}
        (SortKey::Insertion, Direction::Desc) => rows.reverse(),
        (SortKey::Name, Direction::Asc) => rows.sort_by(|a, b| a.name.cmp(&b.name)),
        (SortKey::Name, Direction::Desc) => rows.sort_by(|a, b| b.name.cmp(&a.name)),
        (SortKey::Score, Direction::Asc) => rows.sort_by_key(|r| r.score),
        (SortKey::Score, Direction::Desc) => rows.sort_by_key(|r| Reverse(r.score)),
    }
}

fn window(
    rows: Vec<MemberGroupRow>,
    offset: Option<u64>,
    limit: Option<u64>,
) -> Vec<MemberGroupRow> {
    let offset = offset.unwrap_or(0) as usize;
    let mut rows: Vec<_> = rows.into_iter().skip(offset).collect();
    if let Some(limit) = limit {
        rows.truncate(limit as usize);
    }
    rows
}

#[async_trait]
impl SearchBackend for InMemoryStore {
    async fn query(
        &self,
        predicates: &[Predicate],
        order: SortOrder,
        offset: Option<u64>,
        limit: Option<u64>,
    ) -> Result<Vec<MemberGroupRow>> {
        let mut rows = self.matching_rows(predicates)?;
        sort_rows(&mut rows, order);
        Ok(window(rows, offset, limit))
    }

    async fn count(&self, predicates: &[Predicate]) -> Result<u64> {
        Ok(self.matching_rows(predicates)?.len() as u64)
    }
}
