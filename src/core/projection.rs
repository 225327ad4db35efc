//! Flattened member/group row returned by search queries

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::entity::{Group, Member};

/// A read-only projection joining a member with its group.
///
/// Rows are materialized fresh on every query and carry no identity
/// beyond the ids they contain. Members without a group keep their row;
/// the group fields are simply `None` (left outer join semantics).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberGroupRow {
    /// Id of the member
    pub member_id: Uuid,

    /// Member name
    pub name: String,

    /// Member score
    pub score: i64,

    /// Id of the member's group, absent when the member has none
    pub group_id: Option<Uuid>,

    /// Name of the member's group, absent when the member has none
    pub group_name: Option<String>,
}

impl MemberGroupRow {
    /// Build a row from a member and its (possibly absent) group.
    ///
    /// The group is whatever the join produced for this member; a
    /// dangling `group_id` on the member yields absent group fields
    /// rather than an error.
    pub fn joined(member: &Member, group: Option<&Group>) -> Self {
        Self {
            member_id: member.id,
            name: member.name.clone(),
            score: member.score,
            group_id: group.map(|g| g.id),
            group_name: group.map(|g| g.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_with_group() {
        let group = Group::new("teamA");
        let member = Member::in_group("alice", 10, group.id);

        let row = MemberGroupRow::joined(&member, Some(&group));
        assert_eq!(row.member_id, member.id);
        assert_eq!(row.name, "alice");
        assert_eq!(row.score, 10);
        assert_eq!(row.group_id, Some(group.id));
        assert_eq!(row.group_name, Some("teamA".to_string()));
    }

    #[test]
    fn test_joined_without_group() {
        let member = Member::new("bob", 20);

        let row = MemberGroupRow::joined(&member, None);
        assert_eq!(row.group_id, None);
        assert_eq!(row.group_name, None);
    }
}
