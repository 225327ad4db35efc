//! Member and group records, the two entity kinds the search layer reads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A group that members can belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier for this group
    pub id: Uuid,

    /// Human-readable group name (e.g., "teamA")
    pub name: String,

    /// When this group was created
    pub created_at: DateTime<Utc>,

    /// When this group was last updated
    pub updated_at: DateTime<Utc>,
}

impl Group {
    /// Create a new group
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A member record with a score and an optional group membership.
///
/// The member → group association is a one-directional foreign key.
/// Groups hold no back-collection of their members; the reverse
/// direction is a lookup on the store (see
/// [`InMemoryStore::members_of`](crate::storage::InMemoryStore::members_of)).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier for this member
    pub id: Uuid,

    /// Human-readable member name
    pub name: String,

    /// Numeric score used by range filters
    pub score: i64,

    /// The group this member belongs to, if any
    ///
    /// `None` means the member is not in any group. Searches still
    /// find such members; their group fields come back absent.
    pub group_id: Option<Uuid>,

    /// Optional metadata for the member
    ///
    /// Can store additional context like contact details or tags.
    pub metadata: Option<serde_json::Value>,

    /// When this member was created
    pub created_at: DateTime<Utc>,

    /// When this member was last updated
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Create a new member with no group membership
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            score,
            group_id: None,
            metadata: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new member belonging to the given group
    pub fn in_group(name: impl Into<String>, score: i64, group_id: Uuid) -> Self {
        Self {
            group_id: Some(group_id),
            ..Self::new(name, score)
        }
    }

    /// Attach metadata to this member
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
