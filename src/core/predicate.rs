//! Filter predicates and their AND-composition

use serde::{Deserialize, Serialize};

use crate::core::projection::MemberGroupRow;

/// A single boolean filter condition bound to one field and one operator.
///
/// Predicates are only ever produced from a filter that is actually set,
/// so no variant carries an absent operand. Combining predicates is
/// always a conjunction; see [`Conjunction`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Predicate {
    /// Member name equals the given value
    NameEq(String),

    /// Group name equals the given value
    ///
    /// Members without a group never match: equality against an absent
    /// group field is false, not an error.
    GroupEq(String),

    /// Member score is greater than or equal to the given value
    ScoreGoe(i64),

    /// Member score is less than or equal to the given value
    ScoreLoe(i64),
}

impl Predicate {
    /// Evaluate this predicate against a joined row
    pub fn matches(&self, row: &MemberGroupRow) -> bool {
        match self {
            Predicate::NameEq(name) => row.name == *name,
            Predicate::GroupEq(group) => row.group_name.as_deref() == Some(group.as_str()),
            Predicate::ScoreGoe(min) => row.score >= *min,
            Predicate::ScoreLoe(max) => row.score <= *max,
        }
    }
}

/// An AND-combination of predicates.
///
/// `and` accepts an `Option<Predicate>` so callers can chain
/// conditionally-built predicates without branching: an absent operand
/// is a no-op. An empty conjunction matches every row.
#[derive(Debug, Clone, Default)]
pub struct Conjunction {
    predicates: Vec<Predicate>,
}

impl Conjunction {
    /// Create an empty conjunction (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predicate; `None` leaves the conjunction unchanged
    pub fn and(mut self, predicate: Option<Predicate>) -> Self {
        if let Some(predicate) = predicate {
            self.predicates.push(predicate);
        }
        self
    }

    /// Evaluate the conjunction against a joined row
    pub fn matches(&self, row: &MemberGroupRow) -> bool {
        self.predicates.iter().all(|p| p.matches(row))
    }

    /// Number of predicates in the conjunction
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Whether the conjunction holds no predicates (match-all)
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Consume the conjunction, yielding its predicates in insertion order
    pub fn into_predicates(self) -> Vec<Predicate> {
        self.predicates
    }
}

impl From<&[Predicate]> for Conjunction {
    fn from(predicates: &[Predicate]) -> Self {
        Self {
            predicates: predicates.to_vec(),
        }
    }
}

impl FromIterator<Predicate> for Conjunction {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}
