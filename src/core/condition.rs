//! Search conditions and their translation into predicates

use serde::{Deserialize, Serialize};

use crate::core::predicate::Predicate;

/// A structured search condition over members and their groups.
///
/// Every field is independently optional; an absent field imposes no
/// constraint, so the all-unset condition matches every member. The
/// condition is read-only to the search layer: it is constructed by
/// the caller (often deserialized from a request) and translated into
/// predicates without being mutated.
///
/// # Example
/// ```rust,ignore
/// // members scored 20..=40, in group "teamA", any name
/// let condition = SearchCondition {
///     group: Some("teamA".to_string()),
///     min_score: Some(20),
///     max_score: Some(40),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCondition {
    /// Exact member name to match
    pub name: Option<String>,

    /// Exact group name to match
    pub group: Option<String>,

    /// Lower score bound (inclusive)
    ///
    /// Optional so that "unset" stays distinguishable from a bound of
    /// zero.
    pub min_score: Option<i64>,

    /// Upper score bound (inclusive)
    pub max_score: Option<i64>,
}

impl SearchCondition {
    /// Translate this condition into its predicate list.
    ///
    /// One predicate per set filter, in fixed order: name, group,
    /// min_score, max_score. A missing filter yields no predicate
    /// rather than a predicate that always matches, so the returned
    /// list has between zero and four entries. Pure and stateless:
    /// the same condition always yields the same predicates in the
    /// same order.
    pub fn predicates(&self) -> Vec<Predicate> {
        [
            name_eq(self.name.as_deref()),
            group_eq(self.group.as_deref()),
            score_goe(self.min_score),
            score_loe(self.max_score),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Whether no filter is set (the condition matches everything)
    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none()
            && self.group.is_none()
            && self.min_score.is_none()
            && self.max_score.is_none()
    }
}

/// Equality on member name, skipped when the value is empty after trimming
fn name_eq(name: Option<&str>) -> Option<Predicate> {
    name.filter(|s| !s.trim().is_empty())
        .map(|s| Predicate::NameEq(s.to_string()))
}

/// Equality on group name, skipped when the value is empty after trimming
fn group_eq(group: Option<&str>) -> Option<Predicate> {
    group
        .filter(|s| !s.trim().is_empty())
        .map(|s| Predicate::GroupEq(s.to_string()))
}

/// Lower score bound, skipped when unset
fn score_goe(min: Option<i64>) -> Option<Predicate> {
    min.map(Predicate::ScoreGoe)
}

/// Upper score bound, skipped when unset
fn score_loe(max: Option<i64>) -> Option<Predicate> {
    max.map(Predicate::ScoreLoe)
}
