//! Disjunctive normal form expansion of condition trees

use crate::condition::ast::{ConditionNode, ConditionSet, ConjunctiveGroup, Logic, Predicate};
use crate::error::{CatalogError, Result};
use crate::source::FieldPath;
use serde::Deserialize;

/// How AND/OR nodes without children are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyOperatorPolicy {
    /// Both AND and OR with no children expand to no groups
    #[default]
    Degenerate,
    /// Fail with `EmptyOperator`
    Reject,
}

/// Checks applied by `normalize_checked`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub empty_operator: EmptyOperatorPolicy,
    pub max_groups: Option<usize>,
}

type Groups = Vec<Vec<Predicate>>;

/// Expand a condition tree into an OR of AND groups
///
/// AND children are combined left to right by cartesian concatenation,
/// seeded with the first child's groups. OR children are concatenated in
/// order. Groups keep the left-to-right predicate order of the tree.
pub fn normalize(tree: &ConditionNode) -> ConditionSet {
    ConditionSet::new(expand(tree).into_iter().map(ConjunctiveGroup::new).collect())
}

/// Like `normalize`, with an absent tree meaning no conditions
pub fn normalize_optional(tree: Option<&ConditionNode>) -> ConditionSet {
    tree.map(normalize).unwrap_or_default()
}

/// `normalize` guarded by the empty-operator policy and the group limit
///
/// Both checks run before expansion, so an oversized tree is rejected
/// without being materialized. Error paths are relative to the tree root.
pub fn normalize_checked(tree: &ConditionNode, options: &NormalizeOptions) -> Result<ConditionSet> {
    if options.empty_operator == EmptyOperatorPolicy::Reject {
        if let Some((path, logic)) = find_empty_operator(tree) {
            return Err(CatalogError::EmptyOperator {
                field_path: path.to_string(),
                logic,
            });
        }
    }

    if let Some(limit) = options.max_groups {
        let groups = group_count(tree);
        if groups > limit {
            return Err(CatalogError::ConditionTooLarge {
                field_path: FieldPath::root().to_string(),
                groups,
                limit,
            });
        }
    }

    let set = normalize(tree);
    tracing::trace!(groups = set.len(), "normalized condition tree");
    Ok(set)
}

/// Number of groups `normalize` would produce, saturating at `usize::MAX`
pub fn group_count(tree: &ConditionNode) -> usize {
    match tree {
        ConditionNode::Leaf(_) => 1,
        ConditionNode::Internal {
            logic: Logic::And,
            children,
        } => {
            if children.is_empty() {
                return 0;
            }
            children
                .iter()
                .fold(1usize, |acc, child| acc.saturating_mul(group_count(child)))
        }
        ConditionNode::Internal {
            logic: Logic::Or,
            children,
        } => children
            .iter()
            .fold(0usize, |acc, child| acc.saturating_add(group_count(child))),
    }
}

/// First AND/OR node without children, in depth-first order
pub fn find_empty_operator(tree: &ConditionNode) -> Option<(FieldPath, Logic)> {
    fn walk(node: &ConditionNode, path: FieldPath) -> Option<(FieldPath, Logic)> {
        match node {
            ConditionNode::Leaf(_) => None,
            ConditionNode::Internal { logic, children } if children.is_empty() => {
                Some((path, *logic))
            }
            ConditionNode::Internal { children, .. } => {
                let base = path.key("children");
                children
                    .iter()
                    .enumerate()
                    .find_map(|(i, child)| walk(child, base.index(i)))
            }
        }
    }
    walk(tree, FieldPath::root())
}

fn expand(node: &ConditionNode) -> Groups {
    match node {
        ConditionNode::Leaf(predicate) => vec![vec![predicate.clone()]],
        ConditionNode::Internal {
            logic: Logic::And,
            children,
        } => {
            // An operand with no groups empties the product; skip building the rest
            if children.iter().any(|child| group_count(child) == 0) {
                return Vec::new();
            }
            let mut acc: Option<Groups> = None;
            for child in children {
                let next = expand(child);
                acc = Some(match acc {
                    None => next,
                    Some(prev) => cross(&prev, &next),
                });
            }
            acc.unwrap_or_default()
        }
        ConditionNode::Internal {
            logic: Logic::Or,
            children,
        } => children.iter().flat_map(expand).collect(),
    }
}

/// Every `l ++ r` for `l` in `left`, `r` in `right`, left-major
fn cross(left: &[Vec<Predicate>], right: &[Vec<Predicate>]) -> Groups {
    let mut out = Vec::with_capacity(left.len().saturating_mul(right.len()));
    for l in left {
        for r in right {
            let mut group = Vec::with_capacity(l.len() + r.len());
            group.extend_from_slice(l);
            group.extend_from_slice(r);
            out.push(group);
        }
    }
    out
}
