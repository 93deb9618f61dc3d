//! Condition evaluator

use crate::condition::ast::{ConditionNode, ConditionSet, ConjunctiveGroup, Logic, Predicate, Relation};
use ahash::AHashMap;

/// Characteristic values of a character, keyed by characteristic name
///
/// Characteristics that were never set read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Characteristics {
    values: AHashMap<String, i32>,
}

impl Characteristics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, characteristic: impl Into<String>, value: i32) {
        self.values.insert(characteristic.into(), value);
    }

    pub fn with(mut self, characteristic: impl Into<String>, value: i32) -> Self {
        self.set(characteristic, value);
        self
    }

    pub fn get(&self, characteristic: &str) -> i32 {
        self.values.get(characteristic).copied().unwrap_or(0)
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for Characteristics {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl Predicate {
    /// Whether `value` satisfies this comparison against the threshold
    pub fn holds(&self, value: i32) -> bool {
        match self.relation {
            Relation::Less => value < self.threshold,
            Relation::LessEqual => value <= self.threshold,
            Relation::Equal => value == self.threshold,
            Relation::GreaterEqual => value >= self.threshold,
            Relation::Greater => value > self.threshold,
            Relation::NotEqual => value != self.threshold,
        }
    }

    pub fn is_satisfied_by(&self, characteristics: &Characteristics) -> bool {
        self.holds(characteristics.get(&self.characteristic))
    }
}

impl ConditionNode {
    /// Evaluate the tree directly, without normalizing it
    ///
    /// AND over no children is true, OR over no children is false.
    pub fn evaluate(&self, characteristics: &Characteristics) -> bool {
        match self {
            ConditionNode::Leaf(predicate) => predicate.is_satisfied_by(characteristics),
            ConditionNode::Internal {
                logic: Logic::And,
                children,
            } => children.iter().all(|c| c.evaluate(characteristics)),
            ConditionNode::Internal {
                logic: Logic::Or,
                children,
            } => children.iter().any(|c| c.evaluate(characteristics)),
        }
    }
}

impl ConjunctiveGroup {
    pub fn is_satisfied_by(&self, characteristics: &Characteristics) -> bool {
        self.predicates.iter().all(|p| p.is_satisfied_by(characteristics))
    }
}

impl ConditionSet {
    /// An unconditional set is always satisfied
    ///
    /// A tree that expands to no groups, such as `AND(A, OR[])`, therefore
    /// reads as satisfied here while `ConditionNode::evaluate` returns false.
    pub fn is_satisfied_by(&self, characteristics: &Characteristics) -> bool {
        self.is_unconditional() || self.groups.iter().any(|g| g.is_satisfied_by(characteristics))
    }
}
