//! Condition expression trees and their normalized form

use serde::Serialize;
use std::fmt;

/// Comparison relations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relation {
    /// Less than (<)
    #[serde(rename = "<")]
    Less,
    /// Less than or equal (<=)
    #[serde(rename = "<=")]
    LessEqual,
    /// Equal (=)
    #[serde(rename = "=")]
    Equal,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    GreaterEqual,
    /// Greater than (>)
    #[serde(rename = ">")]
    Greater,
    /// Not equal (!=)
    #[serde(rename = "!=")]
    NotEqual,
}

impl Relation {
    pub const ALL: [Relation; 6] = [
        Relation::Less,
        Relation::LessEqual,
        Relation::Equal,
        Relation::GreaterEqual,
        Relation::Greater,
        Relation::NotEqual,
    ];

    /// Parse the operator string used by the source data
    pub fn from_symbol(symbol: &str) -> Option<Relation> {
        match symbol {
            "<" => Some(Relation::Less),
            "<=" => Some(Relation::LessEqual),
            "=" => Some(Relation::Equal),
            ">=" => Some(Relation::GreaterEqual),
            ">" => Some(Relation::Greater),
            "!=" => Some(Relation::NotEqual),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Relation::Less => "<",
            Relation::LessEqual => "<=",
            Relation::Equal => "=",
            Relation::GreaterEqual => ">=",
            Relation::Greater => ">",
            Relation::NotEqual => "!=",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Single comparison like `Strength >= 400`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Predicate {
    pub relation: Relation,
    pub characteristic: String,
    pub threshold: i32,
}

impl Predicate {
    pub fn new(characteristic: impl Into<String>, relation: Relation, threshold: i32) -> Self {
        Self {
            relation,
            characteristic: characteristic.into(),
            threshold,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.characteristic, self.relation, self.threshold)
    }
}

/// Boolean connective of an internal node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Logic {
    And,
    Or,
}

impl Logic {
    /// Parse the relation tag used by the source data
    pub fn from_tag(tag: &str) -> Option<Logic> {
        match tag {
            "and" => Some(Logic::And),
            "or" => Some(Logic::Or),
            _ => None,
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Logic::And => f.write_str("AND"),
            Logic::Or => f.write_str("OR"),
        }
    }
}

/// Condition expression tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionNode {
    Leaf(Predicate),
    Internal {
        logic: Logic,
        children: Vec<ConditionNode>,
    },
}

impl ConditionNode {
    pub fn leaf(predicate: Predicate) -> Self {
        ConditionNode::Leaf(predicate)
    }

    pub fn and(children: Vec<ConditionNode>) -> Self {
        ConditionNode::Internal {
            logic: Logic::And,
            children,
        }
    }

    pub fn or(children: Vec<ConditionNode>) -> Self {
        ConditionNode::Internal {
            logic: Logic::Or,
            children,
        }
    }
}

/// Predicates that must all hold
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConjunctiveGroup {
    pub predicates: Vec<Predicate>,
}

impl ConjunctiveGroup {
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Self { predicates }
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}

/// Disjunction of conjunctive groups
///
/// An empty set places no constraint at all. It is not the same value as a
/// set holding one empty group, even though both are always satisfied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConditionSet {
    pub groups: Vec<ConjunctiveGroup>,
}

impl ConditionSet {
    pub fn unconditional() -> Self {
        Self::default()
    }

    pub fn new(groups: Vec<ConjunctiveGroup>) -> Self {
        Self { groups }
    }

    pub fn is_unconditional(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups as plain predicate slices, handy for comparisons
    pub fn as_slices(&self) -> Vec<&[Predicate]> {
        self.groups.iter().map(|g| g.predicates.as_slice()).collect()
    }
}
