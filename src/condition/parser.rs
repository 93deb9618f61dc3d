//! Condition tree reader for source documents

use crate::condition::ast::{ConditionNode, Logic, Predicate, Relation};
use crate::error::Result;
use crate::source::Node;

/// Read a source condition node into a `ConditionNode`
///
/// Operand nodes look like
/// `{"is_operand": true, "condition": {"operator", "element": {"name"}, "int_value"}}`,
/// internal nodes like `{"relation": "and" | "or", "children": [...]}`.
/// A missing or `null` children list reads as empty.
pub fn parse_condition_tree(node: &Node<'_>) -> Result<ConditionNode> {
    if node.bool_field_or("is_operand", false)? {
        return parse_operand(&node.field("condition")?).map(ConditionNode::Leaf);
    }

    let relation = node.field("relation")?;
    let tag = relation.as_str()?;
    let logic = Logic::from_tag(tag)
        .ok_or_else(|| relation.malformed(format!("unrecognized relation `{}`", tag)))?;

    let children = match node.field_opt("children")? {
        Some(list) => list
            .elements()?
            .iter()
            .map(parse_condition_tree)
            .collect::<Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    Ok(ConditionNode::Internal { logic, children })
}

fn parse_operand(condition: &Node<'_>) -> Result<Predicate> {
    let operator = condition.field("operator")?;
    let symbol = operator.as_str()?;
    let relation = Relation::from_symbol(symbol)
        .ok_or_else(|| operator.malformed(format!("unrecognized operator `{}`", symbol)))?;

    let characteristic = condition.field("element")?.str_field("name")?;
    let threshold = condition.i32_field("int_value")?;

    Ok(Predicate::new(characteristic, relation, threshold))
}
