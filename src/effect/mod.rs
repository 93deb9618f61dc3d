//! Stat effects and the classification of raw effect entries

use crate::error::Result;
use crate::source::Node;
use serde::Serialize;

/// A stat bonus with a value range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Effect {
    pub name: String,
    pub minimum: i32,
    /// `None` when the range has no upper bound
    pub maximum: Option<i32>,
}

impl Effect {
    pub fn new(name: impl Into<String>, minimum: i32, maximum: Option<i32>) -> Self {
        Self {
            name: name.into(),
            minimum,
            maximum,
        }
    }
}

/// Effects of one item, split by role
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedEffects {
    pub passive: Vec<Effect>,
    /// Weapon attack effects
    pub active: Vec<Effect>,
    pub special_text: Option<String>,
}

/// Read one effect entry: `{type: {name}, int_minimum, int_maximum, ignore_int_max}`
///
/// With `ignore_int_max` set the maximum is unbounded and `int_maximum` is
/// not read. Otherwise a missing `int_maximum` leaves it unbounded too.
pub fn parse_effect(entry: &Node<'_>, name: &str) -> Result<Effect> {
    let minimum = entry.i32_field("int_minimum")?;
    let maximum = if entry.bool_field_or("ignore_int_max", false)? {
        None
    } else {
        entry.i32_field_opt("int_maximum")?
    };
    Ok(Effect::new(name, minimum, maximum))
}

/// Split raw item effects into passive stats, attack stats and special text
///
/// An entry whose type name equals `sentinel` contributes only its
/// `formatted` text; when several do, the last one wins.
pub fn classify(entries: &[Node<'_>], sentinel: &str) -> Result<ClassifiedEffects> {
    let mut classified = ClassifiedEffects::default();

    for entry in entries {
        let kind = entry.field("type")?;
        let name = kind.str_field("name")?;

        if name == sentinel {
            classified.special_text = Some(entry.str_field("formatted")?.to_string());
            continue;
        }

        let effect = parse_effect(entry, name)?;
        if kind.bool_field_or("is_active", false)? {
            classified.active.push(effect);
        } else {
            classified.passive.push(effect);
        }
    }

    Ok(classified)
}
