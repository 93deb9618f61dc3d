//! Normalized catalog entities
//!
//! Entities refer to each other only through identifiers; resolving an
//! `EquipmentId` or `SetId` is up to whoever stores them.

mod equipment;
mod set;

pub use equipment::*;
pub use set::*;

use serde::Serialize;
use std::fmt;

/// Source identifier of an equipment item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EquipmentId(pub u32);

/// Source identifier of an item set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SetId(pub u32);

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "equipment#{}", self.0)
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "set#{}", self.0)
    }
}
