//! Equipment and weapon entities

use crate::condition::ConditionSet;
use crate::effect::Effect;
use crate::entity::{EquipmentId, SetId};
use serde::Serialize;

/// An equipment item, generic or weapon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equipment {
    pub id: Option<EquipmentId>,
    pub name: String,
    pub level: i32,
    pub category: String,
    /// Text of the item's special combat ability
    pub combat_effect: Option<String>,
    pub passive_stats: Vec<Effect>,
    /// Empty when the item can be equipped unconditionally
    pub condition_set: ConditionSet,
    pub set_reference: Option<SetId>,
    pub kind: EquipmentKind,
}

/// Variant-specific part of an equipment item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum EquipmentKind {
    Generic,
    Weapon(WeaponProfile),
}

/// Attack characteristics only weapons carry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaponProfile {
    pub attack_stats: Vec<Effect>,
    pub critical_chance: i32,
    pub critical_bonus: Option<i32>,
    pub attack_cost: i32,
    pub hits_per_turn: i32,
    pub range_min: i32,
    pub range_max: i32,
}

impl Equipment {
    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, EquipmentKind::Weapon(_))
    }

    pub fn weapon(&self) -> Option<&WeaponProfile> {
        match &self.kind {
            EquipmentKind::Weapon(profile) => Some(profile),
            EquipmentKind::Generic => None,
        }
    }
}
