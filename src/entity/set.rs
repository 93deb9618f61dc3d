//! Item set entities

use crate::effect::Effect;
use crate::entity::{EquipmentId, SetId};
use serde::Serialize;

/// A named group of items granting bonuses when worn together
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Set {
    pub id: Option<SetId>,
    pub name: String,
    pub items: Vec<EquipmentId>,
    pub bonus_tiers: Vec<SetBonusTier>,
}

/// Bonuses unlocked once `required_pieces` items of the set are equipped
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetBonusTier {
    pub required_pieces: u32,
    pub stats: Vec<Effect>,
}

impl Set {
    /// Tier active when `equipped` pieces are worn, if any
    pub fn active_tier(&self, equipped: u32) -> Option<&SetBonusTier> {
        self.bonus_tiers
            .iter()
            .rev()
            .find(|tier| tier.required_pieces <= equipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(required_pieces: u32) -> SetBonusTier {
        SetBonusTier {
            required_pieces,
            stats: vec![Effect::new("Vitality", required_pieces as i32 * 10, None)],
        }
    }

    #[test]
    fn test_active_tier() {
        let set = Set {
            id: Some(SetId(1)),
            name: "Gobball Set".to_string(),
            items: vec![],
            bonus_tiers: vec![tier(2), tier(3), tier(4)],
        };

        assert!(set.active_tier(1).is_none());
        assert_eq!(set.active_tier(2).map(|t| t.required_pieces), Some(2));
        assert_eq!(set.active_tier(3).map(|t| t.required_pieces), Some(3));
        assert_eq!(set.active_tier(8).map(|t| t.required_pieces), Some(4));
    }
}
