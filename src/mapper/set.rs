//! Set record mapping

use crate::config::FIRST_BONUS_TIER_PIECES;
use crate::effect::{parse_effect, Effect};
use crate::entity::{EquipmentId, Set, SetBonusTier, SetId};
use crate::error::Result;
use crate::mapper::EntityMapper;
use crate::source::Node;
use serde_json::Value;

impl EntityMapper {
    /// Map a set record and its bonus tiers
    ///
    /// `effects` is a list of tiers, each a list of stat entries. The tier at
    /// position `i` activates with `i + 2` equipped pieces. Stat entries map
    /// one to one onto effects; the special-spell sentinel has no meaning here.
    pub fn map_set(&self, raw_set: &Value) -> Result<Set> {
        let set = Node::root(raw_set);

        let name = set.str_field("name")?.to_string();
        let id = set.u32_field_opt("ankama_id")?.map(SetId);

        let items = match set.field_opt("equipment_ids")? {
            Some(ids) => ids
                .elements()?
                .iter()
                .map(|id| id.as_u32().map(EquipmentId))
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        let mut bonus_tiers = Vec::new();
        for (position, tier) in (0u32..).zip(set.field("effects")?.elements()?) {
            let stats = tier
                .elements()?
                .iter()
                .map(map_set_stat)
                .collect::<Result<Vec<_>>>()?;
            bonus_tiers.push(SetBonusTier {
                required_pieces: position + FIRST_BONUS_TIER_PIECES,
                stats,
            });
        }

        tracing::debug!(set = %name, tiers = bonus_tiers.len(), items = items.len(), "mapped set");

        Ok(Set {
            id,
            name,
            items,
            bonus_tiers,
        })
    }
}

fn map_set_stat(stat: &Node<'_>) -> Result<Effect> {
    let name = stat.field("type")?.str_field("name")?;
    parse_effect(stat, name)
}
