//! Equipment record mapping

use crate::condition::{normalize_checked, parse_condition_tree, ConditionSet};
use crate::effect::classify;
use crate::entity::{Equipment, EquipmentId, EquipmentKind, SetId, WeaponProfile};
use crate::error::Result;
use crate::mapper::EntityMapper;
use crate::source::Node;
use serde_json::Value;

impl EntityMapper {
    /// Map an item record into a generic equipment or a weapon
    ///
    /// `is_weapon` selects the variant. Weapons take the fixed weapon
    /// category and keep their active effects as attack stats; generic
    /// items take `type.name` as category and drop active effects.
    pub fn map_equipment(&self, raw_item: &Value) -> Result<Equipment> {
        let item = Node::root(raw_item);

        let name = item.str_field("name")?.to_string();
        let level = item.i32_field("level")?;
        let id = item.u32_field_opt("ankama_id")?.map(EquipmentId);
        let set_reference = match item.field_opt("parent_set")? {
            Some(parent) => Some(SetId(parent.field("id")?.as_u32()?)),
            None => None,
        };

        let condition_set = self.map_conditions(&item)?;

        let effects = item.field("effects")?.elements()?;
        let classified = classify(&effects, &self.config().special_spell_sentinel)?;

        let (category, kind) = if item.bool_field("is_weapon")? {
            let range = item.field("range")?;
            let profile = WeaponProfile {
                attack_stats: classified.active,
                critical_chance: item.i32_field("critical_hit_probability")?,
                critical_bonus: item.i32_field_opt("critical_hit_bonus")?,
                attack_cost: item.i32_field("ap_cost")?,
                hits_per_turn: item.i32_field("max_cast_per_turn")?,
                range_min: range.i32_field("min")?,
                range_max: range.i32_field("max")?,
            };
            (
                self.config().weapon_category.clone(),
                EquipmentKind::Weapon(profile),
            )
        } else {
            if !classified.active.is_empty() {
                tracing::debug!(
                    item = %name,
                    dropped = classified.active.len(),
                    "non-weapon item carries attack effects"
                );
            }
            let category = item.field("type")?.str_field("name")?.to_string();
            (category, EquipmentKind::Generic)
        };

        tracing::debug!(
            item = %name,
            category = %category,
            groups = condition_set.len(),
            "mapped equipment"
        );

        Ok(Equipment {
            id,
            name,
            level,
            category,
            combat_effect: classified.special_text,
            passive_stats: classified.passive,
            condition_set,
            set_reference,
            kind,
        })
    }

    fn map_conditions(&self, item: &Node<'_>) -> Result<ConditionSet> {
        let Some(raw_tree) = item.field_opt("condition_tree")? else {
            return Ok(ConditionSet::unconditional());
        };

        let tree = parse_condition_tree(&raw_tree)?;
        normalize_checked(&tree, &self.config().normalize_options())
            .map_err(|err| err.within(&raw_tree.path().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use crate::condition::{EmptyOperatorPolicy, Predicate, Relation};
    use crate::config::MapperConfig;
    use crate::effect::Effect;
    use crate::entity::{EquipmentId, EquipmentKind, SetId};
    use crate::error::CatalogError;
    use crate::mapper::{map_equipment, EntityMapper};
    use serde_json::{json, Value};

    fn operand(name: &str, operator: &str, value: i32) -> Value {
        json!({
            "is_operand": true,
            "condition": {"operator": operator, "element": {"name": name}, "int_value": value}
        })
    }

    fn hat() -> Value {
        json!({
            "ankama_id": 8243,
            "name": "Gobball Headgear",
            "level": 12,
            "type": {"name": "Hat"},
            "is_weapon": false,
            "effects": [
                {"type": {"name": "Vitality", "is_active": false}, "int_minimum": 11, "int_maximum": 15, "ignore_int_max": false, "formatted": "11 to 15 Vitality"},
                {"type": {"name": "Wisdom", "is_active": false}, "int_minimum": 5, "int_maximum": 0, "ignore_int_max": true, "formatted": "5 Wisdom"}
            ],
            "parent_set": {"id": 1, "name": "Gobball Set"}
        })
    }

    fn sword() -> Value {
        json!({
            "ankama_id": 44,
            "name": "Twiggy Sword",
            "level": 10,
            "type": {"name": "Sword"},
            "is_weapon": true,
            "ap_cost": 4,
            "max_cast_per_turn": 1,
            "critical_hit_probability": 5,
            "critical_hit_bonus": 3,
            "range": {"min": 1, "max": 1},
            "effects": [
                {"type": {"name": "Neutral damage", "is_active": true}, "int_minimum": 6, "int_maximum": 10, "ignore_int_max": false, "formatted": "6 to 10 Neutral damage"},
                {"type": {"name": "Strength", "is_active": false}, "int_minimum": 8, "int_maximum": 12, "ignore_int_max": false, "formatted": "8 to 12 Strength"},
                {"type": {"name": "-special spell-", "is_active": false}, "int_minimum": 0, "int_maximum": 0, "ignore_int_max": true, "formatted": "Steals 1 AP"}
            ],
            "condition_tree": {
                "relation": "and",
                "children": [
                    {"relation": "or", "children": [operand("Strength", ">", 40), operand("Agility", ">", 40)]},
                    operand("Level", ">=", 10)
                ]
            }
        })
    }

    #[test]
    fn test_generic_equipment() {
        let hat = map_equipment(&hat()).unwrap();

        assert_eq!(hat.id, Some(EquipmentId(8243)));
        assert_eq!(hat.name, "Gobball Headgear");
        assert_eq!(hat.level, 12);
        assert_eq!(hat.category, "Hat");
        assert_eq!(hat.kind, EquipmentKind::Generic);
        assert_eq!(hat.combat_effect, None);
        assert_eq!(hat.set_reference, Some(SetId(1)));
        assert!(hat.condition_set.is_unconditional());
        assert_eq!(
            hat.passive_stats,
            vec![
                Effect::new("Vitality", 11, Some(15)),
                Effect::new("Wisdom", 5, None),
            ]
        );
    }

    #[test]
    fn test_weapon() {
        let sword = map_equipment(&sword()).unwrap();

        assert_eq!(sword.category, "Weapon");
        assert_eq!(sword.combat_effect.as_deref(), Some("Steals 1 AP"));
        assert_eq!(sword.passive_stats, vec![Effect::new("Strength", 8, Some(12))]);
        assert_eq!(sword.set_reference, None);

        let profile = sword.weapon().expect("weapon profile");
        assert_eq!(profile.attack_stats, vec![Effect::new("Neutral damage", 6, Some(10))]);
        assert_eq!(profile.critical_chance, 5);
        assert_eq!(profile.critical_bonus, Some(3));
        assert_eq!(profile.attack_cost, 4);
        assert_eq!(profile.hits_per_turn, 1);
        assert_eq!((profile.range_min, profile.range_max), (1, 1));

        assert_eq!(
            sword.condition_set.as_slices(),
            vec![
                &[
                    Predicate::new("Strength", Relation::Greater, 40),
                    Predicate::new("Level", Relation::GreaterEqual, 10),
                ][..],
                &[
                    Predicate::new("Agility", Relation::Greater, 40),
                    Predicate::new("Level", Relation::GreaterEqual, 10),
                ][..],
            ]
        );
    }

    #[test]
    fn test_weapon_without_critical_bonus() {
        let mut raw = sword();
        raw["critical_hit_bonus"] = Value::Null;
        let sword = map_equipment(&raw).unwrap();
        assert_eq!(sword.weapon().unwrap().critical_bonus, None);
    }

    #[test]
    fn test_weapon_ignores_type_name() {
        let mut raw = sword();
        raw.as_object_mut().unwrap().remove("type");
        assert_eq!(map_equipment(&raw).unwrap().category, "Weapon");
    }

    #[test]
    fn test_generic_drops_attack_effects() {
        let mut raw = hat();
        raw["effects"][0]["type"]["is_active"] = json!(true);
        let hat = map_equipment(&raw).unwrap();
        assert_eq!(hat.passive_stats, vec![Effect::new("Wisdom", 5, None)]);
        assert!(hat.weapon().is_none());
    }

    #[test]
    fn test_missing_level() {
        let mut raw = hat();
        raw.as_object_mut().unwrap().remove("level");
        let err = map_equipment(&raw).unwrap_err();
        match err {
            CatalogError::MalformedRecord { field_path, .. } => assert_eq!(field_path, "level"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_weapon_range() {
        let mut raw = sword();
        raw["range"] = json!({"min": 1});
        let err = map_equipment(&raw).unwrap_err();
        assert_eq!(err.field_path(), Some("range.max"));
    }

    #[test]
    fn test_bad_relation_in_condition_tree() {
        let mut raw = sword();
        raw["condition_tree"]["children"][0]["relation"] = json!("nand");
        let err = map_equipment(&raw).unwrap_err();
        assert_eq!(err.field_path(), Some("condition_tree.children[0].relation"));
    }

    #[test]
    fn test_single_operand_condition_tree() {
        let mut raw = hat();
        raw["condition_tree"] = operand("Level", "<", 50);
        let hat = map_equipment(&raw).unwrap();
        assert_eq!(hat.condition_set.len(), 1);
        assert_eq!(
            hat.condition_set.groups[0].predicates,
            vec![Predicate::new("Level", Relation::Less, 50)]
        );
    }

    #[test]
    fn test_null_condition_tree_is_unconditional() {
        let mut raw = hat();
        raw["condition_tree"] = Value::Null;
        assert!(map_equipment(&raw).unwrap().condition_set.is_unconditional());
    }

    #[test]
    fn test_reject_empty_operator() {
        let mut raw = hat();
        raw["condition_tree"] = json!({"relation": "and", "children": [
            operand("Level", "<", 50),
            {"relation": "or", "children": []}
        ]});

        let lenient = map_equipment(&raw).unwrap();
        assert!(lenient.condition_set.is_empty());

        let strict = EntityMapper::new(MapperConfig {
            empty_operator: EmptyOperatorPolicy::Reject,
            ..MapperConfig::default()
        });
        let err = strict.map_equipment(&raw).unwrap_err();
        assert_eq!(err.field_path(), Some("condition_tree.children[1]"));
        assert!(matches!(err, CatalogError::EmptyOperator { .. }));
    }

    #[test]
    fn test_condition_group_limit() {
        let strict = EntityMapper::new(MapperConfig {
            max_condition_groups: Some(1),
            ..MapperConfig::default()
        });
        let err = strict.map_equipment(&sword()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::ConditionTooLarge {
                field_path: "condition_tree".to_string(),
                groups: 2,
                limit: 1,
            }
        );
    }

    #[test]
    fn test_custom_weapon_category() {
        let mapper = EntityMapper::new(MapperConfig {
            weapon_category: "Arme".to_string(),
            ..MapperConfig::default()
        });
        assert_eq!(mapper.map_equipment(&sword()).unwrap().category, "Arme");
    }
}
