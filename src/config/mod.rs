//! Mapper configuration
//!
//! Defaults reproduce the source data conventions; a JSON document can
//! override any subset of them.

use crate::condition::{EmptyOperatorPolicy, NormalizeOptions};
use crate::error::{CatalogError, Result};
use serde::Deserialize;

/// Effect type name that marks an item's special combat ability
pub const SPECIAL_SPELL_SENTINEL: &str = "-special spell-";

/// Category assigned to every weapon
pub const WEAPON_CATEGORY: &str = "Weapon";

/// Piece count at which a set's first bonus tier activates
pub const FIRST_BONUS_TIER_PIECES: u32 = 2;

/// Configuration for `EntityMapper`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub special_spell_sentinel: String,
    pub weapon_category: String,
    pub empty_operator: EmptyOperatorPolicy,
    /// Upper bound on groups per normalized condition set, `None` for no bound
    pub max_condition_groups: Option<usize>,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            special_spell_sentinel: SPECIAL_SPELL_SENTINEL.to_string(),
            weapon_category: WEAPON_CATEGORY.to_string(),
            empty_operator: EmptyOperatorPolicy::default(),
            max_condition_groups: None,
        }
    }
}

impl MapperConfig {
    /// Parse a configuration document; missing keys keep their defaults
    pub fn from_json_str(document: &str) -> Result<Self> {
        let config: MapperConfig = serde_json::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.special_spell_sentinel.is_empty() {
            return Err(CatalogError::Config(
                "special_spell_sentinel must not be empty".to_string(),
            ));
        }
        if self.weapon_category.is_empty() {
            return Err(CatalogError::Config(
                "weapon_category must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            empty_operator: self.empty_operator,
            max_groups: self.max_condition_groups,
        }
    }
}
