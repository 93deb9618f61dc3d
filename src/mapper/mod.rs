//! Mapping of raw source records into catalog entities
//!
//! `EntityMapper` holds only its configuration, so a single instance can be
//! shared freely and every mapping call is independent of the others.

mod equipment;
mod page;
mod set;


pub use page::*;

use crate::config::MapperConfig;
use crate::entity::{Equipment, Set};
use crate::error::Result;
use serde_json::Value;

/// Maps source item and set records
#[derive(Debug, Clone, Default)]
pub struct EntityMapper {
    config: MapperConfig,
}

impl EntityMapper {
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }
}

/// Map one equipment record with the default configuration
pub fn map_equipment(raw_item: &Value) -> Result<Equipment> {
    EntityMapper::default().map_equipment(raw_item)
}

/// Map one set record with the default configuration
pub fn map_set(raw_set: &Value) -> Result<Set> {
    EntityMapper::default().map_set(raw_set)
}
