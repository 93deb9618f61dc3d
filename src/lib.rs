//! Item Catalog Core - condition normalizer and entity mapper for game items
//!
//! This crate turns decoded source documents describing equipment, weapons
//! and item sets into a normalized entity model. Eligibility rules are
//! expanded from nested AND/OR trees into disjunctive normal form.
//!
//! Everything here is pure computation over `serde_json::Value` input;
//! fetching documents and storing entities belong to the caller.
//!
//! ```
//! use item_catalog_core::mapper::map_equipment;
//! use serde_json::json;
//!
//! let ring = map_equipment(&json!({
//!     "name": "Gobball Ring",
//!     "level": 8,
//!     "type": {"name": "Ring"},
//!     "is_weapon": false,
//!     "effects": [
//!         {"type": {"name": "Vitality"}, "int_minimum": 5, "int_maximum": 10}
//!     ]
//! }))
//! .unwrap();
//!
//! assert_eq!(ring.category, "Ring");
//! assert!(ring.condition_set.is_unconditional());
//! ```

pub mod condition;
pub mod config;
pub mod effect;
pub mod entity;
pub mod error;
pub mod mapper;
pub mod source;

pub use crate::config::MapperConfig;
pub use crate::entity::{Equipment, EquipmentKind, Set, SetBonusTier, WeaponProfile};
pub use crate::error::{CatalogError, Result};
pub use crate::mapper::EntityMapper;
