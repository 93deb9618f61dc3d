//! Whole-page mapping
//!
//! Source pages carry records under `items` or `sets`. Each record is
//! mapped on its own: a malformed record yields an error in its slot and
//! the remaining records are still mapped.

use crate::entity::{Equipment, Set};
use crate::error::{CatalogError, Result};
use crate::mapper::EntityMapper;
use crate::source::Node;
use serde_json::Value;

impl EntityMapper {
    /// Map every record of an `{"items": [...]}` page, in source order
    ///
    /// Failing records keep their slot; their error paths start at
    /// `items[i]`. Only a missing or non-array `items` fails the call.
    pub fn map_equipment_page(&self, page: &Value) -> Result<Vec<Result<Equipment>>> {
        self.map_page(page, "items", |mapper, record| mapper.map_equipment(record))
    }

    /// Map every record of a `{"sets": [...]}` page, in source order
    pub fn map_set_page(&self, page: &Value) -> Result<Vec<Result<Set>>> {
        self.map_page(page, "sets", |mapper, record| mapper.map_set(record))
    }

    fn map_page<T>(
        &self,
        page: &Value,
        list: &'static str,
        map_record: impl Fn(&Self, &Value) -> Result<T>,
    ) -> Result<Vec<Result<T>>> {
        let records = Node::root(page).field(list)?.elements()?;

        let results: Vec<Result<T>> = records
            .iter()
            .map(|record| {
                let parent = record.path().to_string();
                map_record(self, record.value()).map_err(|err| {
                    let err = err.within(&parent);
                    tracing::warn!(error = %err, "skipping malformed record");
                    err
                })
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::debug!(
            list,
            mapped = results.len() - failed,
            failed,
            "mapped source page"
        );

        Ok(results)
    }
}

/// Split page results into mapped entities and errors, keeping order
pub fn partition_results<T>(results: Vec<Result<T>>) -> (Vec<T>, Vec<CatalogError>) {
    let mut mapped = Vec::with_capacity(results.len());
    let mut errors = Vec::new();
    for result in results {
        match result {
            Ok(entity) => mapped.push(entity),
            Err(err) => errors.push(err),
        }
    }
    (mapped, errors)
}
