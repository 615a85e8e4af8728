// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide plugin registry.
//!
//! The registry stores records in registration order -- hook consumers
//! treat that order as execution order. Registration happens during an
//! initialization phase before request traffic starts; at request time
//! the registry is read-only and shared via `Arc`.
//!
//! Registration is whole-batch atomic: `register` flattens and validates
//! the entire input before touching the store, so one malformed or
//! duplicate record rejects the call and leaves previously registered
//! entries unchanged. A duplicate `plugin_type` + `name` pair is
//! rejected, never replaced; records are immutable once registered.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use serde_json::Value;

use plinth_core::PlinthError;

use crate::record::{PluginInit, PluginPayload, PluginRecord};

/// Ordered store and typed-lookup index over plugin records.
#[derive(Default)]
pub struct PluginRegistry {
    records: RwLock<Vec<PluginRecord>>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record, a vec of records, or an arbitrarily nested
    /// group of sub-plugins.
    ///
    /// The input tree is flattened depth-first; every flattened record is
    /// validated and checked for `plugin_type` + `name` collisions against
    /// both the store and the rest of the batch before anything is
    /// appended.
    pub fn register(&self, plugins: impl Into<PluginInit>) -> Result<(), PlinthError> {
        let mut batch = Vec::new();
        plugins.into().flatten(&mut batch);

        let mut records = self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let mut seen: HashSet<(String, String)> = records
            .iter()
            .map(|r| (r.plugin_type.clone(), r.name.clone()))
            .collect();

        for record in &batch {
            validate(record)?;
            let key = (record.plugin_type.clone(), record.name.clone());
            if !seen.insert(key) {
                return Err(PlinthError::DuplicatePlugin {
                    plugin_type: record.plugin_type.clone(),
                    name: record.name.clone(),
                });
            }
        }

        for record in &batch {
            tracing::debug!(
                plugin_type = %record.plugin_type,
                name = %record.name,
                shape = record.payload.shape(),
                "registered plugin"
            );
        }
        records.extend(batch);
        Ok(())
    }

    /// All records with the given type, in registration order.
    ///
    /// Returns an empty vec (not an error) when nothing matches.
    pub fn by_type(&self, plugin_type: &str) -> Vec<PluginRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|r| r.plugin_type == plugin_type)
            .cloned()
            .collect()
    }

    /// The first record with the given type and name, if any.
    pub fn by_name(&self, plugin_type: &str, name: &str) -> Option<PluginRecord> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|r| r.plugin_type == plugin_type && r.name == name)
            .cloned()
    }

    /// Clear the backing store. Test/administrative use only; never call
    /// while request traffic is being served.
    pub fn reset(&self) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns the number of registered records.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if no records are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("len", &self.len())
            .finish()
    }
}

/// A record must carry a non-empty name and type, and a payload.
/// `Data(Null)` counts as a missing payload.
fn validate(record: &PluginRecord) -> Result<(), PlinthError> {
    if record.plugin_type.is_empty() {
        return Err(PlinthError::InvalidPlugin {
            reason: format!("record \"{}\" has an empty type", record.name),
        });
    }
    if record.name.is_empty() {
        return Err(PlinthError::InvalidPlugin {
            reason: format!("record of type \"{}\" has an empty name", record.plugin_type),
        });
    }
    if matches!(record.payload, PluginPayload::Data(Value::Null)) {
        return Err(PlinthError::InvalidPlugin {
            reason: format!(
                "record {}/{} has no behavior payload",
                record.plugin_type, record.name
            ),
        });
    }
    Ok(())
}
