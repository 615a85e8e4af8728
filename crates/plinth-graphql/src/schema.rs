// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema assembly from registered fragments.

use std::collections::BTreeMap;

use serde_json::Value;

use plinth_core::{PlinthError, ResolverResponse};
use plinth_plugin::{ExecutionContext, PluginRegistry, SharedResolver};

/// Type tag under which feature modules register schema fragments.
pub const GRAPHQL_RESOLVER_TYPE: &str = "graphql-resolver";

/// The merged schema: concatenated type definitions and a flat
/// `"ParentType.fieldName"` -> resolver map.
pub struct GraphqlSchema {
    type_defs: String,
    fields: BTreeMap<String, SharedResolver>,
}

impl GraphqlSchema {
    /// The concatenated SDL of all fragments, in registration order.
    pub fn type_defs(&self) -> &str {
        &self.type_defs
    }

    /// The resolver bound to a field, if any.
    pub fn field(&self, name: &str) -> Option<&SharedResolver> {
        self.fields.get(name)
    }

    /// All bound field names, sorted.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Invoke one field's resolver.
    ///
    /// Every outcome is a typed response: an unknown field yields a
    /// `NOT_FOUND` error envelope, and gates inside the resolver chain
    /// yield `FORBIDDEN` envelopes. Terminal per call; no retry.
    pub async fn execute(
        &self,
        field: &str,
        args: &Value,
        ctx: &ExecutionContext,
    ) -> ResolverResponse {
        match self.fields.get(field) {
            Some(resolver) => resolver.resolve(args, ctx).await,
            None => ResolverResponse::not_found(format!("No resolver for field \"{field}\".")),
        }
    }
}

impl std::fmt::Debug for GraphqlSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphqlSchema")
            .field("type_defs_len", &self.type_defs.len())
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Merge all registered `graphql-resolver` fragments into a schema.
///
/// Fragments merge in registration order. A later fragment redefining a
/// field replaces the earlier binding (logged at debug). A record under
/// the `graphql-resolver` type whose payload is not a schema fragment is
/// a registration bug and fails assembly with `PayloadShape`.
pub fn assemble_schema(registry: &PluginRegistry) -> Result<GraphqlSchema, PlinthError> {
    let mut type_defs = String::new();
    let mut fields: BTreeMap<String, SharedResolver> = BTreeMap::new();

    for record in registry.by_type(GRAPHQL_RESOLVER_TYPE) {
        let fragment = record
            .payload
            .as_schema()
            .ok_or_else(|| PlinthError::PayloadShape {
                plugin_type: record.plugin_type.clone(),
                name: record.name.clone(),
                expected: "schema fragment",
            })?;

        if !type_defs.is_empty() {
            type_defs.push('\n');
        }
        type_defs.push_str(&fragment.type_defs);

        for (field, resolver) in &fragment.resolvers {
            if fields.insert(field.clone(), resolver.clone()).is_some() {
                tracing::debug!(
                    field = %field,
                    plugin = %record.name,
                    "fragment redefines field, later binding wins"
                );
            }
        }
    }

    Ok(GraphqlSchema { type_defs, fields })
}
