// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin records: immutable, typed units of registered extension
//! behavior.
//!
//! A record's payload is a tagged union over the behavior shapes the
//! platform registers. The registry stores payloads without inspecting
//! them; each composition layer validates the variant it expects for its
//! own type namespace (`as_schema`, `as_hook`, ...).

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;

use crate::behavior::{HookHandler, ResolverMiddleware, SharedHook, SharedResolver};

/// A schema fragment: type definitions plus a field-name -> resolver map.
///
/// Field keys are `"ParentType.fieldName"` (e.g. `"SecurityQuery.getUser"`).
#[derive(Clone)]
pub struct SchemaFragment {
    /// GraphQL SDL fragment contributed by this plugin.
    pub type_defs: String,
    /// Resolvers for the fields this fragment declares.
    pub resolvers: BTreeMap<String, SharedResolver>,
}

impl SchemaFragment {
    pub fn new(type_defs: impl Into<String>) -> Self {
        Self {
            type_defs: type_defs.into(),
            resolvers: BTreeMap::new(),
        }
    }

    /// Bind a resolver to a field, consuming and returning the fragment.
    pub fn with_field(mut self, field: impl Into<String>, resolver: SharedResolver) -> Self {
        self.resolvers.insert(field.into(), resolver);
        self
    }
}

impl std::fmt::Debug for SchemaFragment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaFragment")
            .field("type_defs_len", &self.type_defs.len())
            .field("fields", &self.resolvers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The polymorphic behavior payload of a plugin record.
#[derive(Clone)]
pub enum PluginPayload {
    /// A typeDefs + resolvers bundle for schema assembly.
    Schema(SchemaFragment),
    /// A lifecycle hook callable.
    Hook(SharedHook),
    /// A resolver-wrapping middleware (e.g. a capability gate).
    Middleware(Arc<dyn ResolverMiddleware>),
    /// Static data consumed by a composition layer.
    Data(Value),
}

impl PluginPayload {
    pub fn as_schema(&self) -> Option<&SchemaFragment> {
        match self {
            Self::Schema(fragment) => Some(fragment),
            _ => None,
        }
    }

    pub fn as_hook(&self) -> Option<&SharedHook> {
        match self {
            Self::Hook(hook) => Some(hook),
            _ => None,
        }
    }

    pub fn as_middleware(&self) -> Option<&Arc<dyn ResolverMiddleware>> {
        match self {
            Self::Middleware(mw) => Some(mw),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&Value> {
        match self {
            Self::Data(value) => Some(value),
            _ => None,
        }
    }

    /// Short shape tag used in diagnostics.
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            Self::Schema(_) => "schema",
            Self::Hook(_) => "hook",
            Self::Middleware(_) => "middleware",
            Self::Data(_) => "data",
        }
    }
}

impl std::fmt::Debug for PluginPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Schema(fragment) => f.debug_tuple("Schema").field(fragment).finish(),
            Self::Hook(_) => f.write_str("Hook(..)"),
            Self::Middleware(_) => f.write_str("Middleware(..)"),
            Self::Data(value) => f.debug_tuple("Data").field(value).finish(),
        }
    }
}

/// An immutable descriptor for one registered extension behavior.
///
/// `name` is unique within a `plugin_type` namespace, not globally;
/// it is used for diagnostics and targeted lookup.
#[derive(Debug, Clone)]
pub struct PluginRecord {
    pub name: String,
    pub plugin_type: String,
    pub payload: PluginPayload,
}

impl PluginRecord {
    /// A record carrying a schema fragment.
    pub fn schema(
        name: impl Into<String>,
        plugin_type: impl Into<String>,
        fragment: SchemaFragment,
    ) -> Self {
        Self {
            name: name.into(),
            plugin_type: plugin_type.into(),
            payload: PluginPayload::Schema(fragment),
        }
    }

    /// A record carrying a lifecycle hook.
    pub fn hook(
        name: impl Into<String>,
        plugin_type: impl Into<String>,
        handler: impl HookHandler + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            plugin_type: plugin_type.into(),
            payload: PluginPayload::Hook(Arc::new(handler)),
        }
    }

    /// A record carrying a resolver middleware.
    pub fn middleware(
        name: impl Into<String>,
        plugin_type: impl Into<String>,
        middleware: impl ResolverMiddleware + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            plugin_type: plugin_type.into(),
            payload: PluginPayload::Middleware(Arc::new(middleware)),
        }
    }

    /// A record carrying static data.
    pub fn data(
        name: impl Into<String>,
        plugin_type: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            name: name.into(),
            plugin_type: plugin_type.into(),
            payload: PluginPayload::Data(value),
        }
    }
}

/// Registration input: a single record or an arbitrarily nested group.
///
/// Feature modules expose factories that return bundles of sub-plugins
/// in whatever structure is convenient; the registry flattens the tree
/// in depth-first order before appending, so nesting never affects
/// execution order.
#[derive(Debug)]
pub enum PluginInit {
    Record(PluginRecord),
    Group(Vec<PluginInit>),
}

impl PluginInit {
    /// Flatten the tree depth-first into `out`.
    pub(crate) fn flatten(self, out: &mut Vec<PluginRecord>) {
        match self {
            Self::Record(record) => out.push(record),
            Self::Group(items) => {
                for item in items {
                    item.flatten(out);
                }
            }
        }
    }
}

impl From<PluginRecord> for PluginInit {
    fn from(record: PluginRecord) -> Self {
        Self::Record(record)
    }
}

impl From<Vec<PluginRecord>> for PluginInit {
    fn from(records: Vec<PluginRecord>) -> Self {
        Self::Group(records.into_iter().map(Self::Record).collect())
    }
}

impl From<Vec<PluginInit>> for PluginInit {
    fn from(items: Vec<PluginInit>) -> Self {
        Self::Group(items)
    }
}
