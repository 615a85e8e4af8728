// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin records, the ordered registry, and the execution context.
//!
//! Feature modules describe their extension behavior as [`PluginRecord`]s
//! (a resolver bundle, a hook, a middleware, or static data, tagged by a
//! type string) and register them -- possibly as arbitrarily nested
//! groups -- into a process-wide [`PluginRegistry`] during startup.
//! Composition layers query the registry by type at request time through
//! the per-request [`ExecutionContext`].

pub mod behavior;
pub mod context;
pub mod record;
pub mod registry;

pub use behavior::{HookHandler, Resolver, ResolverMiddleware, SharedHook, SharedResolver};
pub use context::{ExecutionContext, ExecutionContextBuilder};
pub use record::{PluginInit, PluginPayload, PluginRecord, SchemaFragment};
pub use registry::PluginRegistry;
