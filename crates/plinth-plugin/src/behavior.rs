// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Behavior traits carried inside plugin payloads.
//!
//! All three traits are object-safe and shared as `Arc<dyn ...>`: the
//! same behavior instance may be invoked concurrently for many callers,
//! so implementations must be stateless or internally synchronized.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use plinth_core::{PlinthError, ResolverResponse};

use crate::context::ExecutionContext;

/// A field resolver: the behavior behind one GraphQL-style field.
///
/// Resolvers never fault across the call boundary; every outcome,
/// including denial, is a typed [`ResolverResponse`].
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolve(&self, args: &Value, ctx: &ExecutionContext) -> ResolverResponse;
}

/// Shared handle to a resolver, cheap to clone into wrappers.
pub type SharedResolver = Arc<dyn Resolver>;

/// A lifecycle hook invoked by the hook runner.
///
/// Hooks mutate the shared stage payload cumulatively; the runner invokes
/// them strictly in registration order. An `Err` return is isolated and
/// logged by the runner, never propagated to sibling hooks.
#[async_trait]
pub trait HookHandler: Send + Sync {
    async fn on_event(
        &self,
        payload: &mut Value,
        ctx: &ExecutionContext,
    ) -> Result<(), PlinthError>;
}

/// Shared handle to a hook handler.
pub type SharedHook = Arc<dyn HookHandler>;

/// A resolver-to-resolver transform (e.g. a capability gate).
///
/// Middleware composes explicitly at assembly sites:
/// `outer.wrap(inner.wrap(base))` checks `outer` first and short-circuits
/// before reaching `inner` or the base resolver.
pub trait ResolverMiddleware: Send + Sync {
    fn wrap(&self, inner: SharedResolver) -> SharedResolver;
}
