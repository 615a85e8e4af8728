// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The capability gate.
//!
//! A gate is pure composition: the wrapped resolver holds only the
//! required scope string and a handle to the inner behavior, never the
//! identity itself, which arrives per-call through the execution
//! context. The same gated instance is shared across concurrent calls.
//!
//! Gating is fail-closed: an anonymous caller (including an identity
//! provider failure, which the context downgrades to anonymous) is
//! denied for every scope.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use plinth_core::{Identity, ResolverResponse};
use plinth_plugin::{ExecutionContext, Resolver, ResolverMiddleware, SharedResolver};

/// Full-access scope token. An identity granted `"*"` passes every gate.
pub const WILDCARD_SCOPE: &str = "*";

/// Build a gate requiring the given scope.
///
/// Composition order is explicit at the call site: in
/// `a.wrap(b.wrap(base))` the outermost gate `a` is checked first and
/// short-circuits before `b` or `base` run.
pub fn has_scope(scope: impl Into<String>) -> ScopeGate {
    ScopeGate {
        required: scope.into(),
    }
}

/// Returns true if the identity satisfies the scope, directly or via the
/// wildcard. Inline form for checks inside resolver bodies.
pub fn identity_has_scope(scope: &str, identity: &Identity) -> bool {
    identity.has_scope(scope) || identity.has_scope(WILDCARD_SCOPE)
}

/// A capability gate for one required scope.
#[derive(Debug, Clone)]
pub struct ScopeGate {
    required: String,
}

impl ScopeGate {
    /// The scope this gate requires.
    pub fn required_scope(&self) -> &str {
        &self.required
    }

    /// Wrap a resolver, returning one with an identical signature that
    /// enforces the scope check before delegating.
    pub fn wrap(&self, inner: SharedResolver) -> SharedResolver {
        Arc::new(GatedResolver {
            required: self.required.clone(),
            inner,
        })
    }
}

impl ResolverMiddleware for ScopeGate {
    fn wrap(&self, inner: SharedResolver) -> SharedResolver {
        ScopeGate::wrap(self, inner)
    }
}

struct GatedResolver {
    required: String,
    inner: SharedResolver,
}

#[async_trait]
impl Resolver for GatedResolver {
    async fn resolve(&self, args: &Value, ctx: &ExecutionContext) -> ResolverResponse {
        let Some(identity) = ctx.identity().await else {
            tracing::debug!(scope = %self.required, "denying anonymous caller");
            return ResolverResponse::forbidden("Not authorized: no identity.");
        };

        if identity_has_scope(&self.required, &identity) {
            return self.inner.resolve(args, ctx).await;
        }

        tracing::debug!(
            scope = %self.required,
            identity = %identity.id,
            "denying caller without required scope"
        );
        ResolverResponse::forbidden(format!(
            "Not authorized: missing required scope \"{}\".",
            self.required
        ))
    }
}
