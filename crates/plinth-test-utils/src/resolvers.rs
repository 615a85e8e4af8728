// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock resolvers.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;

use plinth_core::ResolverResponse;
use plinth_plugin::{ExecutionContext, Resolver};

/// A resolver that counts its invocations and returns a fixed response.
///
/// The call counter is the standard way to assert that a gate
/// short-circuited before reaching the underlying behavior.
pub struct CountingResolver {
    calls: AtomicUsize,
    response: ResolverResponse,
}

impl CountingResolver {
    /// Resolver returning `ResolverResponse::Data(value)` on every call.
    pub fn returning(value: Value) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response: ResolverResponse::data(value),
        }
    }

    /// Resolver returning the given response on every call.
    pub fn with_response(response: ResolverResponse) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            response,
        }
    }

    /// Number of times `resolve` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Resolver for CountingResolver {
    async fn resolve(&self, _args: &Value, _ctx: &ExecutionContext) -> ResolverResponse {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::anonymous_context;
    use plinth_plugin::PluginRegistry;
    use serde_json::json;
    use std::sync::Arc;

    #[tokio::test]
    async fn counts_every_invocation() {
        let resolver = CountingResolver::returning(json!("x"));
        let ctx = anonymous_context(Arc::new(PluginRegistry::new()));

        assert_eq!(resolver.call_count(), 0);
        resolver.resolve(&json!({}), &ctx).await;
        resolver.resolve(&json!({}), &ctx).await;
        assert_eq!(resolver.call_count(), 2);
    }
}
