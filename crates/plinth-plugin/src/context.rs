// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-request execution context.
//!
//! Created for each inbound request or command and discarded with the
//! response. Carries the registry handle, the identity provider, and the
//! named request-scoped data sources that fetch resolvers consume.
//! An identity resolution failure is logged and treated as an anonymous
//! caller, never escalated.

use std::collections::HashMap;
use std::sync::Arc;

use plinth_core::{EntityFetcher, Identity, IdentityProvider};

use crate::registry::PluginRegistry;

/// Request-scoped view over the registry and collaborator handles.
#[derive(Clone)]
pub struct ExecutionContext {
    registry: Arc<PluginRegistry>,
    identity_provider: Option<Arc<dyn IdentityProvider>>,
    fetchers: HashMap<String, Arc<dyn EntityFetcher>>,
}

impl ExecutionContext {
    /// Start building a context over the given registry.
    pub fn builder(registry: Arc<PluginRegistry>) -> ExecutionContextBuilder {
        ExecutionContextBuilder {
            registry,
            identity_provider: None,
            fetchers: HashMap::new(),
        }
    }

    /// The shared plugin registry (read-only at request time).
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Resolve the caller's identity.
    ///
    /// Returns `None` for anonymous callers, when no provider is bound,
    /// and when the provider fails -- a resolution failure downgrades to
    /// anonymous rather than propagating.
    pub async fn identity(&self) -> Option<Identity> {
        let provider = self.identity_provider.as_ref()?;
        match provider.get_identity().await {
            Ok(identity) => identity,
            Err(err) => {
                tracing::debug!(error = %err, "identity resolution failed, treating caller as anonymous");
                None
            }
        }
    }

    /// Look up a named data source bound to this request.
    pub fn fetcher(&self, name: &str) -> Option<Arc<dyn EntityFetcher>> {
        self.fetchers.get(name).cloned()
    }
}

impl std::fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("registry", &self.registry)
            .field("identity_provider", &self.identity_provider.is_some())
            .field("fetchers", &self.fetchers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`ExecutionContext`].
pub struct ExecutionContextBuilder {
    registry: Arc<PluginRegistry>,
    identity_provider: Option<Arc<dyn IdentityProvider>>,
    fetchers: HashMap<String, Arc<dyn EntityFetcher>>,
}

impl ExecutionContextBuilder {
    /// Bind the identity provider for this request.
    pub fn with_identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity_provider = Some(provider);
        self
    }

    /// Bind a named data source (e.g. "SecurityUser").
    pub fn with_fetcher(
        mut self,
        name: impl Into<String>,
        fetcher: Arc<dyn EntityFetcher>,
    ) -> Self {
        self.fetchers.insert(name.into(), fetcher);
        self
    }

    pub fn build(self) -> ExecutionContext {
        ExecutionContext {
            registry: self.registry,
            identity_provider: self.identity_provider,
            fetchers: self.fetchers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use plinth_core::PlinthError;

    struct FixedIdentity(Option<Identity>);

    #[async_trait]
    impl IdentityProvider for FixedIdentity {
        async fn get_identity(&self) -> Result<Option<Identity>, PlinthError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenIdentity;

    #[async_trait]
    impl IdentityProvider for BrokenIdentity {
        async fn get_identity(&self) -> Result<Option<Identity>, PlinthError> {
            Err(PlinthError::Identity {
                message: "upstream unavailable".into(),
                source: None,
            })
        }
    }

    #[tokio::test]
    async fn identity_is_none_without_provider() {
        let ctx = ExecutionContext::builder(Arc::new(PluginRegistry::new())).build();
        assert!(ctx.identity().await.is_none());
    }

    #[tokio::test]
    async fn identity_comes_from_provider() {
        let identity = Identity::new("user-1").with_scopes(["pages:crud"]);
        let ctx = ExecutionContext::builder(Arc::new(PluginRegistry::new()))
            .with_identity_provider(Arc::new(FixedIdentity(Some(identity.clone()))))
            .build();
        assert_eq!(ctx.identity().await, Some(identity));
    }

    #[tokio::test]
    async fn provider_failure_downgrades_to_anonymous() {
        let ctx = ExecutionContext::builder(Arc::new(PluginRegistry::new()))
            .with_identity_provider(Arc::new(BrokenIdentity))
            .build();
        assert!(ctx.identity().await.is_none());
    }

    #[tokio::test]
    async fn fetcher_lookup_by_name() {
        struct Nothing;

        #[async_trait]
        impl EntityFetcher for Nothing {
            async fn find_by_id(
                &self,
                _id: &str,
            ) -> Result<Option<serde_json::Value>, PlinthError> {
                Ok(None)
            }

            async fn find(
                &self,
                _query: &serde_json::Value,
            ) -> Result<Vec<serde_json::Value>, PlinthError> {
                Ok(Vec::new())
            }
        }

        let ctx = ExecutionContext::builder(Arc::new(PluginRegistry::new()))
            .with_fetcher("SecurityUser", Arc::new(Nothing))
            .build();
        assert!(ctx.fetcher("SecurityUser").is_some());
        assert!(ctx.fetcher("Page").is_none());
    }
}
