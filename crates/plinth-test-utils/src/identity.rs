// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock identity providers.

use async_trait::async_trait;

use plinth_core::{Identity, IdentityProvider, PlinthError};

/// An identity provider that always returns the same identity (or
/// anonymous, when constructed with `None`).
pub struct StaticIdentityProvider {
    identity: Option<Identity>,
}

impl StaticIdentityProvider {
    /// Provider resolving to the given identity.
    pub fn new(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    /// Provider resolving every caller as anonymous.
    pub fn anonymous() -> Self {
        Self { identity: None }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn get_identity(&self) -> Result<Option<Identity>, PlinthError> {
        Ok(self.identity.clone())
    }
}

/// An identity provider that always fails, for exercising the
/// downgrade-to-anonymous path.
pub struct FailingIdentityProvider;

#[async_trait]
impl IdentityProvider for FailingIdentityProvider {
    async fn get_identity(&self) -> Result<Option<Identity>, PlinthError> {
        Err(PlinthError::Identity {
            message: "mock identity provider failure".into(),
            source: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_returns_identity() {
        let provider = StaticIdentityProvider::new(Identity::new("u1"));
        let identity = provider.get_identity().await.unwrap().unwrap();
        assert_eq!(identity.id, "u1");
    }

    #[tokio::test]
    async fn anonymous_provider_returns_none() {
        let provider = StaticIdentityProvider::anonymous();
        assert!(provider.get_identity().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failing_provider_errors() {
        assert!(FailingIdentityProvider.get_identity().await.is_err());
    }
}
