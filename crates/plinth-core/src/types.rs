// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity and scope types shared across the Plinth workspace.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The resolved caller principal for one execution context.
///
/// An identity owns its granted scope set. Gated resolvers receive it
/// per-call through the execution context and never hold on to it past
/// the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Caller id as issued by the identity provider.
    pub id: String,
    /// Granted scope tokens (e.g. "security:user:crud").
    pub scopes: HashSet<String>,
}

impl Identity {
    /// Create an identity with no granted scopes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scopes: HashSet::new(),
        }
    }

    /// Add granted scopes, consuming and returning the identity.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes.extend(scopes.into_iter().map(Into::into));
        self
    }

    /// Returns true if the exact scope token is granted.
    ///
    /// Wildcard handling is the capability gate's concern, not the
    /// identity's; this is a plain set lookup.
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_scope_is_exact_match() {
        let identity = Identity::new("admin").with_scopes(["pages:crud", "menus:crud"]);
        assert!(identity.has_scope("pages:crud"));
        assert!(!identity.has_scope("pages"));
        assert!(!identity.has_scope("users:crud"));
    }

    #[test]
    fn with_scopes_accumulates() {
        let identity = Identity::new("u")
            .with_scopes(["a"])
            .with_scopes(["b", "a"]);
        assert_eq!(identity.scopes.len(), 2);
    }
}
