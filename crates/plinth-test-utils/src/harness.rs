// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context-building helpers for tests.

use std::sync::Arc;

use plinth_core::Identity;
use plinth_plugin::{ExecutionContext, PluginRegistry};

use crate::identity::StaticIdentityProvider;

/// A context whose caller resolves to the given id and scopes.
pub fn context_with_scopes(
    registry: Arc<PluginRegistry>,
    id: &str,
    scopes: &[&str],
) -> ExecutionContext {
    let identity = Identity::new(id).with_scopes(scopes.iter().copied());
    ExecutionContext::builder(registry)
        .with_identity_provider(Arc::new(StaticIdentityProvider::new(identity)))
        .build()
}

/// A context whose caller always resolves as anonymous.
pub fn anonymous_context(registry: Arc<PluginRegistry>) -> ExecutionContext {
    ExecutionContext::builder(registry)
        .with_identity_provider(Arc::new(StaticIdentityProvider::anonymous()))
        .build()
}
