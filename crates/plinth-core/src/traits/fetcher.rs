// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Data-access collaborator trait.
//!
//! The model/ORM layer is out of scope for Plinth; gated resolvers reach
//! entity data only through this interface, bound to the execution
//! context under a source name (e.g. "SecurityUser").

use async_trait::async_trait;
use serde_json::Value;

use crate::error::PlinthError;

/// Request-scoped data source consumed by fetch resolvers.
#[async_trait]
pub trait EntityFetcher: Send + Sync {
    /// Look up a single entity by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Value>, PlinthError>;

    /// List entities matching a query object. Implementations define the
    /// query shape; an empty object means "list all".
    async fn find(&self, query: &Value) -> Result<Vec<Value>, PlinthError>;
}
