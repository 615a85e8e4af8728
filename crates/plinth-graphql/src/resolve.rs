// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic entity-fetch resolvers.
//!
//! `GetResolver` and `ListResolver` bind a field to a named data source
//! on the execution context, covering the common "fetch one by id" and
//! "list matching" field shapes so feature modules only hand-write
//! resolvers with real logic. They are usually composed under a
//! capability gate at the call site.

use async_trait::async_trait;
use serde_json::Value;

use plinth_core::ResolverResponse;
use plinth_plugin::{ExecutionContext, Resolver};

/// Resolves a single entity by the `id` argument.
pub struct GetResolver {
    source: String,
}

impl GetResolver {
    /// Bind to the data source registered under `source` on the context.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[async_trait]
impl Resolver for GetResolver {
    async fn resolve(&self, args: &Value, ctx: &ExecutionContext) -> ResolverResponse {
        let Some(fetcher) = ctx.fetcher(&self.source) else {
            return ResolverResponse::internal(format!(
                "Data source \"{}\" is not bound to this request.",
                self.source
            ));
        };

        let Some(id) = args.get("id").and_then(Value::as_str) else {
            return ResolverResponse::not_found("Missing \"id\" argument.");
        };

        match fetcher.find_by_id(id).await {
            Ok(Some(entity)) => ResolverResponse::data(entity),
            Ok(None) => {
                ResolverResponse::not_found(format!("{} \"{id}\" not found.", self.source))
            }
            Err(err) => {
                tracing::warn!(source = %self.source, error = %err, "entity fetch failed");
                ResolverResponse::internal(err.to_string())
            }
        }
    }
}

/// Resolves a list of entities matching the argument object.
pub struct ListResolver {
    source: String,
}

impl ListResolver {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

#[async_trait]
impl Resolver for ListResolver {
    async fn resolve(&self, args: &Value, ctx: &ExecutionContext) -> ResolverResponse {
        let Some(fetcher) = ctx.fetcher(&self.source) else {
            return ResolverResponse::internal(format!(
                "Data source \"{}\" is not bound to this request.",
                self.source
            ));
        };

        match fetcher.find(args).await {
            Ok(entities) => ResolverResponse::data(Value::Array(entities)),
            Err(err) => {
                tracing::warn!(source = %self.source, error = %err, "entity list failed");
                ResolverResponse::internal(err.to_string())
            }
        }
    }
}
