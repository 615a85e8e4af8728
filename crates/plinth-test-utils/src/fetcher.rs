// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory entity fetcher.

use async_trait::async_trait;
use serde_json::Value;

use plinth_core::{EntityFetcher, PlinthError};

/// An entity fetcher over a fixed in-memory collection.
///
/// `find_by_id` matches each entity's `"id"` field; `find` returns the
/// whole collection regardless of the query.
pub struct InMemoryFetcher {
    entities: Vec<Value>,
}

impl InMemoryFetcher {
    pub fn new(entities: Vec<Value>) -> Self {
        Self { entities }
    }

    /// A fetcher with no entities.
    pub fn empty() -> Self {
        Self {
            entities: Vec::new(),
        }
    }
}

#[async_trait]
impl EntityFetcher for InMemoryFetcher {
    async fn find_by_id(&self, id: &str) -> Result<Option<Value>, PlinthError> {
        Ok(self
            .entities
            .iter()
            .find(|e| e.get("id").and_then(Value::as_str) == Some(id))
            .cloned())
    }

    async fn find(&self, _query: &Value) -> Result<Vec<Value>, PlinthError> {
        Ok(self.entities.clone())
    }
}

/// A fetcher whose every call fails, for error-path tests.
pub struct FailingFetcher;

#[async_trait]
impl EntityFetcher for FailingFetcher {
    async fn find_by_id(&self, _id: &str) -> Result<Option<Value>, PlinthError> {
        Err(PlinthError::Fetch {
            message: "mock fetcher failure".into(),
            source: None,
        })
    }

    async fn find(&self, _query: &Value) -> Result<Vec<Value>, PlinthError> {
        Err(PlinthError::Fetch {
            message: "mock fetcher failure".into(),
            source: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn find_by_id_matches_id_field() {
        let fetcher = InMemoryFetcher::new(vec![
            json!({ "id": "a", "title": "first" }),
            json!({ "id": "b", "title": "second" }),
        ]);
        let found = fetcher.find_by_id("b").await.unwrap().unwrap();
        assert_eq!(found["title"], "second");
        assert!(fetcher.find_by_id("c").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_returns_everything() {
        let fetcher = InMemoryFetcher::new(vec![json!({ "id": "a" })]);
        assert_eq!(fetcher.find(&json!({})).await.unwrap().len(), 1);
    }
}
