// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock collaborators for Plinth integration tests.
//!
//! Provides deterministic stand-ins for every collaborator interface the
//! kernel consumes: identity providers, resolvers, hooks, and entity
//! fetchers, plus context-building helpers.

pub mod fetcher;
pub mod harness;
pub mod hooks;
pub mod identity;
pub mod resolvers;

pub use fetcher::{FailingFetcher, InMemoryFetcher};
pub use harness::{anonymous_context, context_with_scopes};
pub use hooks::{hook_log, FailingHook, HookLog, PanickingHook, RecordingHook};
pub use identity::{FailingIdentityProvider, StaticIdentityProvider};
pub use resolvers::CountingResolver;
