// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! GraphQL composition layer for the Plinth plugin kernel.
//!
//! Feature modules register `graphql-resolver` plugin records carrying
//! schema fragments (type definitions plus field resolvers). At assembly
//! time this crate merges the fragments in registration order into a
//! [`GraphqlSchema`] and executes individual fields against it. Schema
//! *execution* in the GraphQL sense (parsing, selection sets) belongs to
//! an external engine; this layer only guarantees an order-stable merge
//! and typed per-field invocation.

pub mod resolve;
pub mod schema;

pub use resolve::{GetResolver, ListResolver};
pub use schema::{assemble_schema, GraphqlSchema, GRAPHQL_RESOLVER_TYPE};
