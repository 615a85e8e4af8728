// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Plinth plugin kernel.
//!
//! This crate provides the error type, identity and scope types, the
//! `{ data, error }` response envelope used by gated resolvers, and the
//! collaborator traits (identity provider, entity fetcher) that host
//! applications implement. The registry, execution context, and behavior
//! traits live in `plinth-plugin`.

pub mod error;
pub mod response;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::PlinthError;
pub use response::{ErrorCode, ErrorResponse, ResolverResponse};
pub use types::Identity;

pub use traits::{EntityFetcher, IdentityProvider};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_variants_render_messages() {
        let invalid = PlinthError::InvalidPlugin {
            reason: "missing type".into(),
        };
        assert!(invalid.to_string().contains("missing type"));

        let duplicate = PlinthError::DuplicatePlugin {
            plugin_type: "graphql-resolver".into(),
            name: "security".into(),
        };
        assert!(duplicate.to_string().contains("graphql-resolver/security"));
    }

    #[test]
    fn identity_round_trips_through_json() {
        let identity = Identity::new("user-1").with_scopes(["pages:crud"]);
        let json = serde_json::to_string(&identity).expect("should serialize");
        let parsed: Identity = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(parsed.id, "user-1");
        assert!(parsed.has_scope("pages:crud"));
    }

    #[test]
    fn error_code_tokens_are_stable() {
        assert_eq!(ErrorCode::Forbidden.to_string(), "FORBIDDEN");
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
        assert_eq!(ErrorCode::Internal.to_string(), "INTERNAL");
    }
}
