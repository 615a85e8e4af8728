// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Plinth plugin kernel.
//!
//! Authorization denial is deliberately *not* an error variant: the
//! capability gate converts it into a typed [`ResolverResponse`]
//! (`FORBIDDEN` envelope) so it never unwinds across a module boundary.
//!
//! [`ResolverResponse`]: crate::response::ResolverResponse

use thiserror::Error;

/// The primary error type used across the Plinth workspace.
#[derive(Debug, Error)]
pub enum PlinthError {
    /// A record submitted to `register` was malformed (empty name or type,
    /// or a missing behavior payload). Rejects the whole batch.
    #[error("invalid plugin: {reason}")]
    InvalidPlugin { reason: String },

    /// A record with the same `plugin_type` + `name` pair is already
    /// registered. Registration is immutable; duplicates are rejected.
    #[error("duplicate plugin: {plugin_type}/{name}")]
    DuplicatePlugin { plugin_type: String, name: String },

    /// A registered record's payload does not have the shape its type
    /// namespace requires (e.g. a data payload under "graphql-resolver").
    #[error("plugin {plugin_type}/{name} has the wrong payload shape, expected {expected}")]
    PayloadShape {
        plugin_type: String,
        name: String,
        expected: &'static str,
    },

    /// Identity provider failure. The execution context treats this as an
    /// anonymous caller; it is surfaced only for provider implementors.
    #[error("identity resolution failed: {message}")]
    Identity {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Entity fetcher failure (backing store unreachable, bad query).
    #[error("fetch error: {message}")]
    Fetch {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A lifecycle hook reported a failure. Absorbed by the hook runner;
    /// this variant exists for hook implementors to return.
    #[error("hook error: {0}")]
    Hook(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_carries_source() {
        let err = PlinthError::Fetch {
            message: "connection refused".into(),
            source: Some(Box::new(std::io::Error::other("socket closed"))),
        };
        assert!(err.to_string().contains("connection refused"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn identity_error_without_source() {
        let err = PlinthError::Identity {
            message: "token expired".into(),
            source: None,
        };
        assert!(std::error::Error::source(&err).is_none());
    }
}
