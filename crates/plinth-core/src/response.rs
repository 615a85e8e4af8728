// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed response envelope for gated resolvers.
//!
//! Resolvers return either data or a structured error object, never an
//! unwinding fault. The envelope serializes to the `{ data, error }`
//! object API callers receive, with `error` carrying a stable code,
//! a human-readable message, and optional extra data.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use strum::{Display, EnumString};

/// Stable error codes surfaced to API callers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    Forbidden,
    NotFound,
    Internal,
}

/// Structured error object carried in a response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
    /// Extra machine-readable detail, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Outcome of one resolver invocation: data or a typed denial/error.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolverResponse {
    Data(Value),
    Error(ErrorResponse),
}

impl ResolverResponse {
    /// Successful result carrying the given value.
    pub fn data(value: Value) -> Self {
        Self::Data(value)
    }

    /// Capability-check denial with the fixed `FORBIDDEN` code.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::error(ErrorCode::Forbidden, message)
    }

    /// Missing-entity result with the `NOT_FOUND` code.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::error(ErrorCode::NotFound, message)
    }

    /// Unexpected failure converted to a typed response.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::error(ErrorCode::Internal, message)
    }

    /// Error result with an explicit code.
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Error(ErrorResponse {
            code,
            message: message.into(),
            data: None,
        })
    }

    /// Returns true if this is a `FORBIDDEN` error response.
    pub fn is_forbidden(&self) -> bool {
        matches!(
            self,
            Self::Error(ErrorResponse {
                code: ErrorCode::Forbidden,
                ..
            })
        )
    }

    /// Convert into the `{ data, error }` wire object.
    pub fn into_envelope(self) -> Value {
        match self {
            Self::Data(data) => json!({ "data": data, "error": null }),
            Self::Error(err) => json!({
                "data": null,
                "error": serde_json::to_value(err).unwrap_or(Value::Null),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_response_has_stable_code() {
        let resp = ResolverResponse::forbidden("missing scope");
        assert!(resp.is_forbidden());

        let envelope = resp.into_envelope();
        assert_eq!(envelope["data"], Value::Null);
        assert_eq!(envelope["error"]["code"], "FORBIDDEN");
        assert_eq!(envelope["error"]["message"], "missing scope");
    }

    #[test]
    fn data_envelope_has_null_error() {
        let resp = ResolverResponse::data(json!({ "id": "page-1" }));
        let envelope = resp.into_envelope();
        assert_eq!(envelope["data"]["id"], "page-1");
        assert_eq!(envelope["error"], Value::Null);
    }

    #[test]
    fn error_data_is_omitted_when_absent() {
        let resp = ResolverResponse::not_found("no such page");
        let envelope = resp.into_envelope();
        assert!(envelope["error"].get("data").is_none());
        assert_eq!(envelope["error"]["code"], "NOT_FOUND");
    }

    #[test]
    fn error_code_parses_from_token() {
        use std::str::FromStr;
        assert_eq!(
            ErrorCode::from_str("FORBIDDEN").expect("should parse"),
            ErrorCode::Forbidden
        );
    }
}
