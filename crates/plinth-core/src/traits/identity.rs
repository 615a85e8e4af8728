// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity resolution collaborator trait.

use async_trait::async_trait;

use crate::error::PlinthError;
use crate::types::Identity;

/// Resolves the caller principal for the current request.
///
/// Implementations may consult an external identity service. A resolution
/// failure is treated by the execution context as an anonymous caller and
/// is never escalated past this boundary.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the caller's identity, or `None` for anonymous callers.
    async fn get_identity(&self) -> Result<Option<Identity>, PlinthError>;
}
