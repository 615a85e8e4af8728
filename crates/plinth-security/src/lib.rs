// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scope-based capability gating for Plinth resolvers.
//!
//! `has_scope("security:user:crud").wrap(resolver)` produces a resolver
//! with an identical call signature that checks the caller's granted
//! scopes before delegating. Denial is a typed `FORBIDDEN` response,
//! never a fault across the gate boundary.

pub mod gate;

pub use gate::{has_scope, identity_has_scope, ScopeGate, WILDCARD_SCOPE};
