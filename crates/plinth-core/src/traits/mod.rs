// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits implemented by host applications.

pub mod fetcher;
pub mod identity;

pub use fetcher::EntityFetcher;
pub use identity::IdentityProvider;
