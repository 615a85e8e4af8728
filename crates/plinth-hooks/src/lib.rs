// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifecycle hook broadcast for the Plinth plugin kernel.
//!
//! The hook runner fetches all plugins registered under a hook type and
//! invokes them strictly sequentially in registration order, isolating
//! every per-plugin failure so one misbehaving feature module cannot
//! block unrelated modules' lifecycle logic. The lifecycle stage runner
//! brackets an action with `hook-before-<stage>` / `hook-after-<stage>`
//! broadcasts, the pattern the deploy pipeline uses.

pub mod lifecycle;
pub mod runner;

pub use lifecycle::{Lifecycle, LifecycleOptions, StageAction};
pub use runner::{run_hooks, run_hooks_collected, HookFailure};
