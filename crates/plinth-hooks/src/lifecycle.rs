// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lifecycle stages: an action bracketed by before/after hook broadcasts.
//!
//! A stage named `deploy` broadcasts `hook-before-deploy`, runs the
//! action, then broadcasts `hook-after-deploy`. Hook failures are
//! isolated by the runner; an action failure aborts the stage and the
//! after hooks are not run. Preview-style dry runs skip both broadcasts
//! via [`LifecycleOptions::skip_hooks`].
//!
//! Partial completion is an accepted outcome: effects of hooks that ran
//! before an abort stand, there is no rollback contract at this layer.

use async_trait::async_trait;
use serde_json::Value;

use plinth_core::PlinthError;
use plinth_plugin::ExecutionContext;

use crate::runner::run_hooks;

/// The action at the center of a lifecycle stage (e.g. the actual
/// deploy). Its error propagates to the stage caller.
#[async_trait]
pub trait StageAction: Send + Sync {
    async fn execute(
        &self,
        payload: &mut Value,
        ctx: &ExecutionContext,
    ) -> Result<(), PlinthError>;
}

/// Options controlling one stage run.
#[derive(Debug, Clone, Default)]
pub struct LifecycleOptions {
    /// Skip the before/after hook broadcasts (preview/dry-run mode).
    pub skip_hooks: bool,
}

/// A named lifecycle stage.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    stage: String,
}

impl Lifecycle {
    pub fn new(stage: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
        }
    }

    /// The hook type broadcast before the action.
    pub fn before_hook(&self) -> String {
        format!("hook-before-{}", self.stage)
    }

    /// The hook type broadcast after the action.
    pub fn after_hook(&self) -> String {
        format!("hook-after-{}", self.stage)
    }

    /// Run the stage: before hooks, action, after hooks.
    pub async fn run(
        &self,
        action: &dyn StageAction,
        payload: &mut Value,
        ctx: &ExecutionContext,
        options: &LifecycleOptions,
    ) -> Result<(), PlinthError> {
        if options.skip_hooks {
            tracing::debug!(stage = %self.stage, "skipping lifecycle hooks");
        } else {
            tracing::info!(hook_type = %self.before_hook(), "running lifecycle hooks");
            run_hooks(&self.before_hook(), payload, ctx).await;
        }

        action.execute(payload, ctx).await?;

        if !options.skip_hooks {
            tracing::info!(hook_type = %self.after_hook(), "running lifecycle hooks");
            run_hooks(&self.after_hook(), payload, ctx).await;
        }

        Ok(())
    }
}
