// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock lifecycle hooks.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use plinth_core::PlinthError;
use plinth_plugin::{ExecutionContext, HookHandler};

/// Shared invocation log written by [`RecordingHook`]s, so tests can
/// assert relative execution order across several hooks.
pub type HookLog = Arc<Mutex<Vec<String>>>;

/// Create an empty shared hook log.
pub fn hook_log() -> HookLog {
    Arc::new(Mutex::new(Vec::new()))
}

/// A hook that appends its label to a shared log and succeeds.
pub struct RecordingHook {
    label: String,
    log: HookLog,
}

impl RecordingHook {
    pub fn new(label: impl Into<String>, log: HookLog) -> Self {
        Self {
            label: label.into(),
            log,
        }
    }
}

#[async_trait]
impl HookHandler for RecordingHook {
    async fn on_event(
        &self,
        payload: &mut Value,
        _ctx: &ExecutionContext,
    ) -> Result<(), PlinthError> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(self.label.clone());
        // Leave a trace in the shared payload too, for cumulative-effect
        // assertions.
        if let Some(seen) = payload.get_mut("seen").and_then(Value::as_array_mut) {
            seen.push(Value::String(self.label.clone()));
        }
        Ok(())
    }
}

/// A hook that always fails with the given message.
pub struct FailingHook {
    message: String,
}

impl FailingHook {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl HookHandler for FailingHook {
    async fn on_event(
        &self,
        _payload: &mut Value,
        _ctx: &ExecutionContext,
    ) -> Result<(), PlinthError> {
        Err(PlinthError::Hook(self.message.clone()))
    }
}

/// A hook that panics, for exercising the runner's panic isolation.
pub struct PanickingHook;

#[async_trait]
impl HookHandler for PanickingHook {
    async fn on_event(
        &self,
        _payload: &mut Value,
        _ctx: &ExecutionContext,
    ) -> Result<(), PlinthError> {
        panic!("mock hook panic");
    }
}
