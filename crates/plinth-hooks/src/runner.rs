// SPDX-FileCopyrightText: 2026 Plinth Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The hook runner: sequential, failure-isolating broadcast.
//!
//! Hooks run in registration order with no interleaving; cumulative side
//! effects on the shared payload are part of the contract. A failing
//! hook -- an `Err` return, a panic, or a record whose payload is not a
//! hook at all -- is reported and skipped, and the runner continues with
//! the next plugin. The runner itself never fails.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use serde_json::Value;

use plinth_plugin::ExecutionContext;

/// One isolated hook failure, as reported to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookFailure {
    pub hook_type: String,
    pub plugin_name: String,
    pub error_message: String,
}

/// Broadcast a hook type to all matching plugins.
///
/// Fire-and-continue: successful and failed executions are observable
/// only through payload/context mutation and the warn-level failure
/// log. Completes silently when no plugins match.
pub async fn run_hooks(hook_type: &str, payload: &mut Value, ctx: &ExecutionContext) {
    let _ = run_hooks_collected(hook_type, payload, ctx).await;
}

/// Same broadcast, returning the isolated failures for callers that
/// surface a summary. Each failure is also logged as it happens.
pub async fn run_hooks_collected(
    hook_type: &str,
    payload: &mut Value,
    ctx: &ExecutionContext,
) -> Vec<HookFailure> {
    let plugins = ctx.registry().by_type(hook_type);
    let mut failures = Vec::new();

    for plugin in plugins {
        let Some(hook) = plugin.payload.as_hook() else {
            report(
                &mut failures,
                hook_type,
                &plugin.name,
                format!(
                    "plugin payload is not a hook (found {:?} shape)",
                    plugin.payload
                ),
            );
            continue;
        };

        match AssertUnwindSafe(hook.on_event(payload, ctx))
            .catch_unwind()
            .await
        {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                report(&mut failures, hook_type, &plugin.name, err.to_string());
            }
            Err(panic) => {
                report(
                    &mut failures,
                    hook_type,
                    &plugin.name,
                    panic_message(panic),
                );
            }
        }
    }

    failures
}

fn report(
    failures: &mut Vec<HookFailure>,
    hook_type: &str,
    plugin_name: &str,
    error_message: String,
) {
    tracing::warn!(
        hook_type,
        plugin = plugin_name,
        error = %error_message,
        "hook failed, continuing with remaining hooks"
    );
    failures.push(HookFailure {
        hook_type: hook_type.to_string(),
        plugin_name: plugin_name.to_string(),
        error_message,
    });
}

fn panic_message(panic: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("hook panicked: {s}")
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("hook panicked: {s}")
    } else {
        "hook panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plinth_plugin::{PluginRecord, PluginRegistry};
    use plinth_test_utils::{
        anonymous_context, hook_log, FailingHook, PanickingHook, RecordingHook,
    };
    use serde_json::json;
    use std::sync::Arc;
    use tracing_test::traced_test;

    const HOOK: &str = "hook-before-deploy";

    #[tokio::test]
    async fn hooks_run_in_registration_order() {
        let registry = Arc::new(PluginRegistry::new());
        let log = hook_log();
        registry
            .register(vec![
                PluginRecord::hook("first", HOOK, RecordingHook::new("first", log.clone())),
                PluginRecord::hook("second", HOOK, RecordingHook::new("second", log.clone())),
                PluginRecord::hook("third", HOOK, RecordingHook::new("third", log.clone())),
            ])
            .unwrap();

        let ctx = anonymous_context(registry);
        let mut payload = json!({ "seen": [] });
        run_hooks(HOOK, &mut payload, &ctx).await;

        assert_eq!(*log.lock().unwrap(), ["first", "second", "third"]);
        // Cumulative mutation of the shared payload.
        assert_eq!(payload["seen"], json!(["first", "second", "third"]));
    }

    #[tokio::test]
    async fn failing_hook_does_not_abort_siblings() {
        let registry = Arc::new(PluginRegistry::new());
        let log = hook_log();
        registry
            .register(vec![
                PluginRecord::hook("first", HOOK, RecordingHook::new("first", log.clone())),
                PluginRecord::hook("broken", HOOK, FailingHook::new("db migration failed")),
                PluginRecord::hook("third", HOOK, RecordingHook::new("third", log.clone())),
            ])
            .unwrap();

        let ctx = anonymous_context(registry);
        let mut payload = json!({});
        let failures = run_hooks_collected(HOOK, &mut payload, &ctx).await;

        assert_eq!(*log.lock().unwrap(), ["first", "third"]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].hook_type, HOOK);
        assert_eq!(failures[0].plugin_name, "broken");
        assert!(failures[0].error_message.contains("db migration failed"));
    }

    #[tokio::test]
    #[traced_test]
    async fn failure_log_carries_plugin_name() {
        let registry = Arc::new(PluginRegistry::new());
        registry
            .register(PluginRecord::hook("a", HOOK, FailingHook::new("boom")))
            .unwrap();

        let ctx = anonymous_context(registry);
        let mut payload = json!({});
        run_hooks(HOOK, &mut payload, &ctx).await;

        assert!(logs_contain("hook failed"));
        assert!(logs_contain("a"));
        assert!(logs_contain("boom"));
    }

    #[tokio::test]
    async fn panicking_hook_is_isolated() {
        let registry = Arc::new(PluginRegistry::new());
        let log = hook_log();
        registry
            .register(vec![
                PluginRecord::hook("wild", HOOK, PanickingHook),
                PluginRecord::hook("after", HOOK, RecordingHook::new("after", log.clone())),
            ])
            .unwrap();

        let ctx = anonymous_context(registry);
        let mut payload = json!({});
        let failures = run_hooks_collected(HOOK, &mut payload, &ctx).await;

        assert_eq!(*log.lock().unwrap(), ["after"]);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].error_message.contains("panicked"));
    }

    #[tokio::test]
    async fn non_hook_payload_is_reported_and_skipped() {
        let registry = Arc::new(PluginRegistry::new());
        let log = hook_log();
        registry
            .register(vec![
                PluginRecord::data("just-data", HOOK, json!({ "k": 1 })),
                PluginRecord::hook("real", HOOK, RecordingHook::new("real", log.clone())),
            ])
            .unwrap();

        let ctx = anonymous_context(registry);
        let mut payload = json!({});
        let failures = run_hooks_collected(HOOK, &mut payload, &ctx).await;

        assert_eq!(*log.lock().unwrap(), ["real"]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].plugin_name, "just-data");
        assert!(failures[0].error_message.contains("not a hook"));
    }

    #[tokio::test]
    async fn no_matching_plugins_completes_silently() {
        let registry = Arc::new(PluginRegistry::new());
        let ctx = anonymous_context(registry);
        let mut payload = json!({});
        let failures = run_hooks_collected("hook-never-registered", &mut payload, &ctx).await;
        assert!(failures.is_empty());
    }
}
