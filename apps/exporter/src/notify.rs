#![allow(dead_code)]

//! Notification collaborator — the toast/error UI seam.
//!
//! The orchestrator holds an `Arc<dyn Notifier>`; an absent notification UI
//! is modeled by `NullNotifier` (a no-op, never a crash).

use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Success,
    Error,
    Info,
}

impl fmt::Display for NotifyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NotifyKind::Success => "success",
            NotifyKind::Error => "error",
            NotifyKind::Info => "info",
        })
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, kind: NotifyKind);
}

/// Absent notification UI: messages are dropped.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _kind: NotifyKind) {}
}

/// CLI notifier: routes messages through `tracing` at a level matching the kind.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str, kind: NotifyKind) {
        match kind {
            NotifyKind::Success | NotifyKind::Info => tracing::info!(%kind, "{message}"),
            NotifyKind::Error => tracing::error!(%kind, "{message}"),
        }
    }
}

/// Test notifier that records every call.
#[cfg(test)]
pub struct RecordingNotifier {
    pub calls: std::sync::Mutex<Vec<(String, NotifyKind)>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: std::sync::Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<(String, NotifyKind)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(_, kind)| *kind == NotifyKind::Error)
            .map(|(msg, _)| msg)
            .collect()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotifyKind) {
        self.calls.lock().unwrap().push((message.to_string(), kind));
    }
}

/// Convenience for the common absent case.
pub fn null() -> Arc<dyn Notifier> {
    Arc::new(NullNotifier)
}
