//! Lifetime scope for async work spawned by a component.
//!
//! A page creates a [`TaskScope`], closes it from `on_cleanup`, and hands a
//! [`ScopeHandle`] to each spawned future. The future checks the handle after
//! every await and drops its result once the page is gone, so no callback
//! writes into disposed signals.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct TaskScope {
    alive: Arc<AtomicBool>,
}

impl Default for TaskScope {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskScope {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            alive: Arc::clone(&self.alive),
        }
    }

    /// Mark the owning component as torn down. Idempotent.
    pub fn close(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Cheap clone of a scope's liveness flag, carried into spawned futures.
#[derive(Clone, Debug)]
pub struct ScopeHandle {
    alive: Arc<AtomicBool>,
}

impl ScopeHandle {
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// Pass `value` through only while the scope is still open.
    pub fn keep<T>(&self, value: T) -> Option<T> {
        self.is_live().then_some(value)
    }
}
