//! Liveness collaborators consumed by the selection strategies.

use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};

/// Answers whether an endpoint may receive work right now.
///
/// Called while the selector's lock is held, so implementations must be
/// non-blocking and free of side effects.
pub trait Availability: Send + Sync + Debug {
    fn is_available(&self) -> bool;
}

/// Default collaborator: every endpoint is always considered up.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysAvailable;

impl Availability for AlwaysAvailable {
    fn is_available(&self) -> bool {
        true
    }
}

/// An up/down flag that an external health checker flips.
///
/// Share it through an `Arc` between the checker and the endpoint.
#[derive(Debug)]
pub struct HealthFlag {
    up: AtomicBool,
}

impl HealthFlag {
    pub fn new(up: bool) -> Self {
        Self {
            up: AtomicBool::new(up),
        }
    }

    pub fn mark_up(&self) {
        self.up.store(true, Ordering::Release);
    }

    pub fn mark_down(&self) {
        self.up.store(false, Ordering::Release);
    }

    pub fn set(&self, up: bool) {
        self.up.store(up, Ordering::Release);
    }
}

impl Default for HealthFlag {
    fn default() -> Self {
        // assume healthy initially
        Self::new(true)
    }
}

impl Availability for HealthFlag {
    fn is_available(&self) -> bool {
        self.up.load(Ordering::Acquire)
    }
}
