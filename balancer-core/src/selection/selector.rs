use crate::conf::types::{Algorithm, BalancerConfig, EndpointConfig};
use crate::selection::algorithms::{RoundRobin, SmoothWeightedRoundRobin};
use crate::selection::availability::{AlwaysAvailable, Availability};
use crate::selection::error::SelectionError;
use crate::selection::registry::Registry;
use crate::selection::strategy::SelectionStrategy;
use crate::selection::types::SharedEndpoint;
use crate::selection::view::ScheduledEndpointView;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

static ROUND_ROBIN: RoundRobin = RoundRobin;
static SMOOTH_WEIGHTED: SmoothWeightedRoundRobin = SmoothWeightedRoundRobin;

fn strategy_for(algorithm: Algorithm) -> &'static dyn SelectionStrategy {
    match algorithm {
        Algorithm::RoundRobin => &ROUND_ROBIN,
        Algorithm::WeightedRoundRobin => &SMOOTH_WEIGHTED,
    }
}

/// Picks the endpoint each unit of work should go to.
///
/// The algorithm is fixed at construction. All scheduling state sits behind a
/// single mutex, and one call to [`Selector::select_next`] holds it for the
/// whole read-modify-write, so concurrent callers observe the same sequence a
/// single caller would, only interleaved.
#[derive(Debug)]
pub struct Selector {
    algorithm: Algorithm,
    strategy: &'static dyn SelectionStrategy,
    registry: Mutex<Registry>,
}

impl Selector {
    pub fn new(algorithm: Algorithm, registry: Registry) -> Self {
        tracing::debug!(
            algorithm = %algorithm,
            endpoints = registry.len(),
            eligible = registry.entries().iter().filter(|e| e.is_eligible()).count(),
            "selector constructed"
        );

        Self {
            algorithm,
            strategy: strategy_for(algorithm),
            registry: Mutex::new(registry),
        }
    }

    /// Every endpoint is treated as always available.
    pub fn from_config(config: &BalancerConfig) -> Self {
        Self::from_config_with(config, |_| Arc::new(AlwaysAvailable))
    }

    /// Build from config, wiring each endpoint to the liveness collaborator
    /// returned by `availability_for`.
    pub fn from_config_with<F>(config: &BalancerConfig, availability_for: F) -> Self
    where
        F: FnMut(&EndpointConfig) -> Arc<dyn Availability>,
    {
        Self::new(
            config.algorithm(),
            Registry::from_config(&config.endpoints, availability_for),
        )
    }

    pub fn select_next(&self) -> Result<SharedEndpoint, SelectionError> {
        let mut registry = self.lock();

        let idx = self
            .strategy
            .select(&mut registry)
            .ok_or(SelectionError::NoEligibleEndpoint)?;

        registry
            .get(idx)
            .map(|entry| Arc::clone(entry.endpoint()))
            .ok_or(SelectionError::NoEligibleEndpoint)
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Lets callers tell "nothing configured" apart from "everything down",
    /// which [`SelectionError`] does not.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Endpoints in configuration order.
    pub fn endpoints(&self) -> Vec<SharedEndpoint> {
        self.lock()
            .entries()
            .iter()
            .map(|e| Arc::clone(e.endpoint()))
            .collect()
    }

    /// Read-only copy of the scheduling state, taken under the lock.
    pub fn inspect(&self) -> Vec<ScheduledEndpointView> {
        self.lock()
            .entries()
            .iter()
            .map(ScheduledEndpointView::from)
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Registry> {
        // Strategies never panic halfway through an update, so a poisoned
        // registry is still consistent.
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
