
use crate::selection::{HealthFlag, Registry, ScheduledEndpoint, SelectionStrategy};
use crate::selection::{Endpoint, SharedEndpoint};
use std::sync::Arc;

// ---------------------------
// Helpers
// ---------------------------

fn endpoint(name: &str) -> SharedEndpoint {
    Arc::new(Endpoint::new(name, format!("{name}.internal:80")))
}

/// Registry whose entries are always available.
fn registry(weights: &[(&str, i32)]) -> Registry {
    Registry::new(
        weights
            .iter()
            .map(|(name, weight)| ScheduledEndpoint::new(endpoint(name), *weight))
            .collect(),
    )
}

/// Registry where each entry is wired to its own health flag, returned in
/// configuration order.
fn flagged_registry(weights: &[(&str, i32)]) -> (Registry, Vec<Arc<HealthFlag>>) {
    let flags: Vec<Arc<HealthFlag>> = weights
        .iter()
        .map(|_| Arc::new(HealthFlag::default()))
        .collect();

    let entries = weights
        .iter()
        .zip(&flags)
        .map(|((name, weight), flag)| {
            let endpoint = Endpoint::with_availability(
                *name,
                format!("{name}.internal:80"),
                Arc::clone(flag) as Arc<dyn crate::selection::Availability>,
            );
            ScheduledEndpoint::new(Arc::new(endpoint), *weight)
        })
        .collect();

    (Registry::new(entries), flags)
}

/// Drive a strategy directly and collect the chosen names.
fn picks(strategy: &dyn SelectionStrategy, registry: &mut Registry, n: usize) -> Vec<String> {
    (0..n)
        .map(|_| {
            let idx = strategy.select(registry).expect("selection");
            registry.get(idx).expect("index in range").endpoint().name.clone()
        })
        .collect()
}
