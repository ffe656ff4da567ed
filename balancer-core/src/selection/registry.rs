use crate::conf::types::EndpointConfig;
use crate::selection::availability::Availability;
use crate::selection::types::{Endpoint, SharedEndpoint};
use std::sync::Arc;

/// An endpoint plus the scheduling state the strategies keep for it.
#[derive(Debug)]
pub struct ScheduledEndpoint {
    endpoint: SharedEndpoint,

    // Static. Non-positive means never selectable.
    weight: i64,

    // Smooth WRR accumulator. Frozen while the entry is ineligible.
    current: i64,
}

impl ScheduledEndpoint {
    /// The accumulator is seeded with the (non-negative) weight, so the sum of
    /// eligible `current` values starts at the sum of eligible weights, which
    /// is also the value it holds after every weighted round.
    pub fn new(endpoint: SharedEndpoint, weight: i32) -> Self {
        let weight = i64::from(weight);

        Self {
            endpoint,
            weight,
            current: weight.max(0),
        }
    }

    pub fn endpoint(&self) -> &SharedEndpoint {
        &self.endpoint
    }

    pub fn weight(&self) -> i64 {
        self.weight
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    /// Positive weight and the liveness collaborator says yes, right now.
    pub fn is_eligible(&self) -> bool {
        self.weight > 0 && self.endpoint.is_available()
    }
}

/// Ordered, fixed set of scheduled endpoints plus the round-robin cursor.
///
/// Entries keep configuration order for the lifetime of the registry. Only the
/// per-entry `current` accumulator and the cursor can be written.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<ScheduledEndpoint>,
    cursor: usize,
}

impl Registry {
    pub fn new(entries: Vec<ScheduledEndpoint>) -> Self {
        Self { entries, cursor: 0 }
    }

    /// Build a registry from endpoint descriptors, asking `availability_for`
    /// for the liveness collaborator of each one.
    pub fn from_config<F>(endpoints: &[EndpointConfig], mut availability_for: F) -> Self
    where
        F: FnMut(&EndpointConfig) -> Arc<dyn Availability>,
    {
        let entries = endpoints
            .iter()
            .map(|cfg| {
                let endpoint = Endpoint::with_availability(
                    cfg.name.clone(),
                    cfg.address.clone(),
                    availability_for(cfg),
                );
                ScheduledEndpoint::new(Arc::new(endpoint), cfg.weight)
            })
            .collect();

        Self::new(entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ScheduledEndpoint] {
        &self.entries
    }

    pub fn get(&self, idx: usize) -> Option<&ScheduledEndpoint> {
        self.entries.get(idx)
    }

    /// Adjust the accumulator of the entry at `idx`. Out of range is a no-op.
    pub fn add_current(&mut self, idx: usize, delta: i64) {
        if let Some(entry) = self.entries.get_mut(idx) {
            entry.current += delta;
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Store the next round-robin start position, wrapped into range.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = if self.entries.is_empty() {
            0
        } else {
            cursor % self.entries.len()
        };
    }
}
