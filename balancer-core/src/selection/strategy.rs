use crate::selection::registry::Registry;
use std::fmt::Debug;

/// A selection policy.
///
/// Implementations are stateless; everything they mutate lives in the
/// [`Registry`], which the selector hands over while holding its lock.
pub trait SelectionStrategy: Send + Sync + Debug {
    /// Index of the chosen entry, or `None` when no entry is eligible.
    fn select(&self, registry: &mut Registry) -> Option<usize>;
}
