#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Every entry has a non-positive weight or is unavailable, or there are
    /// no entries at all.
    #[error("no eligible endpoint available")]
    NoEligibleEndpoint,
}
