//! Smooth weighted round robin.
//!
//! Each round, every eligible entry's `current` grows by its weight; the entry
//! with the largest result wins and pays back the sum of the eligible
//! `current` values as they were before the round. The eligible values
//! therefore always sum to the eligible weight total, which keeps them bounded
//! and spreads a heavy entry's picks across the cycle instead of bursting.
//!
//! With `{a: 3, b: 2, c: 1}`:
//!
//! ```text
//! before      +weight     winner  after
//! 3  2  1     6  4  2     a       0  4  2
//! 0  4  2     3  6  3     b       3  0  3
//! 3  0  3     6  2  4     a       0  2  4
//! 0  2  4     3  4  5     c       3  4 -1
//! 3  4 -1     6  6  0     a       0  6  0
//! 0  6  0     3  8  1     b       3  2  1
//! ```

use crate::selection::registry::Registry;
use crate::selection::strategy::SelectionStrategy;

#[derive(Debug, Default)]
pub struct SmoothWeightedRoundRobin;

impl SelectionStrategy for SmoothWeightedRoundRobin {
    fn select(&self, registry: &mut Registry) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        let mut total: i64 = 0;

        for idx in 0..registry.len() {
            let (weight, before) = match registry.get(idx) {
                Some(entry) if entry.is_eligible() => (entry.weight(), entry.current()),
                // Ineligible entries keep their accumulator untouched.
                _ => continue,
            };

            total += before;
            registry.add_current(idx, weight);

            let after = before + weight;

            // Strictly greater: the earliest entry wins a tie.
            if best.is_none_or(|(_, max)| after > max) {
                best = Some((idx, after));
            }
        }

        let (winner, _) = best?;
        registry.add_current(winner, -total);

        Some(winner)
    }
}
