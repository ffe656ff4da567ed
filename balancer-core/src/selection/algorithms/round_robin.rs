use crate::selection::registry::Registry;
use crate::selection::strategy::SelectionStrategy;

/// Plain round robin over eligible entries, in configuration order.
#[derive(Debug, Default)]
pub struct RoundRobin;

fn next_index(idx: usize, len: usize) -> usize {
    let next = idx + 1;
    if next >= len { 0 } else { next }
}

impl SelectionStrategy for RoundRobin {
    fn select(&self, registry: &mut Registry) -> Option<usize> {
        let len = registry.len();
        if len == 0 {
            return None;
        }

        let start = registry.cursor() % len;
        let mut idx = start;

        loop {
            if registry.get(idx)?.is_eligible() {
                registry.set_cursor(next_index(idx, len));
                return Some(idx);
            }

            idx = next_index(idx, len);

            // Full lap without a hit. The cursor stays where it was.
            if idx == start {
                return None;
            }
        }
    }
}
