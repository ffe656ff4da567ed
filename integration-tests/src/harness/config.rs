use balancer_core::conf::{BalancerConfig, load_config};
use balancer_core::selection::Selector;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_fixture(file: &str) -> BalancerConfig {
    load_config(&fixture_path(file)).expect("failed to load fixture config")
}

/// Names of the next `n` selections. Panics on a selection error.
pub fn names(selector: &Selector, n: usize) -> Vec<String> {
    (0..n)
        .map(|_| {
            selector
                .select_next()
                .expect("selection failed")
                .name
                .clone()
        })
        .collect()
}
