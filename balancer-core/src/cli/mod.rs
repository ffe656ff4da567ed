pub mod check;
pub mod pick;

#[cfg(test)]
mod tests;

/// Config file used when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "config/balancer.toml";
