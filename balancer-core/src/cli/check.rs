use crate::cli::DEFAULT_CONFIG_PATH;
use crate::conf::{BalancerConfig, ConfigError, load_config, validate};
use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Path to the balancer config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

pub fn run(args: CheckArgs, out: &mut impl Write) -> Result<()> {
    match load_config(&args.config) {
        Ok(config) => report(&config, out),
        Err(err) => {
            if let Some(hint) = config_error_hint(&err) {
                writeln!(out, "{hint}")?;
            }
            Err(err.into())
        }
    }
}

/// Summary of a loaded config plus every validation warning.
pub fn report(config: &BalancerConfig, out: &mut impl Write) -> Result<()> {
    writeln!(out, "✔ Config loaded successfully")?;
    writeln!(out, "✔ algorithm: {}", config.algorithm())?;
    writeln!(out, "✔ {} endpoints", config.endpoints.len())?;
    writeln!(
        out,
        "✔ {} selectable",
        config.endpoints.iter().filter(|e| e.weight > 0).count()
    )?;

    for warning in validate(config) {
        writeln!(out, "⚠ {warning}")?;
    }

    Ok(())
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Pass --config or create config/balancer.toml.\n\
             \n\
             Example:\n\
             \n\
             algor = \"weighted_round_robin\"\n\
             \n\
             [[endpoints]]\n\
             name = \"a\"\n\
             addr = \"127.0.0.1:8080\"\n\
             weight = 1",
        ),
        ConfigError::Parse { .. } => None,
    }
}
