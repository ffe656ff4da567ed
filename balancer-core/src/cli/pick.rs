use crate::cli::DEFAULT_CONFIG_PATH;
use crate::conf::{Algorithm, BalancerConfig, load_config};
use crate::selection::{ScheduledEndpointView, Selector};
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Upper bound on the preallocated pick buffer; `--count` is unbounded.
const PICK_BUFFER_HINT: usize = 1024;

#[derive(Args, Debug, Clone)]
pub struct PickArgs {
    /// Path to the balancer config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Number of selections to make
    #[arg(long, short = 'n', default_value_t = 10)]
    pub count: usize,

    /// Algorithm to use instead of the config file's `algor`
    #[arg(long)]
    pub algorithm: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also print the scheduling state after the last pick
    #[arg(long)]
    pub show_state: bool,
}

impl Default for PickArgs {
    fn default() -> Self {
        Self {
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            count: 10,
            algorithm: None,
            json: false,
            show_state: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct PickRow {
    seq: usize,
    name: String,
    address: String,
}

#[derive(Debug, Serialize)]
struct PickReport {
    algorithm: Algorithm,
    picks: Vec<PickRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<Vec<ScheduledEndpointView>>,
}

pub fn run(args: PickArgs, out: &mut impl Write) -> Result<()> {
    let mut config = load_config(&args.config)?;

    if let Some(algorithm) = &args.algorithm {
        config.algor = Some(algorithm.clone());
    }

    pick(&config, &args, out)
}

/// Build a fresh selector from `config` and write `args.count` picks to `out`.
pub fn pick(config: &BalancerConfig, args: &PickArgs, out: &mut impl Write) -> Result<()> {
    let selector = Selector::from_config(config);

    let mut picks = Vec::with_capacity(args.count.min(PICK_BUFFER_HINT));
    for seq in 1..=args.count {
        let endpoint = selector
            .select_next()
            .with_context(|| format!("selection {seq} of {} failed", args.count))?;

        picks.push(PickRow {
            seq,
            name: endpoint.name.clone(),
            address: endpoint.address.clone(),
        });
    }

    let state = args.show_state.then(|| selector.inspect());

    if args.json {
        let report = PickReport {
            algorithm: selector.algorithm(),
            picks,
            state,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    for row in &picks {
        writeln!(out, "{}\t{}", row.name, row.address)?;
    }

    if let Some(state) = state {
        writeln!(out)?;
        writeln!(out, "# algorithm: {}", selector.algorithm())?;
        for view in state {
            writeln!(
                out,
                "# {}\tweight={}\tcurrent={}\teligible={}",
                view.name, view.weight, view.current, view.eligible
            )?;
        }
    }

    Ok(())
}
