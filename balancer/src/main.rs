use balancer_core::cli::{self, check::CheckArgs, pick::PickArgs};
use balancer_core::logging::{LogFormat, default_log_format, init_logging_with};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "balancer",
    version,
    about = "Balancer: round robin and smooth weighted round robin endpoint selection"
)]
struct Cli {
    /// Log output format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, value_enum, global = true)]
    log_format: Option<LogFormatArg>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the next N selections for a config (default)
    Pick(PickArgs),

    /// Validate configuration and exit
    Check(CheckArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LogFormatArg {
    Json,
    Pretty,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Json => LogFormat::Json,
            LogFormatArg::Pretty => LogFormat::Pretty,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    init_logging_with(
        cli.log_format
            .map(LogFormat::from)
            .unwrap_or_else(default_log_format),
    );

    let mut stdout = io::stdout().lock();

    let result = match cli.command {
        Some(Command::Pick(args)) => cli::pick::run(args, &mut stdout),
        Some(Command::Check(args)) => cli::check::run(args, &mut stdout),
        None => cli::pick::run(PickArgs::default(), &mut stdout),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
