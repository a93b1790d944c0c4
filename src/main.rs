use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use delay_start::OutputFormat;
use delay_start::commands::{self, SelectionOptions};
use delay_start::config;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "delaystart")]
#[command(about = "Work out the delay-start setting so an appliance finishes by a chosen time")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Path to config file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the delay once
    Calc {
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long, help = "Use this time (HH:MM) instead of the current time")]
        now: Option<String>,
        #[arg(long, help = "Show the detailed calculation")]
        details: bool,
    },
    /// Recompute on a timer as the clock advances
    Watch {
        #[command(flatten)]
        selection: SelectionArgs,
        #[arg(long, help = "Use this time (HH:MM) instead of the current time")]
        now: Option<String>,
        #[arg(long, help = "Seconds between refreshes (defaults to config)")]
        interval_secs: Option<u64>,
        #[arg(long, help = "Stop after this many refreshes")]
        ticks: Option<u64>,
        #[arg(long, help = "Show the detailed calculation")]
        details: bool,
    },
    /// List target time and run time presets
    Presets,
    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

#[derive(Args)]
struct SelectionArgs {
    #[arg(long, conflicts_with = "target_preset", help = "Custom target time (HH:MM)")]
    target: Option<String>,
    #[arg(long, help = "Target time preset index")]
    target_preset: Option<usize>,
    #[arg(long, conflicts_with = "run_preset", help = "Custom run time (H:MM)")]
    run: Option<String>,
    #[arg(long, help = "Run time preset index")]
    run_preset: Option<usize>,
}

impl From<SelectionArgs> for SelectionOptions {
    fn from(args: SelectionArgs) -> Self {
        Self {
            target: args.target,
            target_preset: args.target_preset,
            run: args.run,
            run_preset: args.run_preset,
        }
    }
}

#[derive(Parser)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    List,
    /// Print one value by dotted key
    Get { key: String },
    /// Print the config file location
    Path,
    /// Write a config file with the default presets
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "delay_start=debug"
    } else {
        "delay_start=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Config(args) => match args.action {
            ConfigAction::Path => commands::config::path(config_path)?,
            ConfigAction::Init { force } => commands::config::init(config_path, force)?,
            ConfigAction::List => commands::config::list(&config::load(config_path)?)?,
            ConfigAction::Get { key } => commands::config::get(&key, &config::load(config_path)?)?,
        },
        Commands::Presets => {
            commands::presets::list(&config::load(config_path)?, cli.format)?;
        }
        Commands::Calc {
            selection,
            now,
            details,
        } => {
            let config = config::load(config_path)?;
            commands::calc::calc(
                &config,
                &SelectionOptions::from(selection),
                now.as_deref(),
                details,
                cli.format,
            )?;
        }
        Commands::Watch {
            selection,
            now,
            interval_secs,
            ticks,
            details,
        } => {
            let config = config::load(config_path)?;
            commands::watch::watch(
                &config,
                &SelectionOptions::from(selection),
                commands::watch::WatchOptions {
                    now: now.as_deref(),
                    interval_secs,
                    ticks,
                    details,
                },
                cli.format,
            )?;
        }
    }

    Ok(())
}
