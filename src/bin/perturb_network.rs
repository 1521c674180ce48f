//! Generate random perturbations of one or more seed networks.
//!
//! The parameters are read from a `.json` file (see `SearchParams`). The seed networks
//! are read from the file given by `--network`, or by the `networkfile` parameter. Such
//! a file contains either a single network specification, or a JSON list of
//! specifications. The union of all accepted networks is printed to the standard output
//! (or written to `--output`) as a JSON list. Diagnostics go to the standard error.

use biodivine_net_perturb::config::SearchParams;
use biodivine_net_perturb::filters::MonotoneFunctionOracle;
use biodivine_net_perturb::search::perturb_networks;
use biodivine_net_perturb::PerturbError;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const LOG_FORMAT_ENV: &str = "NET_PERTURB_LOG_FORMAT";

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to a `.json` file with search parameters.
    params: PathBuf,
    /// Path to the seed network file. Overrides the `networkfile` parameter.
    #[arg(short, long)]
    network: Option<PathBuf>,
    /// Write the resulting networks to this file instead of the standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    if let Err(message) = init_logging() {
        eprintln!("failed to initialize logging: {}", message);
        return ExitCode::FAILURE;
    }
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Perturbation failed.");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), PerturbError> {
    let params = SearchParams::read_file(&args.params)?;
    let network_file = args
        .network
        .or_else(|| params.networkfile.as_ref().map(PathBuf::from))
        .ok_or(PerturbError::MissingNetworkFile)?;
    let seeds = read_networks(&network_file)?;
    info!(seeds = seeds.len(), file = %network_file.display(), "Loaded seed networks.");

    let config = params.into_config()?;
    let networks = perturb_networks(&config, &MonotoneFunctionOracle, &seeds)?;
    info!(networks = networks.len(), "Saving networks.");

    let json = serde_json::to_string_pretty(&networks)?;
    match &args.output {
        Some(path) => std::fs::write(path, json).map_err(|source| PerturbError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).map_err(|source| PerturbError::Io {
                path: "<stdout>".to_string(),
                source,
            })
        }
    }
}

/// Read seed networks: a JSON list of specifications, or a single specification.
fn read_networks(path: &Path) -> Result<Vec<String>, PerturbError> {
    let content = std::fs::read_to_string(path).map_err(|source| PerturbError::Io {
        path: path.display().to_string(),
        source,
    })?;
    if content.trim_start().starts_with('[') {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(vec![content.trim_end_matches('\n').to_string()])
    }
}

/// Install a `stderr` subscriber, filtered by `RUST_LOG` (default `info`). Setting
/// `NET_PERTURB_LOG_FORMAT=json` switches to JSON output.
fn init_logging() -> Result<(), String> {
    let use_json = match std::env::var(LOG_FORMAT_ENV) {
        Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "human" => false,
            "json" => true,
            other => return Err(format!("unsupported log format `{}`", other)),
        },
        Err(_) => false,
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let fmt_layer = if use_json {
        fmt_layer.json().with_current_span(true).boxed()
    } else {
        fmt_layer.boxed()
    };
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| e.to_string())
}
