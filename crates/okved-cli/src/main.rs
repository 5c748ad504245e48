mod error;
mod find;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::debug;

use crate::error::{exit_code_for, report_error};
use crate::find::{find_okved, print_result};
use okved_config as config;
use okved_registry::{HttpRegistry, DEFAULT_REGISTRY_URL};

#[derive(Debug, Parser)]
#[command(name = "okved", version, about = "Find your OKVED code by phone number")]
struct Cli {
    /// Phone number in any format
    phone: String,
    /// Override the okved.json source location
    #[arg(long)]
    registry_url: Option<String>,
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        phone,
        registry_url,
        config: config_path,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let url = registry_url
        .or(app_config.registry_url)
        .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());
    debug!(url = %url, "registry source selected");

    let registry =
        HttpRegistry::new(url).with_timeout(Duration::from_secs(app_config.http_timeout_secs));

    let result = find_okved(&registry, &phone)?;
    print_result(&result)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
