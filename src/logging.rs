use std::{fs::OpenOptions, sync::Mutex};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

const INTERACTIVE_DEFAULT: &str = "weather_predictor=info";
const ONE_SHOT_DEFAULT: &str = "weather_predictor=warn";

/// Installs the global subscriber.
///
/// The dashboard owns the terminal, so it only logs when `--log-file` is
/// given. One-shot runs fall back to stderr.
pub fn init(cli: &Cli) -> anyhow::Result<()> {
    let default_directive = if cli.one_shot {
        ONE_SHOT_DEFAULT
    } else {
        INTERACTIVE_DEFAULT
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    if let Some(path) = &cli.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {} failed", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| anyhow::anyhow!("installing log subscriber failed: {e}"))?;
    } else if cli.one_shot {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("installing log subscriber failed: {e}"))?;
    }

    Ok(())
}
