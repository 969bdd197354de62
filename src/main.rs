use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::{error, info};

mod config;
mod error;
mod model;
mod protocol;
mod services;

#[derive(Parser)]
#[command(
    name = "xtle-core",
    version,
    about = "Data core for the localization admin console"
)]
struct Cli {
    /// Path to config file.
    #[arg(short, long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (cfg, source) = config::load(&cli.config)?;

    // stdout carries the protocol, logs go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.core.log_level)),
        )
        .init();

    match source {
        config::ConfigSource::File => info!(path = %cli.config, "config loaded"),
        config::ConfigSource::Defaults => {
            info!(path = %cli.config, "config file not found, using defaults")
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                error!("failed to read request: {e}");
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = std::panic::catch_unwind(|| protocol::handle(&line, &cfg));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => {
                error!("handler panicked");
                serde_json::json!({
                    "status": "error",
                    "message": "internal core error"
                })
                .to_string()
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }

    info!("input closed, exiting");
    Ok(())
}
