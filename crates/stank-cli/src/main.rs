use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use stank_core::smell::{Smell, render};
use stank_core::{SCHEMA_VERSION, SniffConfig, sniff};

mod args;

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn format_smell(smell: &Smell, args: &args::Args) -> Result<String> {
    Ok(match args.format {
        args::OutputFormat::Json if args.pretty => serde_json::to_string_pretty(smell)? + "\n",
        args::OutputFormat::Json => serde_json::to_string(smell)? + "\n",
        args::OutputFormat::Text => render::render_text(smell),
    })
}

fn main() -> Result<()> {
    let args = args::Args::parse();
    init_tracing(args.debug);
    debug!(schema = SCHEMA_VERSION, "starting");

    let config = SniffConfig {
        eol_check: args.eol,
        cr_check: args.cr,
    };

    let mut output = String::new();
    let mut failed = false;

    for path in &args.paths {
        match sniff(path, &config) {
            Ok(smell) if smell.directory => {
                debug!(path = %path.display(), "skipping directory");
            }
            Ok(smell) => output.push_str(&format_smell(&smell, &args)?),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "sniff failed");
                failed = true;
            }
        }
    }

    match &args.out {
        Some(path) => std::fs::write(path, &output)
            .with_context(|| format!("failed to write output: {}", path.display()))?,
        None => print!("{output}"),
    }

    std::process::exit(if failed { 1 } else { 0 });
}
