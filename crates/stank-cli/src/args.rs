use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "stank",
    version,
    about = "Dump the shell script classification of each path"
)]
pub struct Args {
    /// Files to classify
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Indent JSON records
    #[arg(long)]
    pub pretty: bool,

    /// Report presence or absence of a final end of line
    #[arg(long)]
    pub eol: bool,

    /// Report presence or absence of carriage returns in shell scripts
    #[arg(long)]
    pub cr: bool,

    /// Write output to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Log each classification step to stderr
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
