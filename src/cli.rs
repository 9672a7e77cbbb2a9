use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::severity::Severity;

#[derive(Parser, Debug)]
#[command(
    name = "levelog",
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None
)]
pub struct Cli {
    /// Minimum severity to write (falls back to LEVELOG_LEVEL)
    #[arg(short, long, value_name = "LEVEL", global = true)]
    pub level: Option<Severity>,

    /// Label prepended to every entry (falls back to LEVELOG_PREFIX, then "log")
    #[arg(short = 'p', long, value_name = "LABEL", global = true)]
    pub label: Option<String>,

    /// Append entries to FILE instead of stdout
    #[arg(short, long, value_name = "FILE", global = true)]
    pub output: Option<String>,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write one entry through the level gate
    Emit(EmitOptions),
    /// List the operating levels, lowest first
    Levels,
    /// Generate shell completion scripts
    Completions(CompletionsOptions),
}

#[derive(Args, Debug)]
#[command(trailing_var_arg = true)]
pub struct EmitOptions {
    /// Severity of the entry (DEBUG, INFO, WARN, ERROR, CRITICAL)
    #[arg(name = "SEVERITY")]
    pub severity: Severity,

    /// Message text; for ERROR and CRITICAL it annotates the cause
    #[arg(name = "MESSAGE", allow_hyphen_values = true)]
    pub message: Vec<String>,

    /// Underlying failure for ERROR and CRITICAL entries
    #[arg(short, long, value_name = "TEXT")]
    pub cause: Option<String>,
}

#[derive(Args, Debug)]
pub struct CompletionsOptions {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
