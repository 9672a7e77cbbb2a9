#![doc = include_str!("../README.md")]

pub mod cli;
pub mod completions;
pub mod config;
pub mod error;
pub mod gate;
pub mod global;
pub mod logger;
mod macros;
pub mod severity;
pub mod sink;

pub use completions::print as print_shell_completions;
pub use config::Config;
pub use error::{Error, Result};
pub use gate::LevelGate;
pub use global::*;
pub use severity::Severity;
pub use sink::{SharedBuffer, Sink};

use cli::{Cli, Commands, EmitOptions};
use logger::{debug, info, warn};
use std::env;
use std::io::{self, Write};

pub fn run() -> Result<()> {
    let cli = cli::parse_args();
    run_with_cli(cli)
}

pub fn run_with_cli(cli: Cli) -> Result<()> {
    logger::init();
    info!("start");
    debug!("cli args: {:?}", cli);

    match cli.cmd {
        Commands::Completions(opts) => {
            print_shell_completions(opts.shell);
        }
        Commands::Levels => {
            let threshold = resolve_config(cli.level, cli.label).ok().map(|cfg| cfg.level);
            print_levels(threshold)?;
        }
        Commands::Emit(opts) => {
            let config = resolve_config(cli.level, cli.label)?;
            let sink = match cli.output.as_deref() {
                Some(path) => Sink::file(path)?,
                None => Sink::stdout(),
            };
            initialize_with_config(Some(sink), config)?;
            emit(gate(), &opts);
        }
    }
    info!("{} end", env!("CARGO_PKG_NAME"));
    Ok(())
}

/// Command-line values win over the environment.
fn resolve_config(level: Option<Severity>, label: Option<String>) -> Result<Config> {
    Config::from_lookup(|key| match key {
        config::LEVEL_VAR if level.is_some() => level.map(|level| level.to_string()),
        config::PREFIX_VAR if label.is_some() => label.clone(),
        _ => env::var(key).ok(),
    })
}

fn emit(gate: &LevelGate, opts: &EmitOptions) {
    let message = opts.message.join(" ");
    debug!("emit {} ({} bytes)", opts.severity, message.len());
    match opts.severity {
        Severity::Debug => gate.debug(&message),
        Severity::Info => gate.info(&message),
        Severity::Warn => gate.warn(&message),
        Severity::Error | Severity::Critical => {
            let (cause, annotation) = match opts.cause.as_deref() {
                Some(cause) => (cause, Some(message.as_str()).filter(|m| !m.is_empty())),
                None => (message.as_str(), None),
            };
            if opts.severity == Severity::Error {
                gate.error(cause, annotation);
            } else {
                gate.critical(cause, annotation);
            }
        }
        Severity::Unknown => warn!("refusing to emit an UNKNOWN entry"),
    }
}

fn print_levels(threshold: Option<Severity>) -> io::Result<()> {
    let mut stdout = io::BufWriter::new(io::stdout());
    for level in Severity::OPERATING {
        let marker = if Some(level) == threshold { '*' } else { ' ' };
        writeln!(stdout, "{} {}", marker, level)?;
    }
    stdout.flush()
}
