// src/logger.rs
//! Diagnostics about the logger itself (initialize ignored, level changed,
//! dropped writes) go through the `log` facade. The binary routes them to
//! stderr with `env_logger`; they never reach the gate's sink.
use env_logger::{Builder, Env, Target};
use std::io::Write;

/// Filter variable for the diagnostics, e.g. `LEVELOG_DIAG=levelog=trace`.
pub const DIAG_VAR: &str = "LEVELOG_DIAG";

pub fn init() {
    let default_filter = if cfg!(debug_assertions) { "debug" } else { "off" };
    let env = Env::new().filter_or(DIAG_VAR, default_filter);

    let mut builder = Builder::from_env(env);

    builder.target(Target::Stderr).format(|buf, record| {
        writeln!(
            buf,
            "[diag {:>5} {}:{}] {}",
            record.level(),
            record.module_path().unwrap_or("unknown"),
            record.line().unwrap_or(0),
            record.args()
        )
    });

    if builder.try_init().is_err() {
        log::debug!("diagnostics already routed");
    }
}

/// Re-export logging macros
#[allow(unused_imports)]
pub use log::{debug, error, info, trace, warn};
