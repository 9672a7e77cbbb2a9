//! Process-wide gate and the free functions that forward to it.

use std::fmt;

use crate::config::Config;
use crate::error::Result;
use crate::gate::LevelGate;
use crate::severity::Severity;
use crate::sink::Sink;

static GATE: LevelGate = LevelGate::new();

/// The gate behind the free functions of this crate.
pub fn gate() -> &'static LevelGate {
    &GATE
}

/// Installs `sink` and `level` on first call; later calls return `Ok(())`
/// without touching the configuration.
pub fn initialize(sink: Option<Sink>, level: Severity) -> Result<()> {
    GATE.initialize(sink, level)
}

pub fn initialize_with_config(sink: Option<Sink>, config: Config) -> Result<()> {
    GATE.initialize_with_config(sink, config)
}

/// Initializes from `LEVELOG_LEVEL` and `LEVELOG_PREFIX`.
pub fn initialize_from_env(sink: Option<Sink>) -> Result<()> {
    GATE.initialize_from_env(sink)
}

pub fn current_level() -> Severity {
    GATE.current_level()
}

pub fn set_level(level: Severity) -> Result<()> {
    GATE.set_level(level)
}

/// Returns the global gate to its uninitialized state. Test suites only.
#[doc(hidden)]
pub fn reset() {
    GATE.reset()
}

pub fn debug(msg: &str) {
    GATE.debug(msg)
}

pub fn debugf(args: fmt::Arguments<'_>) {
    GATE.debugf(args)
}

pub fn info(msg: &str) {
    GATE.info(msg)
}

pub fn infof(args: fmt::Arguments<'_>) {
    GATE.infof(args)
}

pub fn warn(msg: &str) {
    GATE.warn(msg)
}

pub fn warnf(args: fmt::Arguments<'_>) {
    GATE.warnf(args)
}

pub fn error(cause: impl fmt::Display, msg: Option<&str>) {
    GATE.error(cause, msg)
}

pub fn errorf(cause: impl fmt::Display, args: fmt::Arguments<'_>) {
    GATE.errorf(cause, args)
}

pub fn critical(cause: impl fmt::Display, msg: Option<&str>) {
    GATE.critical(cause, msg)
}

pub fn criticalf(cause: impl fmt::Display, args: fmt::Arguments<'_>) {
    GATE.criticalf(cause, args)
}
