use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::logger::*;
use crate::severity::Severity;
use crate::sink::Sink;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

struct State {
    sink: Option<Sink>,
    level: Severity,
    label: String,
    initialized: bool,
}

impl State {
    const fn uninitialized() -> Self {
        Self {
            sink: None,
            level: Severity::Unknown,
            label: String::new(),
            initialized: false,
        }
    }
}

/// Logger state plus the severity filter applied to every emit.
///
/// A gate starts uninitialized. The first successful initialize stores the
/// sink, threshold and label; later calls are no-ops that return `Ok`. Emits
/// below the threshold do nothing. Emitting before initialization panics.
///
/// Sink write failures are swallowed: emit functions never report them.
pub struct LevelGate {
    state: RwLock<State>,
}

impl Default for LevelGate {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelGate {
    pub const fn new() -> Self {
        Self {
            state: RwLock::new(State::uninitialized()),
        }
    }

    /// Initializes with the default label.
    pub fn initialize(&self, sink: Option<Sink>, level: Severity) -> Result<()> {
        self.initialize_with_config(sink, Config::new(level))
    }

    /// Initializes with the level and label read from the environment.
    pub fn initialize_from_env(&self, sink: Option<Sink>) -> Result<()> {
        if self.is_initialized() {
            return Ok(());
        }
        self.initialize_with_config(sink, Config::from_env()?)
    }

    pub fn initialize_with_config(&self, sink: Option<Sink>, config: Config) -> Result<()> {
        let confirmation = {
            let mut state = self.write();
            if state.initialized {
                debug!(
                    "initialize ignored: already running at {} with label {:?}",
                    state.level, state.label
                );
                return Ok(());
            }
            let sink = sink.ok_or(Error::InvalidSink)?;
            if !config.level.is_operating() {
                return Err(Error::InvalidLevel);
            }
            let confirmation = (Severity::Info >= config.level).then(|| {
                let entry = format_entry(
                    &config.label,
                    Severity::Info,
                    format_args!("internal logging set to level {}", config.level),
                );
                (sink.clone(), entry)
            });
            state.sink = Some(sink);
            state.level = config.level;
            state.label = config.label;
            state.initialized = true;
            confirmation
        };
        if let Some((sink, entry)) = confirmation {
            deliver(&sink, Severity::Info, &entry);
        }
        Ok(())
    }

    pub fn current_level(&self) -> Severity {
        self.read().level
    }

    /// Replaces the threshold. Also accepted before initialization; the
    /// stored value is then overwritten by the first initialize.
    pub fn set_level(&self, level: Severity) -> Result<()> {
        if !level.is_operating() {
            return Err(Error::InvalidLevel);
        }
        let mut state = self.write();
        debug!("log level changed: {} -> {}", state.level, level);
        state.level = level;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.read().initialized
    }

    /// Whether an entry at `severity` would currently be written.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        let state = self.read();
        state.initialized && severity >= state.level
    }

    pub fn label(&self) -> String {
        self.read().label.clone()
    }

    /// Forces the gate back to the uninitialized state.
    #[doc(hidden)]
    pub fn reset(&self) {
        *self.write() = State::uninitialized();
    }

    pub fn debug(&self, msg: &str) {
        self.emit(Severity::Debug, format_args!("{}", msg));
    }

    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Debug, args);
    }

    pub fn info(&self, msg: &str) {
        self.emit(Severity::Info, format_args!("{}", msg));
    }

    pub fn infof(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Info, args);
    }

    pub fn warn(&self, msg: &str) {
        self.emit(Severity::Warn, format_args!("{}", msg));
    }

    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.emit(Severity::Warn, args);
    }

    /// Writes `cause`, followed by ` - msg` when an annotation is given.
    pub fn error(&self, cause: impl fmt::Display, msg: Option<&str>) {
        self.emit_failure(Severity::Error, &cause, msg.as_ref().map(|m| m as &dyn fmt::Display));
    }

    pub fn errorf(&self, cause: impl fmt::Display, args: fmt::Arguments<'_>) {
        self.emit_failure(Severity::Error, &cause, Some(&args));
    }

    pub fn critical(&self, cause: impl fmt::Display, msg: Option<&str>) {
        self.emit_failure(Severity::Critical, &cause, msg.as_ref().map(|m| m as &dyn fmt::Display));
    }

    pub fn criticalf(&self, cause: impl fmt::Display, args: fmt::Arguments<'_>) {
        self.emit_failure(Severity::Critical, &cause, Some(&args));
    }

    fn emit_failure(
        &self,
        severity: Severity,
        cause: &dyn fmt::Display,
        annotation: Option<&dyn fmt::Display>,
    ) {
        match annotation {
            Some(note) => self.emit(severity, format_args!("{} - {}", cause, note)),
            None => self.emit(severity, format_args!("{}", cause)),
        }
    }

    fn emit(&self, severity: Severity, message: fmt::Arguments<'_>) {
        // Caller Display impls may call back into the gate, so nothing is
        // formatted while the guard is held.
        let (sink, label) = {
            let state = self.read();
            let Some(sink) = state.sink.as_ref().filter(|_| state.initialized) else {
                used_before_initialize(severity);
            };
            if severity < state.level {
                return;
            }
            (sink.clone(), state.label.clone())
        };
        deliver(&sink, severity, &format_entry(&label, severity, message));
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cold]
fn used_before_initialize(severity: Severity) -> ! {
    panic!("{} entry emitted before the logger was initialized", severity)
}

fn deliver(sink: &Sink, severity: Severity, entry: &str) {
    if let Err(err) = sink.write_entry(entry) {
        trace!("dropped {} entry: {}", severity, err);
    }
}

fn format_entry(label: &str, severity: Severity, message: fmt::Arguments<'_>) -> String {
    format!(
        "{} {} {}: {}\n",
        label,
        Utc::now().format(TIMESTAMP_FORMAT),
        severity.tag(),
        message
    )
}
