use std::env;

use crate::error::{Error, Result};
use crate::logger::*;
use crate::severity::Severity;

/// Environment variable selecting the initial threshold.
pub const LEVEL_VAR: &str = "LEVELOG_LEVEL";
/// Environment variable selecting the label prepended to every entry.
pub const PREFIX_VAR: &str = "LEVELOG_PREFIX";
pub const DEFAULT_LABEL: &str = "log";

/// Settings applied by the first successful initialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub level: Severity,
    pub label: String,
}

impl Config {
    pub fn new(level: Severity) -> Self {
        Self {
            level,
            label: DEFAULT_LABEL.to_string(),
        }
    }

    /// Replaces the label; a blank label falls back to [`DEFAULT_LABEL`].
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = normalize_label(Some(label.into()));
        self
    }

    /// Reads [`LEVEL_VAR`] and [`PREFIX_VAR`] from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::from_env`] with a caller-supplied variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let level = level_from(lookup(LEVEL_VAR))?;
        let label = normalize_label(lookup(PREFIX_VAR));
        debug!("config resolved: level={}, label={:?}", level, label);
        Ok(Self { level, label })
    }
}

/// Resolves a threshold value the way [`LEVEL_VAR`] is interpreted.
pub fn level_from(raw: Option<String>) -> Result<Severity> {
    match raw {
        Some(value) if !value.trim().is_empty() => value.parse().map_err(|_| {
            Error::InvalidConfiguration(format!(
                "env var `{}` value `{}` is not valid",
                LEVEL_VAR, value
            ))
        }),
        _ => Err(Error::InvalidConfiguration(format!(
            "env var `{}` is missing",
            LEVEL_VAR
        ))),
    }
}

fn normalize_label(raw: Option<String>) -> String {
    match raw {
        Some(label) if !label.trim().is_empty() => label,
        _ => DEFAULT_LABEL.to_string(),
    }
}
