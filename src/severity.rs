use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Importance of a log entry.
///
/// Variants are declared in ascending order and the derived `Ord` follows
/// declaration order, so `Debug < Info < Warn < Error < Critical`.
/// `Unknown` sorts below everything and is never an operating level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Unknown,
    Debug,
    Info,
    Warn,
    Error,
    Critical,
}

impl Severity {
    /// The levels a gate may operate at, lowest first.
    pub const OPERATING: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Critical,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Severity::Unknown => "UNKNOWN",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    pub fn is_operating(self) -> bool {
        self != Severity::Unknown
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Case-sensitive parse of the five operating tags. `UNKNOWN` is rejected.
impl FromStr for Severity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::OPERATING
            .into_iter()
            .find(|level| level.tag() == s)
            .ok_or_else(|| Error::InvalidConfiguration(format!("level `{}` is not valid", s)))
    }
}
