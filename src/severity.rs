//! Log severities and their fixed display tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a log record.
///
/// Variant order is the ordinal order; [`Severity::index`] and
/// [`Severity::ALL`] follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Assert,
    Warning,
    Log,
    Exception,
}

impl Severity {
    /// Every severity in ordinal order.
    pub const ALL: [Severity; 5] = [
        Severity::Error,
        Severity::Assert,
        Severity::Warning,
        Severity::Log,
        Severity::Exception,
    ];

    /// Ordinal position of this severity.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Two-letter code printed in the type section.
    pub const fn code(self) -> &'static str {
        match self {
            Severity::Error => "ER",
            Severity::Assert => "AS",
            Severity::Warning => "WN",
            Severity::Log => "LG",
            Severity::Exception => "EX",
        }
    }

    /// Opening color tag used for the type section in rich text.
    pub const fn markup_color(self) -> &'static str {
        match self {
            Severity::Error => "<color=red>",
            Severity::Assert => "<color=#FF5349FF>", // orange red
            Severity::Warning => "<color=orange>",
            Severity::Log => "<color=white>",
            Severity::Exception => "<color=magenta>",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Assert => "assert",
            Severity::Warning => "warning",
            Severity::Log => "log",
            Severity::Exception => "exception",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
