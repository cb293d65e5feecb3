//! Per-severity stack-trace verbosity.
//!
//! The host decides how much call-stack detail accompanies each severity in
//! its own log. Formatters snapshot that configuration at construction and
//! let callers override it afterwards; this module only tracks the setting.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// How much stack detail the host attaches to a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackTraceSetting {
    #[default]
    None,
    ScriptOnly,
    Full,
}

/// Read access to the host's per-severity stack-trace configuration.
pub trait StackTraceSource {
    fn stack_trace_setting(&self, severity: Severity) -> StackTraceSetting;
}

impl<F> StackTraceSource for F
where
    F: Fn(Severity) -> StackTraceSetting,
{
    fn stack_trace_setting(&self, severity: Severity) -> StackTraceSetting {
        self(severity)
    }
}

/// Host configuration that uses one setting for every severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniformStackTrace(pub StackTraceSetting);

impl StackTraceSource for UniformStackTrace {
    fn stack_trace_setting(&self, _severity: Severity) -> StackTraceSetting {
        self.0
    }
}

/// Shared severity → setting table. Entries are overwritten, never removed.
#[derive(Debug, Default)]
pub struct StackTracePolicy {
    settings: RwLock<[Option<StackTraceSetting>; Severity::ALL.len()]>,
}

impl StackTracePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&self, severity: Severity) -> StackTraceSetting {
        self.settings.read()[severity.index()].unwrap_or_default()
    }

    pub(crate) fn set(&self, severity: Severity, setting: StackTraceSetting) {
        self.settings.write()[severity.index()] = Some(setting);
    }

    /// Overwrite every severity with the host's current value.
    pub(crate) fn seed_from(&self, host: &dyn StackTraceSource) {
        let mut settings = self.settings.write();
        for severity in Severity::ALL {
            settings[severity.index()] = Some(host.stack_trace_setting(severity));
        }
    }
}
