//! YAML configuration for building a [`LineFormatter`].
//!
//! ```yaml
//! rich_text: true
//! show_time: true
//! show_thread: false
//! show_tag_category: true
//! show_tag_name: true
//! show_severity: true
//! stack_traces:
//!   error: full
//!   log: none
//! ```
//!
//! Every field is optional. Stack-trace entries override the host defaults
//! after the formatter has been constructed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::formatter::LineFormatter;
use crate::options::FormatOptions;
use crate::severity::Severity;
use crate::shared::SharedCaches;
use crate::stack_trace::{StackTraceSetting, StackTraceSource};

/// Serializable description of a formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub rich_text: bool,
    pub show_time: bool,
    pub show_thread: bool,
    pub show_tag_category: bool,
    pub show_tag_name: bool,
    pub show_severity: bool,
    /// Per-severity overrides applied on top of the host defaults.
    pub stack_traces: BTreeMap<Severity, StackTraceSetting>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            rich_text: false,
            show_time: false,
            show_thread: false,
            show_tag_category: true,
            show_tag_name: true,
            show_severity: true,
            stack_traces: BTreeMap::new(),
        }
    }
}

impl FormatterConfig {
    /// Parse a configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading formatter config from {:?}", path);

        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to read formatter config {:?}", path))?;
        Self::from_yaml_str(&contents).map_err(|e| {
            log::warn!("Invalid formatter config {:?}: {}", path, e);
            anyhow::Error::new(e).context(format!("Failed to parse formatter config {:?}", path))
        })
    }

    /// Serialize to YAML.
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Config equivalent to a set of flags, with no stack-trace overrides.
    pub fn from_options(options: FormatOptions) -> Self {
        Self {
            rich_text: options.contains(FormatOptions::RICH_TEXT),
            show_time: options.contains(FormatOptions::TIME),
            show_thread: options.contains(FormatOptions::THREAD),
            show_tag_category: options.contains(FormatOptions::TAG_CATEGORY),
            show_tag_name: options.contains(FormatOptions::TAG_NAME),
            show_severity: options.contains(FormatOptions::SEVERITY),
            stack_traces: BTreeMap::new(),
        }
    }

    pub fn options(&self) -> FormatOptions {
        let mut options = FormatOptions::empty();
        options.set(FormatOptions::RICH_TEXT, self.rich_text);
        options.set(FormatOptions::TIME, self.show_time);
        options.set(FormatOptions::THREAD, self.show_thread);
        options.set(FormatOptions::TAG_CATEGORY, self.show_tag_category);
        options.set(FormatOptions::TAG_NAME, self.show_tag_name);
        options.set(FormatOptions::SEVERITY, self.show_severity);
        options
    }

    /// Build a formatter on the process-wide caches.
    pub fn build(&self, host: &dyn StackTraceSource) -> LineFormatter {
        self.build_with_shared(host, SharedCaches::global())
    }

    /// Build a formatter on the given caches.
    pub fn build_with_shared(
        &self,
        host: &dyn StackTraceSource,
        shared: Arc<SharedCaches>,
    ) -> LineFormatter {
        let formatter = LineFormatter::with_shared(self.options(), host, shared);
        for (&severity, &setting) in &self.stack_traces {
            formatter.set_stack_trace_setting(severity, setting);
        }
        formatter
    }
}
