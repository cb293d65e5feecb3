//! Typed error types for tintlog.

use thiserror::Error;

/// Failure while assembling a single line.
///
/// The pooled buffer has already been returned and no shared cache was
/// changed when this is reported.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A `Display` implementation reported an error while the line was
    /// being written, typically from a deferred [`Message::Args`](crate::Message::Args).
    #[error("malformed record: message could not be written: {0}")]
    Message(#[from] std::fmt::Error),
}

/// Errors that can occur when loading formatter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("I/O error reading formatter config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file contained invalid YAML.
    #[error("YAML parse error in formatter config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),
}
