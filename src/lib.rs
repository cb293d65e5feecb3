//! Structured log line formatting.
//!
//! [`LineFormatter`] turns a [`LogRecord`] into one line of text, optionally
//! annotated with `<color>`/`<b>`/`<i>` rich-text markup. Formatting is
//! allocation-light: lines are assembled in pooled buffers, and per-tag
//! colors are derived once and cached.
//!
//! # Shared state
//!
//! Three caches outlive individual formatters and are bundled in
//! [`SharedCaches`]:
//!
//! - [`ColorAssigner`]: tag → color, never evicted.
//! - [`BufferPool`]: scratch `String`s reused across calls.
//! - [`StackTracePolicy`]: severity → stack-trace setting, host-seeded.
//!
//! All of them use `parking_lot` locks and are safe to share across threads.
//! [`LineFormatter::new`] uses the process-wide instance; pass your own with
//! [`LineFormatter::with_shared`] to keep state isolated.
//!
//! ```
//! use tintlog::{FormatOptions, LineFormatter, LogRecord, Severity, StackTraceSetting, Tag,
//!     UniformStackTrace};
//!
//! let formatter = LineFormatter::new(
//!     FormatOptions::THREAD | FormatOptions::TAGS,
//!     &UniformStackTrace(StackTraceSetting::ScriptOnly),
//! );
//! let tag = Tag::new("Net", "Client");
//! let line = formatter
//!     .format(&LogRecord::new(Severity::Log, &tag, "connected").with_thread_id(1))
//!     .unwrap();
//! assert_eq!(line, "1|[Net:Client] connected");
//! ```

pub mod buffer_pool;
pub mod color;
pub mod color_assigner;
pub mod config;
pub mod error;
pub mod formatter;
pub mod options;
pub mod record;
pub mod severity;
pub mod shared;
pub mod stack_trace;

pub use tintlog_tags::{LoggerTagName, Tag, TagKey, TagResolver, TagVariant};

pub use buffer_pool::{BufferPool, PooledBuffer};
pub use color::Color;
pub use color_assigner::ColorAssigner;
pub use config::FormatterConfig;
pub use error::{ConfigError, FormatError};
pub use formatter::LineFormatter;
pub use options::FormatOptions;
pub use record::{LogRecord, Message, current_thread_id};
pub use severity::Severity;
pub use shared::SharedCaches;
pub use stack_trace::{StackTracePolicy, StackTraceSetting, StackTraceSource, UniformStackTrace};
