//! Tag values and tag identity resolution for tintlog.
//!
//! A [`Tag`] is the `(category, name)` pair that identifies which subsystem
//! produced a log line. The formatter only ever sees resolved `Tag` values;
//! this crate turns the identities application code actually holds (string
//! literals, types, types carrying a declared tag name) into those strings.
//!
//! Features:
//! - Value-equality tags with a long form used for color seeding
//! - Type-based tag keys with an optional declared name ([`LoggerTagName`])
//! - A process-wide resolver cache keyed by identity

mod resolver;
mod tag;

pub use resolver::{LoggerTagName, TagKey, TagResolver, TagVariant};
pub use tag::Tag;
