//! Log record snapshot consumed by the formatter.

use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{Local, NaiveDateTime};

use crate::Tag;
use crate::color::Color;
use crate::severity::Severity;

/// Message body of a record.
#[derive(Debug, Clone)]
pub enum Message<'a> {
    /// Already-assembled text.
    Text(Cow<'a, str>),
    /// Interpolation deferred until the line is written into the pooled buffer.
    Args(fmt::Arguments<'a>),
}

impl<'a> From<&'a str> for Message<'a> {
    fn from(text: &'a str) -> Self {
        Message::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Message<'_> {
    fn from(text: String) -> Self {
        Message::Text(Cow::Owned(text))
    }
}

impl<'a> From<fmt::Arguments<'a>> for Message<'a> {
    fn from(args: fmt::Arguments<'a>) -> Self {
        Message::Args(args)
    }
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.write_str(text),
            Message::Args(args) => f.write_fmt(*args),
        }
    }
}

/// Immutable snapshot of one log call.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: NaiveDateTime,
    pub severity: Severity,
    /// Numeric level printed next to the severity code.
    pub level: i32,
    pub thread_id: u64,
    pub tag: &'a Tag,
    pub message: Message<'a>,
    /// Message color, only honored when rich text is enabled.
    pub color: Option<Color>,
}

impl<'a> LogRecord<'a> {
    /// Record stamped with the local time and the calling thread's id.
    pub fn new(severity: Severity, tag: &'a Tag, message: impl Into<Message<'a>>) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            severity,
            level: 0,
            thread_id: current_thread_id(),
            tag,
            message: message.into(),
            color: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn with_thread_id(mut self, thread_id: u64) -> Self {
        self.thread_id = thread_id;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Small stable identifier for the calling thread.
///
/// Ids are handed out from 1 in the order threads first ask for one and are
/// never reused within the process.
pub fn current_thread_id() -> u64 {
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    thread_local! {
        static THREAD_ID: u64 = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    }
    THREAD_ID.with(|id| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_id_is_stable_per_thread() {
        let here = current_thread_id();
        assert_eq!(here, current_thread_id());

        let other = std::thread::spawn(current_thread_id).join().unwrap();
        assert_ne!(here, other);
    }

    #[test]
    fn test_builder_sets_fields() {
        let tag = Tag::new("Net", "Client");
        let record = LogRecord::new(Severity::Warning, &tag, "hello")
            .with_level(3)
            .with_thread_id(7)
            .with_color(Color::RED);
        assert_eq!(record.level, 3);
        assert_eq!(record.thread_id, 7);
        assert_eq!(record.color, Some(Color::RED));
        assert_eq!(record.message.to_string(), "hello");
    }

    #[test]
    fn test_args_message_displays_interpolated() {
        let tag = Tag::unsorted();
        let n = 42;
        let text = LogRecord::new(Severity::Log, &tag, format_args!("n={n}"))
            .message
            .to_string();
        assert_eq!(text, "n=42");
    }
}
