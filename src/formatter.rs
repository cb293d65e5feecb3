//! Single-line log formatter.
//!
//! A line is built from up to five sections, always in this order:
//!
//! | Section | Plain form        | Gate                         |
//! |---------|-------------------|------------------------------|
//! | time    | `HH:MM:SS:mmm\|`  | `TIME`                       |
//! | type    | `ER(0)\|`         | `SEVERITY`                   |
//! | thread  | `12\|`            | `THREAD`                     |
//! | tag     | `[Net:Client] `   | `TAG_CATEGORY` / `TAG_NAME`  |
//! | message | verbatim          | always                       |
//!
//! A disabled section contributes nothing, separator included. With
//! `RICH_TEXT` the sections are wrapped in `<color>`, `<b>` and `<i>` markup.

use std::fmt::Write as _;
use std::sync::Arc;

use crate::error::FormatError;
use crate::options::FormatOptions;
use crate::record::{LogRecord, Message};
use crate::severity::Severity;
use crate::shared::SharedCaches;
use crate::stack_trace::{StackTraceSetting, StackTraceSource};

const SEPARATOR: char = '|';
const TIME_FORMAT: &str = "%H:%M:%S:%3f";

/// Renders [`LogRecord`]s into text under a fixed set of [`FormatOptions`].
#[derive(Debug, Clone)]
pub struct LineFormatter {
    options: FormatOptions,
    shared: Arc<SharedCaches>,
}

impl LineFormatter {
    /// Create a formatter backed by the process-wide caches.
    ///
    /// Snapshots the host's stack-trace setting for every severity into the
    /// shared policy.
    pub fn new(options: FormatOptions, host: &dyn StackTraceSource) -> Self {
        Self::with_shared(options, host, SharedCaches::global())
    }

    /// Create a formatter backed by the given caches.
    pub fn with_shared(
        options: FormatOptions,
        host: &dyn StackTraceSource,
        shared: Arc<SharedCaches>,
    ) -> Self {
        shared.stack_traces.seed_from(host);
        log::debug!("Created line formatter (options: {:?})", options);
        Self { options, shared }
    }

    pub fn options(&self) -> FormatOptions {
        self.options
    }

    pub fn shared(&self) -> &Arc<SharedCaches> {
        &self.shared
    }

    /// Override the stack-trace setting for one severity.
    ///
    /// The policy is shared, so every formatter on the same caches sees the
    /// change.
    pub fn set_stack_trace_setting(
        &self,
        severity: Severity,
        setting: StackTraceSetting,
    ) -> &Self {
        log::debug!("Stack trace setting for {severity} set to {setting:?}");
        self.shared.stack_traces.set(severity, setting);
        self
    }

    /// Current stack-trace setting, `StackTraceSetting::None` if never set.
    pub fn stack_trace_setting(&self, severity: Severity) -> StackTraceSetting {
        self.shared.stack_traces.get(severity)
    }

    /// Render one record.
    ///
    /// The scratch buffer goes back to the pool on every path, including
    /// when a deferred message fails to write.
    pub fn format(&self, record: &LogRecord<'_>) -> Result<String, FormatError> {
        let mut buffer = self.shared.buffers.acquire();
        self.append_time(record, &mut buffer)?;
        self.append_type(record, &mut buffer)?;
        self.append_thread(record, &mut buffer)?;
        self.append_tag(record, &mut buffer)?;
        self.append_message(record, &mut buffer)?;
        Ok(buffer.as_str().to_owned())
    }

    fn rich(&self) -> bool {
        self.options.contains(FormatOptions::RICH_TEXT)
    }

    fn append_time(&self, record: &LogRecord<'_>, out: &mut String) -> Result<(), FormatError> {
        if !self.options.contains(FormatOptions::TIME) {
            return Ok(());
        }
        let time = record.timestamp.format(TIME_FORMAT);
        if self.rich() {
            write!(out, "<i><color=yellow>{time}</color></i>{SEPARATOR}")?;
        } else {
            write!(out, "{time}{SEPARATOR}")?;
        }
        Ok(())
    }

    fn append_type(&self, record: &LogRecord<'_>, out: &mut String) -> Result<(), FormatError> {
        if !self.options.contains(FormatOptions::SEVERITY) {
            return Ok(());
        }
        let severity = record.severity;
        if self.rich() {
            out.push_str("<b>");
            out.push_str(severity.markup_color());
            write!(out, "{}({})</color></b>{SEPARATOR}", severity.code(), record.level)?;
        } else {
            write!(out, "{}({}){SEPARATOR}", severity.code(), record.level)?;
        }
        Ok(())
    }

    fn append_thread(&self, record: &LogRecord<'_>, out: &mut String) -> Result<(), FormatError> {
        if !self.options.contains(FormatOptions::THREAD) {
            return Ok(());
        }
        write!(out, "{}{SEPARATOR}", record.thread_id)?;
        Ok(())
    }

    fn append_tag(&self, record: &LogRecord<'_>, out: &mut String) -> Result<(), FormatError> {
        if !self.options.shows_tag() {
            return Ok(());
        }
        let show_category = self.options.contains(FormatOptions::TAG_CATEGORY);
        let show_name = self.options.contains(FormatOptions::TAG_NAME);

        if self.rich() {
            let color = self.shared.colors.color_for(record.tag);
            out.push_str("<color=#");
            color.write_hex_rgba(out)?;
            out.push('>');
        }
        out.push('[');
        if show_category {
            out.push_str(record.tag.category());
        }
        if show_category && show_name {
            out.push(':');
        }
        if show_name {
            out.push_str(record.tag.name());
        }
        out.push(']');
        if self.rich() {
            out.push_str("</color>");
        }
        out.push(' ');
        Ok(())
    }

    fn append_message(&self, record: &LogRecord<'_>, out: &mut String) -> Result<(), FormatError> {
        let color = record.color.filter(|_| self.rich());
        if let Some(color) = color {
            out.push_str("<color=#");
            color.write_hex_rgba(out)?;
            out.push('>');
        }
        match &record.message {
            Message::Text(text) => out.push_str(text),
            Message::Args(args) => out.write_fmt(*args)?,
        }
        if color.is_some() {
            out.push_str("</color>");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tag;
    use crate::color::Color;
    use crate::stack_trace::UniformStackTrace;
    use chrono::NaiveDate;
    use std::fmt;

    fn formatter(options: FormatOptions) -> LineFormatter {
        LineFormatter::with_shared(
            options,
            &UniformStackTrace(StackTraceSetting::ScriptOnly),
            Arc::new(SharedCaches::new()),
        )
    }

    fn record<'a>(tag: &'a Tag, message: &'a str) -> LogRecord<'a> {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_milli_opt(9, 5, 7, 42)
            .unwrap();
        LogRecord::new(Severity::Warning, tag, message)
            .with_timestamp(timestamp)
            .with_thread_id(12)
            .with_level(2)
    }

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_all_flags_off_is_message_only() {
        let tag = Tag::new("Net", "Client");
        let f = formatter(FormatOptions::empty());
        assert_eq!(f.format(&record(&tag, "hello")).unwrap(), "hello");
    }

    #[test]
    fn test_time_is_zero_padded() {
        let tag = Tag::new("Net", "Client");
        let f = formatter(FormatOptions::TIME);
        assert_eq!(f.format(&record(&tag, "hi")).unwrap(), "09:05:07:042|hi");
    }

    #[test]
    fn test_rich_time_markup() {
        let tag = Tag::new("Net", "Client");
        let f = formatter(FormatOptions::TIME | FormatOptions::RICH_TEXT);
        assert_eq!(
            f.format(&record(&tag, "hi")).unwrap(),
            "<i><color=yellow>09:05:07:042</color></i>|hi"
        );
    }

    #[test]
    fn test_type_section() {
        let tag = Tag::new("Net", "Client");
        let f = formatter(FormatOptions::SEVERITY);
        assert_eq!(f.format(&record(&tag, "hi")).unwrap(), "WN(2)|hi");

        let rich = formatter(FormatOptions::SEVERITY | FormatOptions::RICH_TEXT);
        assert_eq!(
            rich.format(&record(&tag, "hi")).unwrap(),
            "<b><color=orange>WN(2)</color></b>|hi"
        );
    }

    #[test]
    fn test_thread_section() {
        let tag = Tag::new("Net", "Client");
        let f = formatter(FormatOptions::THREAD);
        assert_eq!(f.format(&record(&tag, "hi")).unwrap(), "12|hi");
    }

    #[test]
    fn test_tag_section_variants() {
        let tag = Tag::new("Net", "Client");
        let both = formatter(FormatOptions::TAGS);
        let category = formatter(FormatOptions::TAG_CATEGORY);
        let name = formatter(FormatOptions::TAG_NAME);

        assert_eq!(both.format(&record(&tag, "hi")).unwrap(), "[Net:Client] hi");
        assert_eq!(category.format(&record(&tag, "hi")).unwrap(), "[Net] hi");
        assert_eq!(name.format(&record(&tag, "hi")).unwrap(), "[Client] hi");
    }

    #[test]
    fn test_rich_tag_uses_assigned_color() {
        let tag = Tag::new("Net", "Client");
        let f = formatter(FormatOptions::TAGS | FormatOptions::RICH_TEXT);
        let expected_hex = f.shared().colors.color_for(&tag).to_hex_rgba();
        assert_eq!(
            f.format(&record(&tag, "hi")).unwrap(),
            format!("<color=#{expected_hex}>[Net:Client]</color> hi")
        );
    }

    #[test]
    fn test_message_color_needs_rich_text() {
        let tag = Tag::new("Net", "Client");
        let rec = record(&tag, "hello").with_color(Color::RED);

        let rich = formatter(FormatOptions::RICH_TEXT);
        assert_eq!(rich.format(&rec).unwrap(), "<color=#FF0000FF>hello</color>");

        let plain = formatter(FormatOptions::empty());
        assert_eq!(plain.format(&rec).unwrap(), "hello");
    }

    #[test]
    fn test_deferred_message_is_interpolated() {
        let tag = Tag::new("Net", "Client");
        let f = formatter(FormatOptions::THREAD);
        let port = 8080;
        let line = f
            .format(
                &LogRecord::new(Severity::Log, &tag, format_args!("listening on {port}"))
                    .with_thread_id(3),
            )
            .unwrap();
        assert_eq!(line, "3|listening on 8080");
    }

    #[test]
    fn test_failing_message_returns_buffer_and_error() {
        let tag = Tag::new("Net", "Client");
        let f = formatter(FormatOptions::TAGS | FormatOptions::RICH_TEXT);
        let result = f.format(&LogRecord::new(Severity::Error, &tag, format_args!("{}", Failing)));
        assert!(matches!(result, Err(FormatError::Message(_))));
        assert_eq!(f.shared().buffers.idle_count(), 1);

        // The next line starts from a clean buffer.
        assert!(f.format(&record(&tag, "ok")).unwrap().ends_with("] ok"));
    }

    #[test]
    fn test_stack_trace_defaults_come_from_host() {
        let f = formatter(FormatOptions::empty());
        for severity in Severity::ALL {
            assert_eq!(f.stack_trace_setting(severity), StackTraceSetting::ScriptOnly);
        }
    }

    #[test]
    fn test_set_stack_trace_setting_chains() {
        let f = formatter(FormatOptions::empty());
        f.set_stack_trace_setting(Severity::Error, StackTraceSetting::Full)
            .set_stack_trace_setting(Severity::Log, StackTraceSetting::None);
        assert_eq!(f.stack_trace_setting(Severity::Error), StackTraceSetting::Full);
        assert_eq!(f.stack_trace_setting(Severity::Log), StackTraceSetting::None);
        assert_eq!(f.stack_trace_setting(Severity::Warning), StackTraceSetting::ScriptOnly);
    }
}
