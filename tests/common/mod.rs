//! Shared integration test helpers for tintlog.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{isolated_formatter, fixed_time};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tintlog::{FormatOptions, LineFormatter, SharedCaches, StackTraceSetting, UniformStackTrace};

/// A formatter on fresh caches, so tests never observe each other's state.
pub fn isolated_formatter(options: FormatOptions) -> LineFormatter {
    LineFormatter::with_shared(
        options,
        &UniformStackTrace(StackTraceSetting::ScriptOnly),
        Arc::new(SharedCaches::new()),
    )
}

/// 2024-03-09 14:07:03.009, chosen so every time field needs zero padding.
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .expect("valid date")
        .and_hms_milli_opt(14, 7, 3, 9)
        .expect("valid time")
}

/// Number of `|` section separators in a plain-text line.
pub fn count_separators(line: &str) -> usize {
    line.matches('|').count()
}
