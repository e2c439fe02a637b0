//! Log line formatting
//!
//! Every entry is a single line:
//!
//! ```text
//! [2025-01-15T10:30:45+00:00] ERROR: Payment processing failed {"user_id":123,"amount":99.99}
//! ```

use chrono::{DateTime, Local, SecondsFormat, TimeZone};

use crate::context::Context;
use crate::level::LogLevel;

/// Format one entry, including the trailing newline
///
/// The context suffix is left out entirely when the context is empty.
pub fn format_entry<Tz>(
    timestamp: &DateTime<Tz>,
    level: LogLevel,
    message: &str,
    context: &Context,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    // use_z = false keeps the numeric offset even for UTC
    let stamp = timestamp.to_rfc3339_opts(SecondsFormat::Secs, false);

    if context.is_empty() {
        return format!("[{}] {}: {}\n", stamp, level, message);
    }

    match serde_json::to_string(context) {
        Ok(json) => format!("[{}] {}: {} {}\n", stamp, level, message, json),
        Err(_) => format!("[{}] {}: {}\n", stamp, level, message),
    }
}

/// Format an entry stamped with the current local time
pub fn format_now(level: LogLevel, message: &str, context: &Context) -> String {
    format_entry(&Local::now(), level, message, context)
}
