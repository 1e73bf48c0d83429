//! Structured JSON logger.
//!
//! - One log line = one event
//! - Deterministic key ordering (event, severity, then fields sorted)
//! - Synchronous, unbuffered

use std::fmt;
use std::io::{self, Write};

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Debug-level detail.
    Debug = 0,
    /// Normal operations.
    Info = 1,
    /// Recoverable issues.
    Warn = 2,
    /// Operation failures.
    Error = 3,
}

impl LogLevel {
    /// Returns the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured logger writing one JSON object per line.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields.
    pub fn log(level: LogLevel, event: &str, fields: &[(&str, &str)]) {
        Self::log_to_writer(level, event, fields, &mut io::stdout());
    }

    /// Internal implementation writing to a given writer.
    fn log_to_writer<W: Write>(
        level: LogLevel,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut output = String::with_capacity(256);

        output.push_str("{\"event\":\"");
        Self::escape_json_string(&mut output, event);
        output.push_str("\",\"severity\":\"");
        output.push_str(level.as_str());
        output.push('"');

        let mut sorted_fields: Vec<_> = fields.iter().collect();
        sorted_fields.sort_by_key(|(k, _)| *k);

        for (key, value) in sorted_fields {
            output.push_str(",\"");
            Self::escape_json_string(&mut output, key);
            output.push_str("\":\"");
            Self::escape_json_string(&mut output, value);
            output.push('"');
        }

        output.push_str("}\n");

        let _ = writer.write_all(output.as_bytes());
        let _ = writer.flush();
    }

    fn escape_json_string(output: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '"' => output.push_str("\\\""),
                '\\' => output.push_str("\\\\"),
                '\n' => output.push_str("\\n"),
                '\r' => output.push_str("\\r"),
                '\t' => output.push_str("\\t"),
                c if c.is_control() => {
                    output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => output.push(c),
            }
        }
    }

    /// Log at DEBUG level.
    pub fn debug(event: &str, fields: &[(&str, &str)]) {
        Self::log(LogLevel::Debug, event, fields);
    }

    /// Log at INFO level.
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(LogLevel::Info, event, fields);
    }

    /// Log at WARN level.
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(LogLevel::Warn, event, fields);
    }

    /// Log at ERROR level.
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(LogLevel::Error, event, fields);
    }

    /// Log a completed HTTP request.
    pub fn request(method: &str, path: &str, status: u16) {
        let status = status.to_string();
        let level = if status.starts_with('5') {
            LogLevel::Error
        } else {
            LogLevel::Info
        };
        Self::log(
            level,
            "request_completed",
            &[("method", method), ("path", path), ("status", &status)],
        );
    }

    #[cfg(test)]
    fn render(level: LogLevel, event: &str, fields: &[(&str, &str)]) -> String {
        let mut buf = Vec::new();
        Self::log_to_writer(level, event, fields, &mut buf);
        String::from_utf8(buf).unwrap()
    }
}
