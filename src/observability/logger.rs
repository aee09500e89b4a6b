//! Structured JSON logger
//!
//! One JSON object per line on stderr. `event` and `severity` lead, the
//! remaining fields follow sorted by key. stdout carries command responses only.

use std::fmt;
use std::io::{self, Write};

use serde_json::Value;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Debug-level detail, e.g. ungoverned semantics
    Trace = 0,
    Info = 1,
    /// Tolerated semantic mismatches
    Warn = 2,
    /// Load failures and rejected semantics under the reject policy
    Error = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes structured log lines to stderr
pub struct Logger;

impl Logger {
    /// Logs one event. Write failures are swallowed.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        let line = Self::line(severity, event, fields);
        let mut stderr = io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
        let _ = stderr.flush();
    }

    /// Renders one newline-terminated log line
    pub(crate) fn line(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
        let mut sorted: Vec<&(&str, &str)> = fields.iter().collect();
        sorted.sort_by_key(|(key, _)| *key);

        let mut line = format!(
            "{{\"event\":{},\"severity\":\"{}\"",
            quoted(event),
            severity
        );
        for (key, value) in sorted {
            line.push(',');
            line.push_str(&quoted(key));
            line.push(':');
            line.push_str(&quoted(value));
        }
        line.push_str("}\n");
        line
    }
}

fn quoted(s: &str) -> String {
    Value::from(s).to_string()
}
