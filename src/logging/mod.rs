use chrono::Local;
use log::{error, info, warn};

/// Severity of a reader log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        }
    }
}

/// Narrow logging interface the metering core reports through.
///
/// The reader only ever talks to this trait, so callers can route its
/// output anywhere (stdout, the `log` facade, a test recorder).
pub trait ReadingLogger {
    fn log(&self, message: &str, severity: Severity, visibility: &str, tag: &str);
}

/// Default logger writing a timestamped line to stdout.
pub struct StdoutLogger {
    min_severity: Severity,
}

impl StdoutLogger {
    pub fn new() -> Self {
        StdoutLogger { min_severity: Severity::Info }
    }

    pub fn with_min_severity(min_severity: Severity) -> Self {
        StdoutLogger { min_severity }
    }
}

impl Default for StdoutLogger {
    fn default() -> Self {
        StdoutLogger::new()
    }
}

impl ReadingLogger for StdoutLogger {
    fn log(&self, message: &str, severity: Severity, _visibility: &str, tag: &str) {
        if severity < self.min_severity {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        println!("[{}] [{}] [{}] {}", timestamp, severity.as_str(), tag, message);
    }
}

/// Forwards reader log lines onto the `log` facade, so that they end up
/// wherever env_logger is pointed.
pub struct LogForwarder;

impl ReadingLogger for LogForwarder {
    fn log(&self, message: &str, severity: Severity, _visibility: &str, tag: &str) {
        match severity {
            Severity::Info => info!("[{}] {}", tag, message),
            Severity::Warning => warn!("[{}] {}", tag, message),
            Severity::Error => error!("[{}] {}", tag, message),
        }
    }
}
