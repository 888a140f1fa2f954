//! The [`Logger`] handle used throughout the application.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::log_message::LogMessage;
use crate::log_writer::{LogBuffer, Sink};
use std::path::Path;

/// Cheap-to-clone, thread-safe logger.
///
/// Clones share the same sink. The level filter is applied on the calling
/// side, so filtered records never reach the writer thread.
///
/// # Examples
///
/// ```
/// use logging::{LogLevel, Logger};
///
/// let (logger, buffer) = Logger::in_memory(LogLevel::Info);
/// logger.info("[APP] started");
/// logger.debug("[APP] not recorded");
/// assert_eq!(buffer.lines().len(), 1);
/// ```
#[derive(Clone)]
pub struct Logger {
    sink: Sink,
    level: LogLevel,
    component: Option<String>,
    console_output: bool,
}

impl Logger {
    /// Logs to `log_path`, creating the file if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the writer thread
    /// cannot be started.
    pub fn new(log_path: &Path, level: LogLevel) -> Result<Self> {
        Ok(Self {
            sink: Sink::file(log_path)?,
            level,
            component: None,
            console_output: false,
        })
    }

    /// Logger that keeps records in memory instead of writing a file.
    pub fn in_memory(level: LogLevel) -> (Self, LogBuffer) {
        let buffer = LogBuffer::default();
        let logger = Self {
            sink: Sink::Memory(buffer.clone()),
            level,
            component: None,
            console_output: false,
        };
        (logger, buffer)
    }

    /// Tags every record from the returned logger with `component`.
    pub fn with_component(mut self, component: &str) -> Self {
        self.component = Some(component.to_string());
        self
    }

    /// Also prints every accepted record to stdout.
    pub fn with_console_output(mut self, enabled: bool) -> Self {
        self.console_output = enabled;
        self
    }

    /// Minimum level this logger records.
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Waits until every record logged so far has been written, then stops
    /// the file writer. Records logged afterwards are discarded.
    ///
    /// Call before the process exits; `std::process::exit` does not wait for
    /// the writer thread.
    pub fn shutdown(&self) {
        self.sink.shutdown();
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.level {
            return;
        }
        let record = LogMessage::new(level, self.component.as_deref(), message);
        if self.console_output {
            println!("{}", record.line());
        }
        self.sink.deliver(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use tempfile::tempdir;

    #[test]
    fn test_file_logger_writes_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frontend.log");

        let logger = Logger::new(&path, LogLevel::Debug)
            .unwrap()
            .with_component("Frontend");
        logger.info("[APP] window opened");
        logger.shutdown();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("INFO [Frontend]: [APP] window opened"));
    }

    #[test]
    fn test_shutdown_flushes_before_exit_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("exit.log");

        let logger = Logger::new(&path, LogLevel::Info).unwrap();
        let window_logger = logger.clone().with_component("Frontend");
        window_logger.info("[APP] Application initialized successfully");
        window_logger.error("[APP] Window closed with error: no display");
        logger.shutdown();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("ERROR [Frontend]: [APP] Window closed with error"));
    }

    #[test]
    fn test_level_filter() {
        let (logger, buffer) = Logger::in_memory(LogLevel::Warn);
        logger.debug("debug");
        logger.info("info");
        logger.warn("warn");
        logger.error("error");

        let lines = buffer.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("WARN: warn"));
        assert!(lines[1].contains("ERROR: error"));
    }

    #[test]
    fn test_clones_share_sink_across_threads() {
        let (logger, buffer) = Logger::in_memory(LogLevel::Info);
        let worker = logger.clone().with_component("Worker");

        thread::spawn(move || worker.info("from thread"))
            .join()
            .unwrap();
        logger.info("from main");

        assert!(buffer.contains("INFO [Worker]: from thread"));
        assert!(buffer.contains("INFO: from main"));
    }

    #[test]
    fn test_level_accessor() {
        let (logger, _) = Logger::in_memory(LogLevel::Error);
        assert_eq!(logger.level(), LogLevel::Error);
    }
}
