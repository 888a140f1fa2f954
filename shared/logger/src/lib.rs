//! Non-blocking logging for the live stream frontend.
//!
//! Records are handed to a [`Logger`], filtered by [`LogLevel`], and
//! delivered to a sink: a log file drained by a dedicated writer thread, or
//! an in-memory [`LogBuffer`] that tests can inspect.

pub mod error;
mod log_level;
mod log_message;
mod log_writer;
mod logger;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use log_writer::LogBuffer;
pub use logger::Logger;
