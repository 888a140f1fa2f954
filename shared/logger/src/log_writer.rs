//! Log sinks: a background file writer and an in-memory buffer.

use crate::error::{LoggingError, Result};
use crate::log_message::LogMessage;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Messages understood by the writer thread.
pub(crate) enum WriterCommand {
    Record(LogMessage),
    /// Stop after everything queued before it has been written.
    Shutdown,
}

/// Channel to the writer thread plus the handle needed to wait for it.
#[derive(Clone)]
pub(crate) struct FileSink {
    sender: Sender<WriterCommand>,
    writer: Arc<Mutex<Option<JoinHandle<()>>>>,
}

/// Destination for records that passed the level filter.
#[derive(Clone)]
pub(crate) enum Sink {
    File(FileSink),
    Memory(LogBuffer),
}

impl Sink {
    /// Opens `path` in append mode and starts the thread that drains records into it.
    pub fn file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (sender, receiver) = channel();

        let handle = std::thread::Builder::new()
            .name("log-writer".to_string())
            .spawn(move || drain(BufWriter::new(file), receiver))
            .map_err(|e| LoggingError::Logging(format!("cannot spawn writer: {}", e)))?;

        Ok(Sink::File(FileSink {
            sender,
            writer: Arc::new(Mutex::new(Some(handle))),
        }))
    }

    pub fn deliver(&self, message: LogMessage) {
        match self {
            // Fails only once the writer has been shut down; late records are dropped.
            Sink::File(file) => {
                let _ = file.sender.send(WriterCommand::Record(message));
            }
            Sink::Memory(buffer) => buffer.push(message.line()),
        }
    }

    /// Blocks until every record delivered so far is on disk, then stops the
    /// writer. Later calls, from any clone, return immediately.
    pub fn shutdown(&self) {
        let Sink::File(file) = self else {
            return;
        };
        let handle = file.writer.lock().ok().and_then(|mut writer| writer.take());
        if let Some(handle) = handle {
            let _ = file.sender.send(WriterCommand::Shutdown);
            if handle.join().is_err() {
                eprintln!("Log writer thread panicked");
            }
        }
    }
}

/// Writes every record, flushing after each so a crash loses at most one line.
fn drain(mut out: BufWriter<File>, receiver: Receiver<WriterCommand>) {
    for command in receiver {
        let WriterCommand::Record(message) = command else {
            break;
        };
        if let Err(e) = writeln!(out, "{}", message.line()).and_then(|_| out.flush()) {
            eprintln!("Error writing log: {}", e);
        }
    }
}

/// Shared in-memory record store.
#[derive(Clone, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    fn push(&self, line: String) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line);
        }
    }

    /// Snapshot of every formatted line captured so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }

    /// True if any captured line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}
