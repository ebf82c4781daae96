use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

use crate::trace::trace::TraceEvent;

/// JSONL sink for probe trace events.
///
/// Tracing is best-effort: an unopenable file downgrades the logger to a
/// no-op at construction, and the first failed write drops the sink for
/// the rest of the run. Either way a single warning lands on stderr and
/// the probe keeps going.
pub struct TraceLogger {
    sink: Mutex<Option<File>>,
}

impl TraceLogger {
    /// A logger that swallows every event, for runs without a trace path.
    pub fn disabled() -> Self {
        Self {
            sink: Mutex::new(None),
        }
    }

    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                sink: Mutex::new(Some(file)),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self::disabled()
            }
        }
    }

    /// True while events are still being written.
    pub fn enabled(&self) -> bool {
        match self.sink.lock() {
            Ok(sink) => sink.is_some(),
            Err(poisoned) => poisoned.into_inner().is_some(),
        }
    }

    pub fn log(&self, event: &TraceEvent) {
        let json = match serde_json::to_string(event) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Warning: failed to serialize trace event: {}", e);
                return;
            }
        };

        let mut sink = match self.sink.lock() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        };
        let file = match sink.as_mut() {
            Some(file) => file,
            None => return,
        };

        if let Err(e) = writeln!(file, "{}", json) {
            eprintln!("Warning: trace file stopped taking events ({}), tracing disabled", e);
            *sink = None;
        }
    }
}
