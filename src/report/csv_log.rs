use std::fs::File;
use std::io::Write;

use crate::probe::error::ProbeError;
use crate::report::record::ProbeRecord;

const HEADER: &str = "timestamp,server_label,iface,ip,note";

/// CSV result log, recreated at the start of every run.
///
/// Opening truncates whatever a previous run left at the path and writes
/// the header, so the file always holds one header and the current run's
/// rows. Rows are flushed as they are written so an interrupted run
/// keeps everything probed so far.
pub struct ResultLog {
    path: String,
    file: File,
}

impl ResultLog {
    /// Creates (or overwrites) the log at `path` and writes the header
    /// row.
    pub fn open(path: &str) -> Result<Self, ProbeError> {
        let file = File::create(path).map_err(|e| ProbeError::LogWrite {
            path: path.to_string(),
            source: e,
        })?;
        let mut log = ResultLog {
            path: path.to_string(),
            file,
        };
        log.write_line(HEADER)?;
        Ok(log)
    }

    pub fn append(&mut self, record: &ProbeRecord) -> Result<(), ProbeError> {
        let line = format!(
            "{},{},{},{},{}",
            escape_csv(&record.timestamp),
            escape_csv(&record.label),
            escape_csv(&record.iface),
            escape_csv(&record.ip),
            record.note.as_str()
        );
        self.write_line(&line)
    }

    fn write_line(&mut self, line: &str) -> Result<(), ProbeError> {
        writeln!(self.file, "{}", line)
            .and_then(|_| self.file.flush())
            .map_err(|e| ProbeError::LogWrite {
                path: self.path.clone(),
                source: e,
            })
    }
}

/// Quotes a field when it carries a comma, quote, or line break;
/// embedded quotes are doubled per RFC 4180.
fn escape_csv(field: &str) -> String {
    let needs_quoting = field
        .chars()
        .any(|c| matches!(c, ',' | '"' | '\n' | '\r'));
    if needs_quoting {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
