use std::fmt;

#[derive(Debug)]
pub enum ProbeError {
    /// The bridge executable failed to spawn (adb not on PATH, permissions)
    BridgeSpawn { tool: String, source: std::io::Error },

    /// A checked bridge command exited with a non-zero status
    BridgeCommand { command: String, code: Option<i32>, stderr: String },

    /// The pulled snapshot file could not be read from local storage
    SnapshotRead { path: String, source: std::io::Error },

    /// The snapshot document is not parseable XML
    SnapshotMalformed { context: String, source: roxmltree::Error },

    /// The result log could not be created or appended to
    LogWrite { path: String, source: std::io::Error },
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::BridgeSpawn { tool, source } => {
                write!(f, "Failed to spawn {} (is it on PATH?): {}", tool, source)
            }
            ProbeError::BridgeCommand { command, code, stderr } => {
                match code {
                    Some(code) => write!(f, "`{}` exited with code {}: {}", command, code, stderr),
                    None => write!(f, "`{}` was terminated by a signal: {}", command, stderr),
                }
            }
            ProbeError::SnapshotRead { path, source } => {
                write!(f, "Failed to read snapshot file '{}': {}", path, source)
            }
            ProbeError::SnapshotMalformed { context, source } => {
                write!(f, "Malformed UI snapshot ({}): {}", context, source)
            }
            ProbeError::LogWrite { path, source } => {
                write!(f, "Result log '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::BridgeSpawn { source, .. } => Some(source),
            ProbeError::SnapshotRead { source, .. } => Some(source),
            ProbeError::SnapshotMalformed { source, .. } => Some(source),
            ProbeError::LogWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}
