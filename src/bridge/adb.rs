use std::process::Command;

use crate::probe::error::ProbeError;

/// Captured result of one bridge round trip.
#[derive(Debug, Clone)]
pub struct BridgeOutput {
    pub stdout: String,
    pub stderr: String,
    pub code: Option<i32>,
}

impl BridgeOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Synchronous command transport to a single attached device.
///
/// Everything above this trait depends on the request/response contract
/// only, never on the adb binary; tests substitute a scripted
/// implementation.
pub trait Bridge {
    fn execute(&self, args: &[&str]) -> Result<BridgeOutput, ProbeError>;
}

/// The real bridge: shells out to `adb`, optionally pinned to one device
/// serial (`adb -s <serial> ...`).
pub struct AdbBridge {
    serial: Option<String>,
}

impl AdbBridge {
    pub fn new() -> Self {
        AdbBridge { serial: None }
    }

    pub fn with_serial(serial: &str) -> Self {
        AdbBridge {
            serial: Some(serial.to_string()),
        }
    }
}

impl Bridge for AdbBridge {
    fn execute(&self, args: &[&str]) -> Result<BridgeOutput, ProbeError> {
        let mut cmd = Command::new("adb");
        if let Some(serial) = &self.serial {
            cmd.arg("-s").arg(serial);
        }

        let output = cmd
            .args(args)
            .output()
            .map_err(|e| ProbeError::BridgeSpawn {
                tool: "adb".into(),
                source: e,
            })?;

        Ok(BridgeOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        })
    }
}
