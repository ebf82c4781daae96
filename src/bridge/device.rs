use std::fs;

use crate::bridge::adb::{Bridge, BridgeOutput};
use crate::probe::error::ProbeError;
use crate::snapshot::geometry::Point;

/// High-level device operations layered over a [`Bridge`].
///
/// Input events (tap, swipe, back) are fire-and-forget: a spawn failure
/// still propagates, but a non-zero exit does not, because `input` on
/// many devices reports nothing useful either way. Snapshot and listing
/// commands are checked, since their output feeds the pipeline.
pub struct Device<B: Bridge> {
    bridge: B,
}

impl<B: Bridge> Device<B> {
    pub fn new(bridge: B) -> Self {
        Device { bridge }
    }

    fn run(&self, args: &[&str]) -> Result<BridgeOutput, ProbeError> {
        self.bridge.execute(args)
    }

    fn run_checked(&self, args: &[&str]) -> Result<BridgeOutput, ProbeError> {
        let output = self.bridge.execute(args)?;
        if !output.success() {
            return Err(ProbeError::BridgeCommand {
                command: args.join(" "),
                code: output.code,
                stderr: output.stderr.trim().to_string(),
            });
        }
        Ok(output)
    }

    pub fn tap(&self, point: Point) -> Result<(), ProbeError> {
        let x = point.x.to_string();
        let y = point.y.to_string();
        self.run(&["shell", "input", "tap", &x, &y])?;
        Ok(())
    }

    pub fn swipe(&self, from: Point, to: Point, duration_ms: u64) -> Result<(), ProbeError> {
        let x1 = from.x.to_string();
        let y1 = from.y.to_string();
        let x2 = to.x.to_string();
        let y2 = to.y.to_string();
        let ms = duration_ms.to_string();
        self.run(&["shell", "input", "swipe", &x1, &y1, &x2, &y2, &ms])?;
        Ok(())
    }

    /// Sends KEYCODE_BACK, the standard way out of whatever screen an
    /// activation left behind.
    pub fn key_back(&self) -> Result<(), ProbeError> {
        self.run(&["shell", "input", "keyevent", "4"])?;
        Ok(())
    }

    /// Captures the current UI hierarchy: dumps it on the device, pulls
    /// the file over, and returns its contents.
    pub fn fetch_snapshot(&self, device_path: &str, local_path: &str) -> Result<String, ProbeError> {
        self.run_checked(&["shell", "uiautomator", "dump", device_path])?;
        self.run_checked(&["pull", device_path, local_path])?;
        fs::read_to_string(local_path).map_err(|e| ProbeError::SnapshotRead {
            path: local_path.to_string(),
            source: e,
        })
    }

    /// Returns the device's IPv4 interface listing (`ip -4 addr show`).
    pub fn interface_listing(&self) -> Result<String, ProbeError> {
        let output = self.run_checked(&["shell", "ip", "-4", "addr", "show"])?;
        Ok(output.stdout)
    }
}
