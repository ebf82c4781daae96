use serde::{Deserialize, Serialize};

use crate::candidates::model::SelectorRules;
use crate::netinfo::extractor::default_vpn_tokens;
use crate::snapshot::geometry::Point;

/// A single directional swipe, used to nudge scrollable lists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SwipeGesture {
    pub from: Point,
    pub to: Point,
    pub duration_ms: u64,
}

/// Everything the probe loop needs to know about the device UI it is
/// driving: where the activation control sits, how long each phase
/// settles, and how to recognize the things it is looking for.
///
/// Defaults target a 1080x1920-class screen with the activation control
/// in the lower third. Override per app via the YAML config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Fixed screen point tapped to activate the selected entry.
    #[serde(default = "default_activate_point")]
    pub activate_point: Point,

    /// Settle pause after a selection or activation tap.
    #[serde(default = "default_tap_pause_ms")]
    pub tap_pause_ms: u64,

    /// How long to give the service to come up before reading interfaces.
    #[serde(default = "default_connect_wait_ms")]
    pub connect_wait_ms: u64,

    /// Settle pause after the deactivation tap.
    #[serde(default = "default_disconnect_wait_ms")]
    pub disconnect_wait_ms: u64,

    /// Settle pause after the recovery swipe, before re-capturing.
    #[serde(default = "default_post_swipe_pause_ms")]
    pub post_swipe_pause_ms: u64,

    /// Swipe fired once when the first capture yields no candidates.
    #[serde(default = "default_recovery_swipe")]
    pub recovery_swipe: SwipeGesture,

    /// Where the UI hierarchy dump lands on the device.
    #[serde(default = "default_snapshot_device_path")]
    pub snapshot_device_path: String,

    /// Where the pulled dump lands locally.
    #[serde(default = "default_snapshot_local_path")]
    pub snapshot_local_path: String,

    #[serde(default)]
    pub selector: SelectorRules,

    /// Substrings that mark an interface name as a tunnel.
    #[serde(default = "default_vpn_tokens")]
    pub vpn_tokens: Vec<String>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            activate_point: default_activate_point(),
            tap_pause_ms: default_tap_pause_ms(),
            connect_wait_ms: default_connect_wait_ms(),
            disconnect_wait_ms: default_disconnect_wait_ms(),
            post_swipe_pause_ms: default_post_swipe_pause_ms(),
            recovery_swipe: default_recovery_swipe(),
            snapshot_device_path: default_snapshot_device_path(),
            snapshot_local_path: default_snapshot_local_path(),
            selector: SelectorRules::default(),
            vpn_tokens: default_vpn_tokens(),
        }
    }
}

// Serde default helpers
fn default_activate_point() -> Point {
    Point::new(540, 1700)
}
fn default_tap_pause_ms() -> u64 {
    600
}
fn default_connect_wait_ms() -> u64 {
    8000
}
fn default_disconnect_wait_ms() -> u64 {
    1000
}
fn default_post_swipe_pause_ms() -> u64 {
    800
}
fn default_recovery_swipe() -> SwipeGesture {
    SwipeGesture {
        from: Point::new(540, 1600),
        to: Point::new(540, 500),
        duration_ms: 500,
    }
}
fn default_snapshot_device_path() -> String {
    "/sdcard/uidump.xml".to_string()
}
fn default_snapshot_local_path() -> String {
    "uidump.xml".to_string()
}
