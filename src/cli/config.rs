use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::probe::config::ProbeConfig;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "vpn-probe",
    version,
    about = "Walks a device's server list UI and records which entries bring up a tunnel"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Device serial (adb -s); omit when exactly one device is attached
    #[arg(short, long, global = true)]
    pub serial: Option<String>,

    /// Path to config file (default: vpn-probe.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probe every candidate entry and append one CSV row per probe
    Probe {
        /// CSV result log path
        #[arg(short, long)]
        out: Option<String>,

        /// Write a JSONL trace of every probe phase to this path
        #[arg(long)]
        trace: Option<String>,
    },

    /// Capture the screen once and list what would be probed
    Candidates,

    /// Read the interface listing once and report any tunnel address
    Interfaces,
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `vpn-probe.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub probe: ProbeConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub device: DeviceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            probe: ProbeConfig::default(),
            output: OutputConfig::default(),
            device: DeviceConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_csv")]
    pub csv: String,

    pub trace: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv: "vpn_ips.csv".to_string(),
            trace: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DeviceConfig {
    pub serial: Option<String>,
}

// Serde default helpers
fn default_csv() -> String {
    "vpn_ips.csv".to_string()
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("vpn-probe.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
