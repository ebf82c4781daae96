use chrono::Local;
use serde::Serialize;

use crate::netinfo::extractor::InterfaceAddress;

/// Outcome tag for one probed candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeNote {
    Ok,
    NoIp,
}

impl ProbeNote {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProbeNote::Ok => "ok",
            ProbeNote::NoIp => "no_ip",
        }
    }
}

/// One row of the result log: what was probed, when, and what address
/// (if any) showed up while it was active.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeRecord {
    pub timestamp: String,
    pub label: String,
    pub iface: String,
    pub ip: String,
    pub note: ProbeNote,
}

impl ProbeRecord {
    /// Builds a row for `label`, stamped with the local wall clock in
    /// ISO-8601 form. A missing address leaves the iface/ip columns
    /// empty and tags the row `no_ip`.
    pub fn new(label: &str, address: Option<InterfaceAddress>) -> Self {
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        match address {
            Some(found) => ProbeRecord {
                timestamp,
                label: label.to_string(),
                iface: found.iface,
                ip: found.address,
                note: ProbeNote::Ok,
            },
            None => ProbeRecord {
                timestamp,
                label: label.to_string(),
                iface: String::new(),
                ip: String::new(),
                note: ProbeNote::NoIp,
            },
        }
    }
}
