use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::probe::orchestrator::ProbePhase;

/// One line of the probe trace: where the run was and what it saw.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub phase: String,

    pub candidate: Option<String>,
    pub detail: Option<String>,
}

impl TraceEvent {
    pub fn now(phase: &ProbePhase) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            phase: format!("{:?}", phase),
            candidate: None,
            detail: None,
        }
    }

    pub fn with_candidate(mut self, label: impl ToString) -> Self {
        self.candidate = Some(label.to_string());
        self
    }

    pub fn with_detail(mut self, detail: impl ToString) -> Self {
        self.detail = Some(detail.to_string());
        self
    }
}
