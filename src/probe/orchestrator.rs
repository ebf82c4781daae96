use std::thread;
use std::time::Duration;

use crate::{
    bridge::{adb::Bridge, device::Device},
    candidates::model::Candidate,
    candidates_from_xml,
    netinfo::extractor::find_tunnel_address,
    probe::{config::ProbeConfig, error::ProbeError},
    report::{csv_log::ResultLog, record::ProbeRecord},
    snapshot::geometry::bounds_center,
    trace::{logger::TraceLogger, trace::TraceEvent},
};

/// Where the probe loop currently is, for tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbePhase {
    Capture,
    Recover,
    Select,
    Activate,
    Wait,
    Observe,
    Deactivate,
    Return,
}

/// What one candidate probe produced.
enum ProbeOutcome {
    Address,
    NoAddress,
    Skipped,
}

/// Tallies for a whole run, printed at the end and returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeSummary {
    pub candidates: usize,
    pub probed: usize,
    pub with_address: usize,
    pub skipped: usize,
}

/// Drives one full probe pass over a device: capture the screen, pick
/// candidates, and walk each one through select / activate / observe /
/// deactivate / return, appending a result row per probe.
pub struct ProbeRun<'a, B: Bridge> {
    device: &'a Device<B>,
    config: &'a ProbeConfig,
    tracer: &'a TraceLogger,
}

impl<'a, B: Bridge> ProbeRun<'a, B> {
    pub fn new(device: &'a Device<B>, config: &'a ProbeConfig, tracer: &'a TraceLogger) -> Self {
        ProbeRun {
            device,
            config,
            tracer,
        }
    }

    pub fn run(&self, log: &mut ResultLog) -> Result<ProbeSummary, ProbeError> {
        let candidates = self.collect_candidates()?;
        println!("Found {} candidate entries", candidates.len());

        let mut summary = ProbeSummary {
            candidates: candidates.len(),
            probed: 0,
            with_address: 0,
            skipped: 0,
        };

        for candidate in &candidates {
            println!("Probing '{}'", candidate.label);
            match self.probe_candidate(candidate, log)? {
                ProbeOutcome::Address => {
                    summary.probed += 1;
                    summary.with_address += 1;
                }
                ProbeOutcome::NoAddress => summary.probed += 1,
                ProbeOutcome::Skipped => summary.skipped += 1,
            }
        }

        Ok(summary)
    }

    /// Captures the screen and selects candidates. An empty or unreadable
    /// first capture gets one recovery swipe and a second try; a failure
    /// on the second capture is fatal. Spawn failures are always fatal,
    /// since nothing later in the run could work either.
    pub fn collect_candidates(&self) -> Result<Vec<Candidate>, ProbeError> {
        self.tracer.log(&TraceEvent::now(&ProbePhase::Capture));
        let first = match self.capture_candidates() {
            Ok(candidates) => candidates,
            Err(e @ ProbeError::BridgeSpawn { .. }) => return Err(e),
            Err(e) => {
                println!("First capture failed ({}), scrolling and retrying", e);
                Vec::new()
            }
        };
        if !first.is_empty() {
            return Ok(first);
        }

        self.tracer
            .log(&TraceEvent::now(&ProbePhase::Recover).with_detail("swipe"));
        let swipe = &self.config.recovery_swipe;
        self.device.swipe(swipe.from, swipe.to, swipe.duration_ms)?;
        settle(self.config.post_swipe_pause_ms);

        self.tracer
            .log(&TraceEvent::now(&ProbePhase::Capture).with_detail("retry"));
        self.capture_candidates()
    }

    /// One capture of the current screen: dump, pull, parse, select.
    /// Sends no input events and never retries; the probe loop wraps
    /// this with its recovery swipe, the dry run takes it as is.
    pub fn capture_candidates(&self) -> Result<Vec<Candidate>, ProbeError> {
        let xml = self.device.fetch_snapshot(
            &self.config.snapshot_device_path,
            &self.config.snapshot_local_path,
        )?;
        candidates_from_xml(&xml, &self.config.selector)
    }

    fn probe_candidate(
        &self,
        candidate: &Candidate,
        log: &mut ResultLog,
    ) -> Result<ProbeOutcome, ProbeError> {
        let target = match bounds_center(&candidate.bounds) {
            Some(point) => point,
            None => {
                println!(
                    "Skipping '{}': unusable bounds '{}'",
                    candidate.label, candidate.bounds
                );
                self.tracer.log(
                    &TraceEvent::now(&ProbePhase::Select)
                        .with_candidate(&candidate.label)
                        .with_detail("unresolvable bounds"),
                );
                return Ok(ProbeOutcome::Skipped);
            }
        };

        self.tracer.log(
            &TraceEvent::now(&ProbePhase::Select)
                .with_candidate(&candidate.label)
                .with_detail(format!("tap {},{}", target.x, target.y)),
        );
        self.device.tap(target)?;
        settle(self.config.tap_pause_ms);

        self.tracer.log(
            &TraceEvent::now(&ProbePhase::Activate).with_candidate(&candidate.label),
        );
        self.device.tap(self.config.activate_point)?;

        self.tracer
            .log(&TraceEvent::now(&ProbePhase::Wait).with_candidate(&candidate.label));
        settle(self.config.connect_wait_ms);

        // A listing command that exits non-zero reads the same as no
        // tunnel coming up: the row still lands, tagged no_ip.
        let found = match self.device.interface_listing() {
            Ok(listing) => find_tunnel_address(&listing, &self.config.vpn_tokens),
            Err(ProbeError::BridgeCommand { .. }) => None,
            Err(e) => return Err(e),
        };

        let detail = match &found {
            Some(address) => format!("{} {}", address.iface, address.address),
            None => "no address".to_string(),
        };
        println!("  -> {}", detail);
        self.tracer.log(
            &TraceEvent::now(&ProbePhase::Observe)
                .with_candidate(&candidate.label)
                .with_detail(&detail),
        );

        let outcome = if found.is_some() {
            ProbeOutcome::Address
        } else {
            ProbeOutcome::NoAddress
        };
        log.append(&ProbeRecord::new(&candidate.label, found))?;

        self.tracer.log(
            &TraceEvent::now(&ProbePhase::Deactivate).with_candidate(&candidate.label),
        );
        self.device.tap(self.config.activate_point)?;
        settle(self.config.disconnect_wait_ms);

        self.tracer
            .log(&TraceEvent::now(&ProbePhase::Return).with_candidate(&candidate.label));
        self.device.key_back()?;
        settle(self.config.tap_pause_ms);

        Ok(outcome)
    }
}

fn settle(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}
