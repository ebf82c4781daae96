use crate::bridge::adb::AdbBridge;
use crate::bridge::device::Device;
use crate::cli::config::AppConfig;
use crate::netinfo::extractor::find_tunnel_address;
use crate::probe::orchestrator::ProbeRun;
use crate::report::csv_log::ResultLog;
use crate::snapshot::geometry::bounds_center;
use crate::trace::logger::TraceLogger;

// ============================================================================
// probe subcommand
// ============================================================================

pub fn cmd_probe(
    config: &AppConfig,
    serial: Option<&str>,
    out: Option<&str>,
    trace: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let device = connect(serial, config);

    let csv_path = out.unwrap_or(&config.output.csv);
    let trace_path = trace.or(config.output.trace.as_deref());
    let tracer = match trace_path {
        Some(path) => TraceLogger::new(path),
        None => TraceLogger::disabled(),
    };

    if verbose > 0 {
        eprintln!("Writing results to {}", csv_path);
        if let Some(path) = trace_path {
            if tracer.enabled() {
                eprintln!("Tracing to {}", path);
            }
        }
    }

    let mut log = ResultLog::open(csv_path)?;
    let run = ProbeRun::new(&device, &config.probe, &tracer);
    let summary = run.run(&mut log)?;

    println!(
        "Probed {} of {} candidates: {} with an address, {} without, {} skipped",
        summary.probed,
        summary.candidates,
        summary.with_address,
        summary.probed - summary.with_address,
        summary.skipped
    );

    Ok(())
}

// ============================================================================
// candidates subcommand
// ============================================================================

/// Dry run: one capture of whatever is on screen right now, selected
/// and printed. No taps, no recovery swipe.
pub fn cmd_candidates(
    config: &AppConfig,
    serial: Option<&str>,
    verbose: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let device = connect(serial, config);
    let tracer = TraceLogger::disabled();
    let run = ProbeRun::new(&device, &config.probe, &tracer);

    if verbose > 0 {
        eprintln!("Capturing UI snapshot...");
    }

    let candidates = run.capture_candidates()?;
    if candidates.is_empty() {
        println!("No candidates on screen");
        return Ok(());
    }

    println!("{} candidates:", candidates.len());
    for candidate in &candidates {
        match bounds_center(&candidate.bounds) {
            Some(point) => println!("  '{}' at {},{}", candidate.label, point.x, point.y),
            None => println!(
                "  '{}' (unresolvable bounds '{}')",
                candidate.label, candidate.bounds
            ),
        }
    }

    Ok(())
}

// ============================================================================
// interfaces subcommand
// ============================================================================

pub fn cmd_interfaces(
    config: &AppConfig,
    serial: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let device = connect(serial, config);
    let listing = device.interface_listing()?;

    match find_tunnel_address(&listing, &config.probe.vpn_tokens) {
        Some(address) => println!("{} {}", address.iface, address.address),
        None => println!("No tunnel interface up"),
    }

    Ok(())
}

// ============================================================================
// Helpers
// ============================================================================

/// Build the device handle, preferring the CLI serial over the config file.
fn connect(serial: Option<&str>, config: &AppConfig) -> Device<AdbBridge> {
    let serial = serial.or(config.device.serial.as_deref());
    let bridge = match serial {
        Some(s) => AdbBridge::with_serial(s),
        None => AdbBridge::new(),
    };
    Device::new(bridge)
}
