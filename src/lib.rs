use crate::{
    candidates::{
        model::{Candidate, SelectorRules},
        selector::select_candidates,
    },
    probe::error::ProbeError,
    snapshot::parser::parse_snapshot,
};

pub mod bridge;
pub mod candidates;
pub mod cli;
pub mod netinfo;
pub mod probe;
pub mod report;
pub mod snapshot;
pub mod trace;

/// Parse a UI snapshot and select the entries worth probing, in document
/// order. The pure half of a capture, with no device involved.
pub fn candidates_from_xml(
    xml: &str,
    rules: &SelectorRules,
) -> Result<Vec<Candidate>, ProbeError> {
    let elements = parse_snapshot(xml)?;
    Ok(select_candidates(&elements, rules))
}
