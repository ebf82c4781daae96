use std::collections::HashSet;

use crate::candidates::model::{Candidate, SelectorRules, MAX_LABEL_CHARS, MIN_LABEL_CHARS};
use crate::snapshot::model::UiElement;

/// Filter parsed elements down to the rows worth probing.
///
/// An element qualifies when it is clickable, its trimmed text is within
/// the label length bounds, and the lower-cased text is not stoplisted.
/// Labels are deduplicated first-occurrence-wins; later repeats are
/// dropped silently. Document order is preserved, and the dedup set is
/// local to this call, so the same input always yields the same output.
pub fn select_candidates(elements: &[UiElement], rules: &SelectorRules) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for el in elements {
        let label = el.text.trim();

        if !el.clickable || !label_length_ok(label) || rules.is_stoplisted(label) {
            continue;
        }

        if seen.insert(label.to_string()) {
            candidates.push(Candidate {
                label: label.to_string(),
                bounds: el.bounds.clone(),
            });
        }
    }

    candidates
}

fn label_length_ok(label: &str) -> bool {
    let chars = label.chars().count();
    (MIN_LABEL_CHARS..=MAX_LABEL_CHARS).contains(&chars)
}
