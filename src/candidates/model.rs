use serde::{Deserialize, Serialize};

/// Trimmed label length bounds for a probe-worthy row.
pub const MIN_LABEL_CHARS: usize = 1;
pub const MAX_LABEL_CHARS: usize = 40;

/// A probe-worthy element: the visible label and the raw bounds string
/// it was found at. Labels are unique within one selection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub label: String,
    pub bounds: String,
}

/// Injectable selection heuristics.
///
/// The stoplist names generic action chrome (connect, back, ok, ...)
/// that must never be probed as data rows; membership is tested against
/// the lower-cased trimmed label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorRules {
    #[serde(default = "default_stoplist")]
    pub stoplist: Vec<String>,
}

impl SelectorRules {
    pub fn is_stoplisted(&self, label: &str) -> bool {
        let lower = label.to_lowercase();
        self.stoplist.iter().any(|word| *word == lower)
    }
}

impl Default for SelectorRules {
    fn default() -> Self {
        Self {
            stoplist: default_stoplist(),
        }
    }
}

fn default_stoplist() -> Vec<String> {
    [
        "connect",
        "disconnect",
        "refresh",
        "settings",
        "back",
        "search",
        "ok",
        "cancel",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
