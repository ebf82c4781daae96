/// One node of a parsed UI snapshot, flattened out of the hierarchy.
///
/// Carries exactly the attributes the selection heuristics need; parsing
/// applies no filtering, so most elements in a snapshot are neither
/// clickable nor labeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiElement {
    pub clickable: bool,
    pub text: String,
    pub bounds: String,
}
