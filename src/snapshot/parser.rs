use roxmltree::Document;

use crate::probe::error::ProbeError;
use crate::snapshot::model::UiElement;

/// Parse a uiautomator XML dump into a flat element list.
///
/// Every `<node>` element is visited in document order, regardless of
/// nesting depth. A node missing `clickable` or `text` is treated as
/// unclickable with empty text; dropping such nodes is the selector's
/// decision, not the parser's.
pub fn parse_snapshot(xml: &str) -> Result<Vec<UiElement>, ProbeError> {
    let doc = Document::parse(xml).map_err(|e| ProbeError::SnapshotMalformed {
        context: "uiautomator dump".into(),
        source: e,
    })?;

    let elements = doc
        .descendants()
        .filter(|node| node.has_tag_name("node"))
        .map(|node| UiElement {
            clickable: node.attribute("clickable") == Some("true"),
            text: node.attribute("text").unwrap_or("").to_string(),
            bounds: node.attribute("bounds").unwrap_or("").to_string(),
        })
        .collect();

    Ok(elements)
}
