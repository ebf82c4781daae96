use vpn_probe::probe::error::ProbeError;
use vpn_probe::snapshot::geometry::{Point, bounds_center};
use vpn_probe::snapshot::model::UiElement;
use vpn_probe::snapshot::parser::parse_snapshot;

// ============================================================================
// Helper builders
// ============================================================================

fn dump(body: &str) -> String {
    format!(
        "<?xml version='1.0' encoding='UTF-8' standalone='yes' ?><hierarchy rotation=\"0\">{}</hierarchy>",
        body
    )
}

// ============================================================================
// 1. Flat nodes parse with their attributes
// ============================================================================

#[test]
fn parse_flat_nodes() {
    let xml = dump(concat!(
        r#"<node text="Germany #3" clickable="true" bounds="[0,100][1080,250]" />"#,
        r#"<node text="Norway" clickable="false" bounds="[0,250][1080,400]" />"#,
    ));
    let elements = parse_snapshot(&xml).unwrap();

    assert_eq!(
        elements,
        vec![
            UiElement {
                clickable: true,
                text: "Germany #3".into(),
                bounds: "[0,100][1080,250]".into(),
            },
            UiElement {
                clickable: false,
                text: "Norway".into(),
                bounds: "[0,250][1080,400]".into(),
            },
        ]
    );
}

// ============================================================================
// 2. Nested nodes come out in document order
// ============================================================================

#[test]
fn parse_nested_document_order() {
    let xml = dump(concat!(
        r#"<node text="list" clickable="false" bounds="[0,0][1080,1920]">"#,
        r#"<node text="row 1" clickable="true" bounds="[0,0][1080,200]">"#,
        r#"<node text="flag" clickable="false" bounds="[0,0][100,100]" />"#,
        r#"</node>"#,
        r#"<node text="row 2" clickable="true" bounds="[0,200][1080,400]" />"#,
        r#"</node>"#,
    ));
    let elements = parse_snapshot(&xml).unwrap();

    let texts: Vec<&str> = elements.iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["list", "row 1", "flag", "row 2"]);
}

// ============================================================================
// 3. Missing attributes fall back to unclickable / empty
// ============================================================================

#[test]
fn parse_attribute_defaults() {
    let xml = dump(r#"<node index="4" class="android.view.View" />"#);
    let elements = parse_snapshot(&xml).unwrap();

    assert_eq!(elements.len(), 1);
    assert!(!elements[0].clickable);
    assert_eq!(elements[0].text, "");
    assert_eq!(elements[0].bounds, "");
}

// ============================================================================
// 4. Only the literal string "true" marks a node clickable
// ============================================================================

#[test]
fn parse_clickable_literal_true_only() {
    let xml = dump(concat!(
        r#"<node text="a" clickable="true" />"#,
        r#"<node text="b" clickable="false" />"#,
        r#"<node text="c" clickable="TRUE" />"#,
        r#"<node text="d" clickable="1" />"#,
    ));
    let elements = parse_snapshot(&xml).unwrap();

    let clickables: Vec<bool> = elements.iter().map(|e| e.clickable).collect();
    assert_eq!(clickables, vec![true, false, false, false]);
}

// ============================================================================
// 5. Elements that are not <node> are ignored
// ============================================================================

#[test]
fn parse_ignores_other_elements() {
    let xml = dump(concat!(
        r#"<banner text="not a node" clickable="true" />"#,
        r#"<node text="real" clickable="true" bounds="[0,0][10,10]" />"#,
    ));
    let elements = parse_snapshot(&xml).unwrap();

    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].text, "real");
}

// ============================================================================
// 6. Empty hierarchy parses to an empty list
// ============================================================================

#[test]
fn parse_empty_hierarchy() {
    let elements = parse_snapshot(&dump("")).unwrap();
    assert!(elements.is_empty());
}

// ============================================================================
// 7. Malformed XML is a parse error, not a panic
// ============================================================================

#[test]
fn parse_malformed_is_error() {
    let result = parse_snapshot("<?xml version='1.0'?><hierarchy><node");
    assert!(matches!(
        result,
        Err(ProbeError::SnapshotMalformed { .. })
    ));
}

// ============================================================================
// 8. Centroid of a well-formed bounds string
// ============================================================================

#[test]
fn center_of_bounds() {
    assert_eq!(bounds_center("[10,20][30,60]"), Some(Point::new(20, 40)));
}

// ============================================================================
// 9. Centroid uses integer division
// ============================================================================

#[test]
fn center_truncates() {
    assert_eq!(bounds_center("[0,0][5,5]"), Some(Point::new(2, 2)));
}

// ============================================================================
// 10. Negative coordinates are accepted
// ============================================================================

#[test]
fn center_negative_coordinates() {
    // Partially off-screen rows dump with negative corners
    assert_eq!(
        bounds_center("[-100,50][-20,150]"),
        Some(Point::new(-60, 100))
    );
}

// ============================================================================
// 11. Fewer than four integers resolves to nothing
// ============================================================================

#[test]
fn center_requires_four_integers() {
    assert_eq!(bounds_center(""), None);
    assert_eq!(bounds_center("[10,20]"), None);
    assert_eq!(bounds_center("10 20 30"), None);
    assert_eq!(bounds_center("no digits here"), None);
}

// ============================================================================
// 12. Extra integers beyond the first four are ignored
// ============================================================================

#[test]
fn center_first_four_win() {
    assert_eq!(bounds_center("[1,2][3,4][5,6]"), Some(Point::new(2, 3)));
}

// ============================================================================
// 13. The scan is format-liberal: any four integers count
// ============================================================================

#[test]
fn center_accepts_loose_formats() {
    assert_eq!(bounds_center("x=10 y=20 w=30 h=60"), Some(Point::new(20, 40)));
}

// ============================================================================
// 14. Coordinates at the integer limits do not wrap
// ============================================================================

#[test]
fn center_extreme_coordinates() {
    let bounds = format!("[{},0][{},10]", i32::MAX, i32::MAX);
    assert_eq!(bounds_center(&bounds), Some(Point::new(i32::MAX, 5)));

    let bounds = format!("[{},{}][{},{}]", i32::MIN, i32::MIN, i32::MIN, i32::MIN);
    assert_eq!(bounds_center(&bounds), Some(Point::new(i32::MIN, i32::MIN)));
}
