mod common;

use common::*;
use grampus::{Error, GraphView, NodeAttributes};

#[test]
fn from_svg_extracts_join_data_in_document_order() {
    let view = initial_view();
    let keys: Vec<&str> = view
        .joined_children()
        .iter()
        .map(|record| record.key.as_str())
        .collect();
    assert_eq!(keys, vec!["%3.title-0", "%3.polygon-1", "a", "b", "a->b"]);

    let node_record = &view.joined_children()[2];
    assert_eq!(node_record.tag, "g");
    assert_eq!(node_record.attributes.get("class").map(String::as_str), Some("node"));
    assert_eq!(node_record.children.len(), 3);
}

#[test]
fn render_drives_the_engine_for_the_whole_graph() {
    let view = GraphView::render(FixtureEngine, r#"digraph {graph [rankdir="LR"]; a -> b;}"#)
        .expect("render ok");
    assert_eq!(counts(&view), INITIAL_COUNTS);
    assert_eq!(view.joined_children().len(), 5);
    assert!(view.drawn_node().is_none());
}

#[test]
fn malformed_documents_are_rejected() {
    let err = GraphView::from_svg(FixtureEngine, "<svg><g></svg>").unwrap_err();
    assert!(matches!(err, Error::InvalidSvg(_)));

    let err = GraphView::from_svg(FixtureEngine, "<html/>").unwrap_err();
    assert!(matches!(err, Error::MalformedOutput { .. }));

    let err = GraphView::from_svg(
        FixtureEngine,
        r#"<svg xmlns="http://www.w3.org/2000/svg"/>"#,
    )
    .unwrap_err();
    assert!(matches!(err, Error::MalformedOutput { .. }));
}

#[test]
fn svg_string_reflects_in_place_edits() {
    let mut view = initial_view();
    view.draw_node(100.0, -100.0, "c", NodeAttributes::new())
        .expect("draw ok");
    let svg = view.svg_string();
    assert!(svg.contains(r#"cx="100""#));
    assert!(svg.contains("<title>c</title>"));

    view.remove_drawn_node();
    assert!(!view.svg_string().contains("<title>c</title>"));
}
