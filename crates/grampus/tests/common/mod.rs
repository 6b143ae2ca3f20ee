#![allow(dead_code)]

use grampus::{Error, GraphView, LayoutEngine, OutputFormat, Result};
use grampus_svg::{Document, NodeId};

/// Rendered output for `digraph {graph [rankdir="LR"]; a -> b;}`.
pub const INITIAL_GRAPH_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN"
 "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<!-- Generated by graphviz version 2.50.0 (0) -->
<svg width="206pt" height="44pt" viewBox="0.00 0.00 206.00 44.00" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
<g id="graph0" class="graph" transform="scale(1 1) rotate(0) translate(4 40)">
<title>%3</title>
<polygon fill="white" stroke="transparent" points="-4,4 -4,-40 202,-40 202,4 -4,4"/>
<!-- a -->
<g id="node1" class="node">
<title>a</title>
<ellipse fill="none" stroke="black" cx="27" cy="-18" rx="27" ry="18"/>
<text text-anchor="middle" x="27" y="-14.3" font-family="Times,serif" font-size="14.00">a</text>
</g>
<!-- b -->
<g id="node2" class="node">
<title>b</title>
<ellipse fill="none" stroke="black" cx="171" cy="-18" rx="27" ry="18"/>
<text text-anchor="middle" x="171" y="-14.3" font-family="Times,serif" font-size="14.00">b</text>
</g>
<!-- a&#45;&gt;b -->
<g id="edge1" class="edge">
<title>a&#45;&gt;b</title>
<path fill="none" stroke="black" d="M54.4,-18C81.54,-18 113.63,-18 133.77,-18"/>
<polygon fill="black" stroke="black" points="133.79,-21.5 143.79,-18 133.79,-14.5 133.79,-21.5"/>
</g>
</g>
</svg>
"##;

/// Rendered output for a synthesized single-node graph with a default-sized
/// ellipse shape.
pub const ELLIPSE_NODE_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN"
 "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg width="62pt" height="44pt" viewBox="0.00 0.00 62.00 44.00" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
<g id="graph0" class="graph" transform="scale(1 1) rotate(0) translate(4 40)">
<title>%3</title>
<polygon fill="white" stroke="transparent" points="-4,4 -4,-40 58,-40 58,4 -4,4"/>
<!-- c -->
<g id="node1" class="node">
<title>c</title>
<ellipse fill="none" stroke="black" cx="27" cy="-18" rx="27" ry="18"/>
<text text-anchor="middle" x="27" y="-14.3" font-family="Times,serif" font-size="14.00">c</text>
</g>
</g>
</svg>
"##;

/// Rendered output for a synthesized single-node graph with `shape=polygon`.
pub const POLYGON_NODE_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN"
 "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg width="62pt" height="44pt" viewBox="0.00 0.00 62.00 44.00" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
<g id="graph0" class="graph" transform="scale(1 1) rotate(0) translate(4 40)">
<title>%3</title>
<polygon fill="white" stroke="transparent" points="-4,4 -4,-40 58,-40 58,4 -4,4"/>
<!-- c -->
<g id="node1" class="node">
<title>c</title>
<polygon fill="none" stroke="black" points="54,-36 0,-36 0,0 54,0 54,-36"/>
<text text-anchor="middle" x="27" y="-14.3" font-family="Times,serif" font-size="14.00">c</text>
</g>
</g>
</svg>
"##;

/// Rendered output for a synthesized single-node graph carrying a URL or
/// tooltip attribute — the primitives sit inside a hyperlink wrapper.
pub const LINK_NODE_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN"
 "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg width="62pt" height="44pt" viewBox="0.00 0.00 62.00 44.00" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink">
<g id="graph0" class="graph" transform="scale(1 1) rotate(0) translate(4 40)">
<title>%3</title>
<polygon fill="white" stroke="transparent" points="-4,4 -4,-40 58,-40 58,4 -4,4"/>
<!-- c -->
<g id="node1" class="node">
<title>c</title>
<g id="a_node1"><a xlink:href="dummy" xlink:title="c">
<ellipse fill="none" stroke="black" cx="27" cy="-18" rx="27" ry="18"/>
<text text-anchor="middle" x="27" y="-14.3" font-family="Times,serif" font-size="14.00">c</text>
</a>
</g>
</g>
</g>
</svg>
"##;

/// Serves canned engine output keyed off the submitted description, the way
/// the real engine would respond to each synthesis request.
#[derive(Debug)]
pub struct FixtureEngine;

impl LayoutEngine for FixtureEngine {
    fn layout(&self, source: &str, _format: OutputFormat) -> Result<String> {
        let svg = if source.starts_with("digraph") {
            INITIAL_GRAPH_SVG
        } else if source.contains(r#""shape"="polygon""#) {
            POLYGON_NODE_SVG
        } else if source.contains(r#""URL"="#) || source.contains(r#""tooltip"="#) {
            LINK_NODE_SVG
        } else {
            ELLIPSE_NODE_SVG
        };
        Ok(svg.to_string())
    }
}

/// Rejects every description.
#[derive(Debug)]
pub struct FailingEngine;

impl LayoutEngine for FailingEngine {
    fn layout(&self, _source: &str, _format: OutputFormat) -> Result<String> {
        Err(Error::Layout {
            message: "syntax error in line 1".to_string(),
        })
    }
}

pub fn initial_view() -> GraphView<FixtureEngine> {
    GraphView::from_svg(FixtureEngine, INITIAL_GRAPH_SVG).expect("initial render parses")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub nodes: usize,
    pub edges: usize,
    pub ellipses: usize,
    pub polygons: usize,
    pub paths: usize,
}

pub fn counts<E: LayoutEngine>(view: &GraphView<E>) -> Counts {
    let doc = view.document();
    let svg = view.svg_node();
    Counts {
        nodes: doc.select_all_class(svg, "node").len(),
        edges: doc.select_all_class(svg, "edge").len(),
        ellipses: doc.select_all_tags(svg, &["ellipse"]).len(),
        polygons: doc.select_all_tags(svg, &["polygon"]).len(),
        paths: doc.select_all_tags(svg, &["path"]).len(),
    }
}

pub const INITIAL_COUNTS: Counts = Counts {
    nodes: 2,
    edges: 1,
    ellipses: 2,
    polygons: 2,
    paths: 1,
};

/// The node group whose engine title matches `title`.
pub fn node_group_by_title<E: LayoutEngine>(view: &GraphView<E>, title: &str) -> Option<NodeId> {
    let doc = view.document();
    doc.select_all_class(view.svg_node(), "node")
        .into_iter()
        .find(|&node| {
            doc.select_first(node, "title")
                .is_some_and(|t| doc.text_content(t) == title)
        })
}

pub fn first_of<E: LayoutEngine>(view: &GraphView<E>, root: NodeId, tag: &str) -> NodeId {
    view.document()
        .select_first(root, tag)
        .unwrap_or_else(|| panic!("expected a {tag} element"))
}

pub fn attr<'a>(doc: &'a Document, id: NodeId, name: &str) -> &'a str {
    doc.attr(id, name).unwrap_or_default()
}
