//! Markup synthesis: asking the layout engine to draw exactly one node.

use crate::attributes::NodeAttributes;
use crate::engine::{LayoutEngine, OutputFormat};
use crate::{Error, Result};
use grampus_svg::{Document, NodeId};

/// Double-quotes a dot id, escaping embedded quotes and backslashes so
/// arbitrary identifiers and attribute values cannot break the description.
fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}

/// The minimal graph description whose layout yields one node's markup.
/// Every set attribute is embedded; unset ones are left to the engine.
pub(crate) fn node_layout_source(node_id: &str, attributes: &NodeAttributes) -> String {
    let mut list = String::new();
    for (name, value) in attributes.iter() {
        if let Some(value) = value.as_markup() {
            list.push(' ');
            list.push_str(&quoted(name));
            list.push('=');
            list.push_str(&quoted(&value));
        }
    }
    format!("graph {{{} [{}]}}", quoted(node_id), list)
}

/// Lays out a single-node graph and deep-copies the resulting node group
/// into `target` as a detached fragment.
pub(crate) fn synthesize_node_markup(
    engine: &dyn LayoutEngine,
    target: &mut Document,
    node_id: &str,
    attributes: &NodeAttributes,
) -> Result<NodeId> {
    let source = node_layout_source(node_id, attributes);
    tracing::trace!(%source, "synthesizing node markup");
    let svg_text = engine.layout(&source, OutputFormat::Svg)?;
    let doc = grampus_svg::parse(&svg_text).map_err(|err| Error::MalformedOutput {
        message: err.to_string(),
    })?;
    let node = doc
        .root()
        .and_then(|root| doc.select_first_class(root, "node"))
        .ok_or_else(|| Error::MalformedOutput {
            message: "engine output contains no node element".to_string(),
        })?;
    Ok(target.import_fragment(&doc, node))
}
