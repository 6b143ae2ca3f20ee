use crate::dom::{Document, NodeId};

const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

#[derive(Debug, thiserror::Error)]
#[error("invalid SVG document: {0}")]
pub struct ParseError(#[from] roxmltree::Error);

/// Parses serialized SVG text into a mutable [`Document`].
///
/// Comments and processing instructions are dropped, as are whitespace-only
/// text nodes (Graphviz separates elements with newlines that carry no
/// meaning). Namespace declarations on the root element are preserved as
/// plain attributes so the tree serializes back to standalone SVG.
pub fn parse(text: &str) -> Result<Document, ParseError> {
    let source = roxmltree::Document::parse(text)?;
    let mut doc = Document::new();
    let root = build(&mut doc, source.root_element(), true);
    if let Some(root) = root {
        doc.set_root(root);
    }
    Ok(doc)
}

fn build(doc: &mut Document, node: roxmltree::Node<'_, '_>, is_root: bool) -> Option<NodeId> {
    if node.is_element() {
        let id = doc.create_element(node.tag_name().name());
        if is_root {
            for ns in node.namespaces() {
                match ns.name() {
                    Some(prefix) => doc.set_attr(id, &format!("xmlns:{prefix}"), ns.uri()),
                    None => doc.set_attr(id, "xmlns", ns.uri()),
                }
            }
        }
        for attr in node.attributes() {
            doc.set_attr(id, &qualified_name(&attr), attr.value());
        }
        for child in node.children() {
            if let Some(built) = build(doc, child, false) {
                doc.append_child(id, built);
            }
        }
        Some(id)
    } else if node.is_text() {
        let text = node.text().unwrap_or_default();
        if text.trim().is_empty() {
            None
        } else {
            Some(doc.create_text(text))
        }
    } else {
        None
    }
}

fn qualified_name(attr: &roxmltree::Attribute<'_, '_>) -> String {
    match attr.namespace() {
        Some(XLINK_NS) => format!("xlink:{}", attr.name()),
        _ => attr.name().to_string(),
    }
}
