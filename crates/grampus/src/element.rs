//! Join-data records: what a future full re-render matches existing markup
//! against so committed elements transition instead of being recreated.

use grampus_svg::{Document, NodeId};
use indexmap::IndexMap;
use serde::Serialize;

/// One element's record. `key` is the join identity: a group's engine title
/// when it has one, an explicit `id` attribute otherwise, and a
/// parent-qualified `tag-ordinal` fallback for anonymous elements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementData {
    pub tag: String,
    pub key: String,
    pub attributes: IndexMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub children: Vec<ElementData>,
}

/// Extracts the record for `node` and its element descendants.
///
/// `ordinal` is the node's position among its parent's element children (for
/// the staged-node case: the index the fragment will occupy in the join
/// list). `parent` is the record the extracted one will be appended under;
/// it namespaces fallback keys so they stay unique across the document. The
/// upstream parent back-reference itself is not stored — records form an
/// owned tree reachable from the root.
pub fn extract_element_data(
    doc: &Document,
    node: NodeId,
    ordinal: usize,
    parent: Option<&ElementData>,
) -> ElementData {
    extract_inner(doc, node, ordinal, parent.map(|p| p.key.as_str()))
}

fn extract_inner(
    doc: &Document,
    node: NodeId,
    ordinal: usize,
    parent_key: Option<&str>,
) -> ElementData {
    let tag = doc.tag(node).unwrap_or_default().to_string();
    let attributes: IndexMap<String, String> = doc
        .attrs(node)
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect();
    let text = doc.own_text(node);
    let key = join_key(doc, node, &tag, ordinal, parent_key);
    let children = doc
        .element_children(node)
        .into_iter()
        .enumerate()
        .map(|(index, child)| extract_inner(doc, child, index, Some(&key)))
        .collect();
    ElementData {
        tag,
        key,
        attributes,
        text,
        children,
    }
}

fn join_key(
    doc: &Document,
    node: NodeId,
    tag: &str,
    ordinal: usize,
    parent_key: Option<&str>,
) -> String {
    if tag == "g" {
        if let Some(title) = doc.select_first(node, "title") {
            let title = doc.text_content(title);
            if !title.is_empty() {
                return title;
            }
        }
    }
    if let Some(id) = doc.attr(node, "id") {
        return id.to_string();
    }
    match parent_key {
        Some(parent_key) => format!("{parent_key}.{tag}-{ordinal}"),
        None => format!("{tag}-{ordinal}"),
    }
}

/// Binds a record tree onto the live elements it was extracted from, datum
/// slot by datum slot, pairing element children positionally.
pub fn bind_element_data(doc: &mut Document, node: NodeId, datum: &ElementData) {
    let value = serde_json::to_value(datum).unwrap_or(serde_json::Value::Null);
    doc.set_datum(node, Some(value));
    let children = doc.element_children(node);
    for (child, child_datum) in children.into_iter().zip(&datum.children) {
        bind_element_data(doc, child, child_datum);
    }
}
