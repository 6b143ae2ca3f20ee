use indexmap::IndexMap;
use serde_json::Value;

/// Handle into a [`Document`] arena. Only valid for the document that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Element {
        tag: String,
        attrs: IndexMap<String, String>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) datum: Option<Value>,
}

/// A mutable SVG tree.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Detached nodes stay
/// addressable, so a subtree removed with [`Document::detach`] can be re-attached
/// later — this is what "detached fragment" means throughout the crate.
///
/// Selection helpers walk descendants in document order and never touch the
/// per-node datum slots.
#[derive(Debug, Clone, Default)]
pub struct Document {
    nodes: Vec<NodeData>,
    root: Option<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn set_root(&mut self, id: NodeId) {
        self.root = Some(id);
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            kind,
            parent: None,
            children: Vec::new(),
            datum: None,
        });
        id
    }

    /// Creates a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_string(),
            attrs: IndexMap::new(),
        })
    }

    /// Creates a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    /// Appends `child` as the last child of `parent`, detaching it from any
    /// previous parent first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Removes `id` from its parent's child list. The subtree stays addressable
    /// as a detached fragment. No-op for nodes without a parent.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    /// Deep-copies a subtree from another document, returning it detached.
    /// Datum slots are not copied.
    pub fn import_fragment(&mut self, source: &Document, node: NodeId) -> NodeId {
        match &source.nodes[node.0].kind {
            NodeKind::Element { tag, attrs } => {
                let imported = self.create_element(tag);
                if let NodeKind::Element { attrs: own, .. } = &mut self.nodes[imported.0].kind {
                    *own = attrs.clone();
                }
                for &child in &source.nodes[node.0].children {
                    let copy = self.import_fragment(source, child);
                    self.append_child(imported, copy);
                }
                imported
            }
            NodeKind::Text(text) => self.create_text(text),
        }
    }

    /// The element tag, or `None` for text nodes.
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes[id.0]
            .children
            .iter()
            .copied()
            .filter(|&c| self.tag(c).is_some())
            .collect()
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Element { attrs, .. } => attrs.get(name).map(String::as_str),
            NodeKind::Text(_) => None,
        }
    }

    /// Sets an attribute, keeping the position of an already-present name.
    /// Ignored on text nodes.
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[id.0].kind {
            attrs.insert(name.to_string(), value.to_string());
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[id.0].kind {
            attrs.shift_remove(name);
        }
    }

    pub fn attrs(&self, id: NodeId) -> impl Iterator<Item = (&str, &str)> {
        let attrs = match &self.nodes[id.0].kind {
            NodeKind::Element { attrs, .. } => Some(attrs),
            NodeKind::Text(_) => None,
        };
        attrs
            .into_iter()
            .flat_map(|a| a.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Concatenated text of the node and all its descendants, document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        match &self.nodes[id.0].kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for &child in &self.nodes[id.0].children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    /// Concatenated direct text children, or `None` when there are none.
    pub fn own_text(&self, id: NodeId) -> Option<String> {
        let mut out: Option<String> = None;
        for &child in &self.nodes[id.0].children {
            if let NodeKind::Text(text) = &self.nodes[child.0].kind {
                out.get_or_insert_with(String::new).push_str(text);
            }
        }
        out
    }

    /// Replaces all children with a single text node.
    pub fn set_text_content(&mut self, id: NodeId, text: &str) {
        let children = std::mem::take(&mut self.nodes[id.0].children);
        for child in children {
            self.nodes[child.0].parent = None;
        }
        let text_node = self.create_text(text);
        self.append_child(id, text_node);
    }

    pub fn datum(&self, id: NodeId) -> Option<&Value> {
        self.nodes[id.0].datum.as_ref()
    }

    pub fn set_datum(&mut self, id: NodeId, datum: Option<Value>) {
        self.nodes[id.0].datum = datum;
    }

    fn walk_elements(&self, id: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.nodes[id.0].children {
            if self.tag(child).is_some() {
                out.push(child);
                self.walk_elements(child, out);
            }
        }
    }

    /// All element descendants of `root` in document order, excluding `root`.
    pub fn descendant_elements(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.walk_elements(root, &mut out);
        out
    }

    /// First descendant element with the given tag.
    pub fn select_first(&self, root: NodeId, tag: &str) -> Option<NodeId> {
        self.descendant_elements(root)
            .into_iter()
            .find(|&id| self.tag(id) == Some(tag))
    }

    /// All descendant elements whose tag is in `tags`, document order.
    pub fn select_all_tags(&self, root: NodeId, tags: &[&str]) -> Vec<NodeId> {
        self.descendant_elements(root)
            .into_iter()
            .filter(|&id| self.tag(id).is_some_and(|t| tags.contains(&t)))
            .collect()
    }

    fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.attr(id, "class")
            .is_some_and(|c| c.split_whitespace().any(|t| t == class))
    }

    /// First descendant element carrying `class` in its class list.
    pub fn select_first_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.descendant_elements(root)
            .into_iter()
            .find(|&id| self.has_class(id, class))
    }

    /// All descendant elements carrying `class` in their class list.
    pub fn select_all_class(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendant_elements(root)
            .into_iter()
            .filter(|&id| self.has_class(id, class))
            .collect()
    }
}
