//! The staging state machine: draw → update* → insert | remove.

use crate::attributes::{NodeAttributes, complete_attributes, default_node_attributes};
use crate::element::{bind_element_data, extract_element_data};
use crate::engine::LayoutEngine;
use crate::sync::synchronize_node;
use crate::synth::synthesize_node_markup;
use crate::view::{DrawnNode, GraphView};
use crate::{Error, Result};
use grampus_svg::NodeId;

impl<E: LayoutEngine> GraphView<E> {
    /// Stages a new node at `(x, y)`, drawn exactly as the engine would draw
    /// it with the given attributes.
    ///
    /// If a node is already staged its fragment is detached first — drawing
    /// again restarts the gesture rather than leaking the previous fragment.
    /// On engine failure the previously staged node is left untouched.
    pub fn draw_node(
        &mut self,
        x: f64,
        y: f64,
        node_id: &str,
        attributes: NodeAttributes,
    ) -> Result<&mut Self> {
        let mut attributes = attributes;
        complete_attributes(&mut attributes, &default_node_attributes());
        tracing::debug!(node_id, x, y, "drawing node");
        let node = synthesize_node_markup(&self.engine, &mut self.document, node_id, &attributes)?;
        if let Some(previous) = self.drawn_node.take() {
            self.document.detach(previous.node);
        }
        self.document.append_child(self.graph_root, node);
        self.document.set_datum(node, None);
        synchronize_node(&mut self.document, node, x, y, node_id, &attributes);
        self.drawn_node = Some(DrawnNode {
            node,
            node_id: node_id.to_string(),
            x,
            y,
            attributes,
        });
        Ok(self)
    }

    /// Moves and restyles the staged node in place.
    ///
    /// A missing `node_id` keeps the current one; attributes not mentioned
    /// keep their previous effective value (the previous resolved set is the
    /// baseline). Fails with [`Error::NoDrawnNode`] when nothing is staged.
    pub fn update_drawn_node(
        &mut self,
        x: f64,
        y: f64,
        node_id: Option<&str>,
        attributes: NodeAttributes,
    ) -> Result<&mut Self> {
        let Some(drawn) = self.drawn_node.as_mut() else {
            return Err(Error::NoDrawnNode);
        };
        let node_id = node_id.unwrap_or(&drawn.node_id).to_string();
        let mut attributes = attributes;
        complete_attributes(&mut attributes, &drawn.attributes);
        let node = drawn.node;
        drawn.node_id = node_id.clone();
        drawn.x = x;
        drawn.y = y;
        drawn.attributes = attributes.clone();
        synchronize_node(&mut self.document, node, x, y, &node_id, &attributes);
        Ok(self)
    }

    /// Discards the staged node, detaching its fragment. A no-op when
    /// nothing is staged — this is the one operation that never fails.
    pub fn remove_drawn_node(&mut self) -> &mut Self {
        if let Some(drawn) = self.drawn_node.take() {
            tracing::debug!(node_id = %drawn.node_id, "removing drawn node");
            self.document.detach(drawn.node);
        }
        self
    }

    /// Commits the staged node: the fragment stays in the document and one
    /// record is appended to the join data so the next full re-render
    /// transitions it instead of recreating it.
    ///
    /// A missing `node_id` keeps the current one; the title and visible
    /// label are set to their final values first. Fails with
    /// [`Error::NoDrawnNode`] when nothing is staged.
    pub fn insert_drawn_node(&mut self, node_id: Option<&str>) -> Result<&mut Self> {
        let Some(drawn) = self.drawn_node.as_ref() else {
            return Err(Error::NoDrawnNode);
        };
        let node = drawn.node;
        let node_id = node_id.unwrap_or(&drawn.node_id).to_string();
        let attributes = drawn.attributes.clone();

        if let Some(title) = self.document.select_first(node, "title") {
            self.document.set_text_content(title, &node_id);
        }
        if let Some(text) = self.label_element(node, &attributes) {
            let label = attributes
                .truthy_markup_value("label")
                .unwrap_or_else(|| node_id.clone());
            self.document.set_text_content(text, &label);
        }

        let ordinal = self.root_datum.children.len();
        let datum = extract_element_data(&self.document, node, ordinal, Some(&self.root_datum));
        bind_element_data(&mut self.document, node, &datum);
        self.root_datum.children.push(datum);
        tracing::debug!(node_id = %node_id, ordinal, "inserted drawn node");
        self.drawn_node = None;
        Ok(self)
    }

    /// The fragment's label element, looked up under the hyperlink wrapper
    /// when the attributes imply one.
    fn label_element(&self, node: NodeId, attributes: &NodeAttributes) -> Option<NodeId> {
        let sub_parent = if attributes.is_truthy("URL") || attributes.is_truthy("tooltip") {
            self.document
                .select_first(node, "g")
                .and_then(|g| self.document.select_first(g, "a"))
                .unwrap_or(node)
        } else {
            node
        };
        self.document.select_first(sub_parent, "text")
    }
}
