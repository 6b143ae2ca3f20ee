//! One rendered diagram plus its single staging slot.

use crate::attributes::NodeAttributes;
use crate::element::{ElementData, extract_element_data};
use crate::engine::{LayoutEngine, OutputFormat};
use crate::{Error, Result};
use grampus_svg::{Document, NodeId};

/// The node currently being drawn: its fragment, identity, position and the
/// resolved attribute set later updates fall back to.
#[derive(Debug, Clone)]
pub struct DrawnNode {
    pub(crate) node: NodeId,
    pub(crate) node_id: String,
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) attributes: NodeAttributes,
}

impl DrawnNode {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn attributes(&self) -> &NodeAttributes {
        &self.attributes
    }
}

/// A Graphviz-rendered SVG document, the join data extracted from it, and at
/// most one staged node. The draw/update/insert/remove operations mutate the
/// document in place.
#[derive(Debug)]
pub struct GraphView<E> {
    pub(crate) engine: E,
    pub(crate) document: Document,
    pub(crate) svg: NodeId,
    pub(crate) graph_root: NodeId,
    pub(crate) root_datum: ElementData,
    pub(crate) drawn_node: Option<DrawnNode>,
}

impl<E: LayoutEngine> GraphView<E> {
    /// Lays out a whole graph description and builds a view over the result.
    pub fn render(engine: E, dot_source: &str) -> Result<Self> {
        let svg_text = engine.layout(dot_source, OutputFormat::Svg)?;
        Self::from_svg(engine, &svg_text)
    }

    /// Builds a view over already-rendered engine output.
    ///
    /// The join data is initialized by extracting one record per element
    /// child of the graph root, in document order, so ordinals of records
    /// appended later line up with what a full render would have produced.
    pub fn from_svg(engine: E, svg_text: &str) -> Result<Self> {
        let document = grampus_svg::parse(svg_text)?;
        let svg = document
            .root()
            .filter(|&root| document.tag(root) == Some("svg"))
            .ok_or_else(|| Error::MalformedOutput {
                message: "missing svg root element".to_string(),
            })?;
        let graph_root = document
            .element_children(svg)
            .into_iter()
            .find(|&child| document.tag(child) == Some("g"))
            .ok_or_else(|| Error::MalformedOutput {
                message: "missing graph root group".to_string(),
            })?;
        let root_datum = extract_element_data(&document, graph_root, 0, None);
        tracing::debug!(
            children = root_datum.children.len(),
            "initialized graph view"
        );
        Ok(Self {
            engine,
            document,
            svg,
            graph_root,
            root_datum,
            drawn_node: None,
        })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The root `<svg>` element.
    pub fn svg_node(&self) -> NodeId {
        self.svg
    }

    /// The top-level `<g>` the engine renders the graph into — the parent of
    /// every node and edge group, and of any staged fragment.
    pub fn graph_root(&self) -> NodeId {
        self.graph_root
    }

    /// The persistent join-data list the next full re-render reconciles
    /// against. `insert_drawn_node` appends here.
    pub fn joined_children(&self) -> &[ElementData] {
        &self.root_datum.children
    }

    /// The staged node, if any.
    pub fn drawn_node(&self) -> Option<&DrawnNode> {
        self.drawn_node.as_ref()
    }

    /// Serializes the current document.
    pub fn svg_string(&self) -> String {
        self.document.to_svg_string(self.svg)
    }
}
