#![forbid(unsafe_code)]

//! Staged-node editing for Graphviz-rendered SVG.
//!
//! A drag-to-place UI needs a node that looks exactly like engine output
//! while the pointer is still moving, without paying for a full re-layout on
//! every event. `grampus` stages one speculative node per [`GraphView`]:
//!
//! - [`GraphView::draw_node`] asks the layout engine to draw just that node,
//!   splices the resulting markup into the live document and moves it to the
//!   pointer position;
//! - [`GraphView::update_drawn_node`] repositions and restyles the markup in
//!   place — no engine round-trip;
//! - [`GraphView::insert_drawn_node`] commits it into the join data the next
//!   full re-render reconciles against, or
//! - [`GraphView::remove_drawn_node`] discards it.
//!
//! The layout engine is abstract ([`LayoutEngine`]); [`DotCommandEngine`]
//! drives a Graphviz executable. Document surgery is done with
//! [`grampus_svg`].
//!
//! ```no_run
//! use grampus::{DotCommandEngine, GraphView, NodeAttributes};
//!
//! # fn main() -> grampus::Result<()> {
//! let mut view = GraphView::render(DotCommandEngine::new(), "digraph { a -> b; }")?;
//! view.draw_node(100.0, -100.0, "c", NodeAttributes::new().with("shape", "ellipse"))?
//!     .update_drawn_node(120.0, -90.0, None, NodeAttributes::new())?
//!     .insert_drawn_node(None)?;
//! let svg = view.svg_string();
//! # let _ = svg;
//! # Ok(())
//! # }
//! ```

pub mod attributes;
mod draw;
pub mod element;
pub mod engine;
mod error;
pub mod shape;
mod sync;
mod synth;
mod view;

pub use attributes::{AttrValue, NodeAttributes, complete_attributes, default_node_attributes};
pub use element::{ElementData, bind_element_data, extract_element_data};
pub use engine::{DotCommandEngine, LayoutEngine, OutputFormat};
pub use error::{Error, Result};
pub use shape::ShapeFamily;
pub use view::{DrawnNode, GraphView};
