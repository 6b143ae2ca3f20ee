#![forbid(unsafe_code)]

//! Minimal mutable SVG tree for working with Graphviz output.
//!
//! Graphviz (and compatible layout engines) hand back serialized SVG; editing
//! a diagram interactively means parsing that text once and then mutating the
//! tree in place — repositioning primitives, restyling them, splicing
//! fragments in and out. This crate provides exactly that surface and nothing
//! more: an arena [`Document`] with order-preserving selection, attribute and
//! text access, detached fragments, per-node datum slots for join data, and
//! the coordinate-string transforms used to move engine geometry without
//! disturbing its grammar.

pub mod bbox;
mod dom;
pub mod geom;
mod parse;
pub mod transform;
mod write;

pub use dom::{Document, NodeId};
pub use parse::{ParseError, parse};
