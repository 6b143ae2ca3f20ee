//! Bounding boxes for the primitive shapes Graphviz emits for nodes.

use crate::dom::{Document, NodeId};
use crate::geom::{Point, Rect, point, size};
use regex::Regex;
use std::sync::OnceLock;

fn re_pair() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| {
        Regex::new(r"(-?(?:\d+\.\d+|\d+\.|\.\d+|\d+)),(-?(?:\d+\.\d+|\d+\.|\.\d+|\d+))").unwrap()
    })
}

/// Every `x,y` coordinate pair appearing in a points list or path payload.
pub fn coordinate_pairs(s: &str) -> Vec<Point> {
    re_pair()
        .captures_iter(s)
        .filter_map(|caps| {
            let x = caps.get(1)?.as_str().parse().ok()?;
            let y = caps.get(2)?.as_str().parse().ok()?;
            Some(point(x, y))
        })
        .collect()
}

fn bounds_of(points: &[Point]) -> Option<Rect> {
    let first = points.first()?;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
    for p in &points[1..] {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(Rect::new(
        point(min_x, min_y),
        size(max_x - min_x, max_y - min_y),
    ))
}

fn num_attr(doc: &Document, id: NodeId, name: &str) -> f64 {
    doc.attr(id, name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0)
}

/// The bounding box of one geometry primitive.
///
/// Ellipses use their own center and radii. Polygons and polylines use the
/// extent of their point list. Paths use the extent of the coordinate pairs
/// in `d` — the control-point hull, which is what every later translation
/// delta is measured against, so the approximation cancels out across
/// updates. Returns `None` for non-geometry elements.
pub fn primitive_bbox(doc: &Document, id: NodeId) -> Option<Rect> {
    match doc.tag(id)? {
        "ellipse" => {
            let cx = num_attr(doc, id, "cx");
            let cy = num_attr(doc, id, "cy");
            let rx = num_attr(doc, id, "rx");
            let ry = num_attr(doc, id, "ry");
            Some(Rect::new(
                point(cx - rx, cy - ry),
                size(rx * 2.0, ry * 2.0),
            ))
        }
        "polygon" | "polyline" => bounds_of(&coordinate_pairs(doc.attr(id, "points")?)),
        "path" => bounds_of(&coordinate_pairs(doc.attr(id, "d")?)),
        _ => None,
    }
}

/// The reference point every translation delta is measured from: the center
/// of the primitive's bounding box.
pub fn bounding_center(doc: &Document, id: NodeId) -> Option<Point> {
    let rect = primitive_bbox(doc, id)?;
    Some(point(
        rect.origin.x + rect.size.width / 2.0,
        rect.origin.y + rect.size.height / 2.0,
    ))
}
