//! In-place repositioning and restyling of a node's markup fragment.

use crate::attributes::NodeAttributes;
use crate::shape::ShapeFamily;
use grampus_svg::transform::{
    fmt_coord, round_to_4_decimals, translate_d_attribute, translate_points_attribute,
};
use grampus_svg::{Document, NodeId, bbox};

const GEOMETRY_TAGS: &[&str] = &["ellipse", "polygon", "path", "polyline"];

fn num_attr(doc: &Document, id: NodeId, name: &str) -> f64 {
    doc.attr(id, name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0.0)
}

/// Moves the fragment's primitives so their shared center lands on `(x, y)`
/// and applies the resolved styling.
///
/// All primitives and the label translate by one delta measured from the
/// first primitive's bounding center, so they stay visually coincident no
/// matter how many primitives the shape is stacked from. Fill, stroke and
/// stroke width go to the first primitive only, unless the shape family
/// requires every constituent to be painted identically. A fragment with
/// neither geometry nor text has no center; identifier and title are still
/// updated.
pub(crate) fn synchronize_node(
    doc: &mut Document,
    node: NodeId,
    x: f64,
    y: f64,
    node_id: &str,
    attributes: &NodeAttributes,
) {
    let fill = attributes.markup_value("fillcolor");
    let stroke = attributes.markup_value("color");
    let stroke_width = attributes.truthy_markup_value("penwidth");
    let text_anchor = match attributes.str_value("labeljust") {
        Some("l") => Some("start"),
        Some("r") => Some("end"),
        Some("c") => Some("middle"),
        _ => None,
    };
    let font_family = attributes.truthy_markup_value("fontname");
    let font_size = attributes.truthy_markup_value("fontsize");
    let font_color = attributes.truthy_markup_value("fontcolor");
    let label = if attributes.contains("label") {
        attributes.markup_value("label").unwrap_or_default()
    } else {
        node_id.to_string()
    };

    match attributes.markup_value("id") {
        Some(id) => doc.set_attr(node, "id", &id),
        None => doc.remove_attr(node, "id"),
    }
    if let Some(title) = doc.select_first(node, "title") {
        doc.set_text_content(title, node_id);
    }

    // With a URL or tooltip the engine wraps the primitives in a hyperlink;
    // styling and geometry live under it.
    let sub_parent = if attributes.is_truthy("URL") || attributes.is_truthy("tooltip") {
        doc.select_first(node, "g")
            .and_then(|g| doc.select_first(g, "a"))
            .unwrap_or(node)
    } else {
        node
    };
    let shapes = doc.select_all_tags(sub_parent, GEOMETRY_TAGS);
    let text = doc.select_first(node, "text");

    let center = if let Some(&first) = shapes.first() {
        bbox::bounding_center(doc, first)
    } else {
        text.map(|t| grampus_svg::geom::point(num_attr(doc, t, "x"), num_attr(doc, t, "y")))
    };
    let Some(center) = center else {
        return;
    };
    let dx = x - center.x;
    let dy = y - center.y;
    let multi_fill = attributes.shape_family() == ShapeFamily::MultiFill;

    for (index, &shape) in shapes.iter().enumerate() {
        if doc.attr(shape, "cx").is_some() {
            doc.set_attr(shape, "cx", &fmt_coord(round_to_4_decimals(x)));
            doc.set_attr(shape, "cy", &fmt_coord(round_to_4_decimals(y)));
        } else if let Some(points) = doc.attr(shape, "points").map(str::to_string) {
            doc.set_attr(shape, "points", &translate_points_attribute(&points, dx, dy));
        } else if let Some(d) = doc.attr(shape, "d").map(str::to_string) {
            doc.set_attr(shape, "d", &translate_d_attribute(&d, dx, dy));
        }
        if index == 0 || multi_fill {
            if let Some(fill) = &fill {
                doc.set_attr(shape, "fill", fill);
            }
            if let Some(stroke) = &stroke {
                doc.set_attr(shape, "stroke", stroke);
            }
            if let Some(width) = &stroke_width {
                doc.set_attr(shape, "stroke-width", width);
            }
        }
    }

    if let Some(text) = text {
        if let Some(anchor) = text_anchor {
            doc.set_attr(text, "text-anchor", anchor);
        }
        let tx = num_attr(doc, text, "x");
        let ty = num_attr(doc, text, "y");
        doc.set_attr(text, "x", &fmt_coord(round_to_4_decimals(tx + dx)));
        doc.set_attr(text, "y", &fmt_coord(round_to_4_decimals(ty + dy)));
        if let Some(family) = &font_family {
            doc.set_attr(text, "font-family", family);
        }
        if let Some(size) = &font_size {
            doc.set_attr(text, "font-size", size);
        }
        if let Some(color) = &font_color {
            doc.set_attr(text, "fill", color);
        }
        doc.set_text_content(text, &label);
    }
}
