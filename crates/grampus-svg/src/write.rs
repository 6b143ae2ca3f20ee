use crate::dom::{Document, NodeId};

fn escape_text(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

impl Document {
    /// Serializes the subtree rooted at `id` back to SVG text.
    pub fn to_svg_string(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    /// Serializes the whole document (empty string when nothing was parsed).
    pub fn svg_string(&self) -> String {
        self.root().map(|r| self.to_svg_string(r)).unwrap_or_default()
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        match self.tag(id) {
            Some(tag) => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in self.attrs(id) {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_attr(value, out);
                    out.push('"');
                }
                let children = self.children(id);
                if children.is_empty() {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for &child in children {
                        self.write_node(child, out);
                    }
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
            }
            None => escape_text(&self.text_content(id), out),
        }
    }
}
