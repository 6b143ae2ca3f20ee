//! Node attribute sets and the defaulting rules that make a partial set
//! engine-consistent before any markup is touched.

use crate::shape::ShapeFamily;
use grampus_svg::transform::fmt_coord;
use indexmap::IndexMap;

/// One attribute value. `Unset` is the explicit "declared empty" marker: a
/// caller can pass it to clear an attribute a previous update had set, which
/// is different from not mentioning the attribute at all (not mentioned means
/// "keep whatever the baseline has").
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    Unset,
}

impl AttrValue {
    pub fn is_set(&self) -> bool {
        !matches!(self, AttrValue::Unset)
    }

    /// Empty strings and zero count as absent, matching the leniency the
    /// defaulting rules and styling guards are specified with.
    pub fn is_truthy(&self) -> bool {
        match self {
            AttrValue::Text(s) => !s.is_empty(),
            AttrValue::Number(n) => *n != 0.0,
            AttrValue::Unset => false,
        }
    }

    /// The string written into markup; `None` when unset.
    pub fn as_markup(&self) -> Option<String> {
        match self {
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::Number(n) => Some(fmt_coord(*n)),
            AttrValue::Unset => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(f64::from(value))
    }
}

/// An insertion-ordered attribute bag with an open name vocabulary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeAttributes {
    map: IndexMap<String, AttrValue>,
}

impl NodeAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) {
        self.map.insert(name.to_string(), value.into());
    }

    /// Builder-style [`NodeAttributes::set`].
    pub fn with(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Whether the attribute was declared at all, even as `Unset`.
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.map.get(name)
    }

    /// The textual value, for attributes compared by name (`shape`, `style`).
    pub fn str_value(&self, name: &str) -> Option<&str> {
        match self.map.get(name) {
            Some(AttrValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn is_truthy(&self, name: &str) -> bool {
        self.map.get(name).is_some_and(AttrValue::is_truthy)
    }

    /// The markup string for a declared, set attribute.
    pub fn markup_value(&self, name: &str) -> Option<String> {
        self.map.get(name).and_then(AttrValue::as_markup)
    }

    /// The markup string, but only when the value is truthy — used for the
    /// attributes that must never be cleared by an absent or empty input
    /// (`penwidth`, fonts, the committed label).
    pub fn truthy_markup_value(&self, name: &str) -> Option<String> {
        self.map
            .get(name)
            .filter(|v| v.is_truthy())
            .and_then(AttrValue::as_markup)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The shape family the declared `shape` belongs to.
    pub fn shape_family(&self) -> ShapeFamily {
        self.str_value("shape")
            .map(ShapeFamily::of)
            .unwrap_or(ShapeFamily::Standard)
    }
}

impl<'a> FromIterator<(&'a str, AttrValue)> for NodeAttributes {
    fn from_iter<T: IntoIterator<Item = (&'a str, AttrValue)>>(iter: T) -> Self {
        let mut attrs = NodeAttributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

/// The engine-default baseline applied on a first draw. Attributes the engine
/// leaves unstyled stay `Unset` so they are never written into markup.
pub fn default_node_attributes() -> NodeAttributes {
    [
        ("id", AttrValue::Unset),
        ("fillcolor", AttrValue::from("none")),
        ("color", AttrValue::from("#000000")),
        ("penwidth", AttrValue::Unset),
        ("URL", AttrValue::Unset),
        ("tooltip", AttrValue::Unset),
        ("labeljust", AttrValue::Unset),
        ("fontname", AttrValue::Unset),
        ("fontsize", AttrValue::Unset),
        ("fontcolor", AttrValue::Unset),
    ]
    .into_iter()
    .collect()
}

/// Makes `attributes` engine-consistent in place.
///
/// Rule order matters: fill derivation sees the declared color, outline
/// defaulting sees the derived fill, and baseline fallback runs last so any
/// attribute the earlier rules produced is left alone. Attributes declared
/// `Unset` are kept `Unset` — only undeclared names fall back to `baseline`.
pub fn complete_attributes(attributes: &mut NodeAttributes, baseline: &NodeAttributes) {
    let filled = attributes.str_value("style") == Some("filled");

    if filled && !attributes.is_truthy("fillcolor") {
        match attributes.get("color").filter(|v| v.is_truthy()).cloned() {
            Some(color) => attributes.set("fillcolor", color),
            None => attributes.set("fillcolor", "#d3d3d3"),
        }
    }
    if filled {
        if attributes.shape_family() == ShapeFamily::Plain {
            attributes.set("color", "transparent");
        } else if !attributes.is_truthy("color") {
            attributes.set("color", "#000000");
        }
    }
    if attributes.str_value("shape") == Some("point") && !attributes.is_truthy("fillcolor") {
        attributes.set("fillcolor", "#000000");
    }
    for (name, value) in baseline.iter() {
        if !attributes.contains(name) {
            attributes.set(name, value.clone());
        }
    }
}
