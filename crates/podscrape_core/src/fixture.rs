//! In-memory element trees for exercising extraction without an HTML parser.

use crate::document::DocNode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureChild {
    Text(String),
    Element(FixtureNode),
}

/// Hand-built element with attributes and mixed text/element children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureNode {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<FixtureChild>,
}

impl FixtureNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Root `html` element wrapping the given children.
    pub fn document(children: impl IntoIterator<Item = FixtureNode>) -> Self {
        children
            .into_iter()
            .fold(Self::new("html"), |root, child| root.child(child))
    }

    /// Set an attribute, replacing an earlier value with the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    pub fn class(self, classes: impl Into<String>) -> Self {
        self.attr("class", classes)
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(FixtureChild::Text(text.into()));
        self
    }

    pub fn child(mut self, node: FixtureNode) -> Self {
        self.children.push(FixtureChild::Element(node));
        self
    }
}

impl<'a> DocNode for &'a FixtureNode {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn text_fragments(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_text(*self, &mut out);
        out
    }

    fn descendant_elements(&self) -> Vec<Self> {
        let mut out = Vec::new();
        collect_elements(*self, &mut out);
        out
    }
}

fn collect_text<'a>(node: &'a FixtureNode, out: &mut Vec<&'a str>) {
    for child in &node.children {
        match child {
            FixtureChild::Text(text) => out.push(text),
            FixtureChild::Element(element) => collect_text(element, out),
        }
    }
}

fn collect_elements<'a>(node: &'a FixtureNode, out: &mut Vec<&'a FixtureNode>) {
    for child in &node.children {
        if let FixtureChild::Element(element) = child {
            out.push(element);
            collect_elements(element, out);
        }
    }
}
