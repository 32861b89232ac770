//! Minimal markup tree handed to the host renderer.
//!
//! The tree mirrors the shape of a virtual DOM: elements own ordered
//! attributes and child nodes, text nodes are escaped on serialization.
//!
//! ```ignore
//! let elem = Element::new("a")
//!     .with_attr("href", "/sale")
//!     .with_child(Node::text("Shop now"));
//! assert_eq!(elem.to_html(), r#"<a href="/sale">Shop now</a>"#);
//! ```

pub mod html;

use std::fmt::Write;

use html::{escape, escape_attr, is_void_element};

/// Render result of a component.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkupTree {
    /// Nothing rendered (fragment placeholder).
    Empty,
    Root(Node),
}

impl MarkupTree {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Root element, if any.
    pub fn root(&self) -> Option<&Element> {
        match self {
            Self::Root(Node::Element(elem)) => Some(elem),
            _ => None,
        }
    }

    /// Depth-first search for the first element with `tag`, root included.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        self.root().and_then(|root| root.find(tag))
    }

    pub fn to_html(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Root(node) => {
                let mut out = String::new();
                node.write_html(&mut out);
                out
            }
        }
    }
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Box<Element>),
    Text(Text),
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(Text::new(content))
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(elem) => elem.write_html(out),
            Self::Text(text) => out.push_str(&escape(&text.content)),
        }
    }
}

impl From<Element> for Node {
    fn from(elem: Element) -> Self {
        Self::Element(Box::new(elem))
    }
}

/// Text content, escaped when serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// An element with ordered attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Set an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(elem) => Some(elem.as_ref()),
            Node::Text(_) => None,
        })
    }

    /// Depth-first search for the first element with `tag`, self included.
    pub fn find(&self, tag: &str) -> Option<&Element> {
        if self.tag == tag {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find(tag))
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(&text.content),
                Node::Element(elem) => out.push_str(&elem.text_content()),
            }
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            // Writing into a String cannot fail
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');

        if is_void_element(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}
