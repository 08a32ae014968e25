//! Node tree for parsed documentation comment XML.

use std::collections::HashMap;

/// Node in a parsed XML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// Element with attributes and child nodes.
    Element(XmlElement),
    /// Character data. Adjacent text, CDATA and entity references are merged.
    Text(String),
}

impl XmlNode {
    /// Element payload, if this node is an element.
    #[must_use]
    pub fn as_element(&self) -> Option<&XmlElement> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }
}

/// XML element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Qualified tag name as written (may include a namespace prefix).
    pub name: String,
    /// Element attributes, values unescaped.
    pub attrs: HashMap<String, String>,
    /// Child nodes in document order.
    pub children: Vec<XmlNode>,
    /// Whether the element was written in self-closing form (`<br/>`).
    pub self_closing: bool,
}

impl XmlElement {
    /// Create a new element with the given tag name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an attribute.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Append a text child.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.push_text(text);
        self
    }

    /// Append an element child.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(XmlNode::Element(child));
        self
    }

    /// Tag name without namespace prefix.
    #[must_use]
    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once(':')
            .map_or(self.name.as_str(), |(_, local)| local)
    }

    /// Attribute value by name.
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Whether the element has no child nodes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Direct child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(XmlNode::as_element)
    }

    /// Direct child elements with the given tag name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |child| child.name == name)
    }

    /// First direct child element with the given tag name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|child| child.name == name)
    }

    /// Concatenated text of this element and all descendants, unnormalized.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                XmlNode::Text(text) => out.push_str(text),
                XmlNode::Element(element) => element.collect_text(out),
            }
        }
    }

    /// Append text, merging with a trailing text node if there is one.
    pub fn push_text(&mut self, text: &str) {
        if let Some(XmlNode::Text(last)) = self.children.last_mut() {
            last.push_str(text);
        } else {
            self.children.push(XmlNode::Text(text.to_owned()));
        }
    }
}
