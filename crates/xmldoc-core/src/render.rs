//! Recursive rendering of section content to plain text.
//!
//! Block tags (`code`, `para`, `list`) always start on their own line.
//! Everything else is inline and joined under the spacing rules of
//! [`append_inline`]. Nested `seealso` tags are recorded in the see-also
//! registry as a side effect of rendering.

use indexmap::IndexMap;

use crate::cref::strip_id_prefix;
use crate::inline::{WhitespaceMode, append_inline, normalize};
use crate::tags::{BodyTag, CREF, NAME};
use crate::tree::{XmlElement, XmlNode};

/// Renders elements to text, registering see-also references on the way.
pub(crate) struct NodeRenderer<'a> {
    see_alsos: &'a mut IndexMap<String, String>,
}

impl<'a> NodeRenderer<'a> {
    pub(crate) fn new(see_alsos: &'a mut IndexMap<String, String>) -> Self {
        Self { see_alsos }
    }

    /// Render the children of `element`, trimmed.
    pub(crate) fn render(&mut self, element: &XmlElement, mode: WhitespaceMode) -> String {
        let mut out = String::new();

        for node in &element.children {
            match node {
                // Whitespace between tags carries no content
                XmlNode::Text(text) if text.trim().is_empty() => {}
                XmlNode::Text(text) => append_inline(&mut out, text, mode),
                XmlNode::Element(child) => self.render_element(child, &mut out, mode),
            }
        }

        out.trim().to_owned()
    }

    fn render_element(&mut self, element: &XmlElement, out: &mut String, mode: WhitespaceMode) {
        match BodyTag::from_tag(element.local_name()) {
            BodyTag::Code | BodyTag::Para => self.render_block(element, out),
            BodyTag::List => {
                out.push('\n');
                self.render_list(element, out);
            }
            BodyTag::InlineCode => {
                append_inline(out, &element.text_content(), WhitespaceMode::Preserve);
            }
            BodyTag::ParamRef | BodyTag::TypeParamRef => {
                let name = strip_id_prefix(element.attr(NAME).unwrap_or_default());
                append_inline(out, name, mode);
            }
            BodyTag::See => {
                let text = if element.is_empty() {
                    strip_id_prefix(element.attr(CREF).unwrap_or_default()).to_owned()
                } else {
                    element.text_content()
                };
                append_inline(out, &text, mode);
            }
            BodyTag::SeeAlso => {
                let display = self.register_see_also(element, mode);
                append_inline(out, &display, mode);
            }
            // Self-closing unknown tags contribute an empty fragment, which
            // still leaves a separating space.
            BodyTag::Unknown => append_inline(out, &element.text_content(), mode),
        }
    }

    fn render_block(&mut self, element: &XmlElement, out: &mut String) {
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }

        out.push_str(&self.render(element, WhitespaceMode::Preserve));

        if !out.ends_with('\n') {
            out.push('\n');
        }
    }

    /// Record a `seealso` reference and return its display text.
    ///
    /// The display text is the rendered body, or the stripped cref when the
    /// body is blank. A later reference with the same key replaces the
    /// earlier one.
    pub(crate) fn register_see_also(&mut self, element: &XmlElement, mode: WhitespaceMode) -> String {
        let key = strip_id_prefix(element.attr(CREF).unwrap_or_default()).to_owned();
        let rendered = normalize(&self.render(element, mode), mode);

        let display = if rendered.is_empty() {
            key.clone()
        } else {
            rendered
        };

        tracing::trace!(key = %key, "Registered see-also reference");
        self.see_alsos.insert(key, display.clone());
        display
    }
}
