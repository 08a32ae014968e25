//! Strict XML parser producing an [`XmlElement`] tree.
//!
//! Documentation comments must be well-formed XML with exactly one root
//! element. Anything else is reported as a [`ParseError`]; the parser never
//! tries to repair input.

#![allow(clippy::unused_self)] // Unit struct methods have &self for API consistency

use std::collections::HashMap;
use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::ParseError;
use crate::tree::{XmlElement, XmlNode};

/// Parse an XML string into its root element.
///
/// # Errors
///
/// Returns an error if the input is not well-formed XML with a single root.
pub fn parse_xml(xml: &str) -> Result<XmlElement, ParseError> {
    XmlTreeParser::new().parse(xml)
}

/// Builds element trees from `quick-xml` events.
pub struct XmlTreeParser;

impl XmlTreeParser {
    /// Create a new parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Parse XML string to its root element.
    ///
    /// Comments, processing instructions, the XML declaration and DOCTYPE
    /// are skipped. Whitespace outside the root element is allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not well-formed XML with a single root.
    pub fn parse(&self, xml: &str) -> Result<XmlElement, ParseError> {
        let mut reader = Reader::from_str(xml);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = true;
        config.expand_empty_elements = false;

        self.parse_document(&mut reader)
    }

    fn parse_document<R: BufRead>(&self, reader: &mut Reader<R>) -> Result<XmlElement, ParseError> {
        let mut buf = Vec::new();
        let mut root: Option<XmlElement> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let mut element = self.start_element(reader, &e)?;
                    if root.is_some() {
                        return Err(ParseError::MultipleRoots(element.name));
                    }
                    self.parse_children(reader, &mut element)?;
                    root = Some(element);
                }
                Event::Empty(e) => {
                    let mut element = self.start_element(reader, &e)?;
                    if root.is_some() {
                        return Err(ParseError::MultipleRoots(element.name));
                    }
                    element.self_closing = true;
                    root = Some(element);
                }
                Event::Text(e) => {
                    if !reader.decoder().decode(&e)?.trim().is_empty() {
                        return Err(ParseError::TextOutsideRoot);
                    }
                }
                Event::CData(_) | Event::GeneralRef(_) => {
                    return Err(ParseError::TextOutsideRoot);
                }
                Event::End(e) => {
                    let name = reader.decoder().decode(e.name().as_ref())?.into_owned();
                    return Err(ParseError::UnexpectedEndTag(name));
                }
                Event::Eof => {
                    return root.ok_or(ParseError::MissingRoot);
                }
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
            buf.clear();
        }
    }

    fn parse_children<R: BufRead>(
        &self,
        reader: &mut Reader<R>,
        element: &mut XmlElement,
    ) -> Result<(), ParseError> {
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => {
                    let mut child = self.start_element(reader, &e)?;
                    self.parse_children(reader, &mut child)?;
                    element.children.push(XmlNode::Element(child));
                }
                Event::Empty(e) => {
                    let mut child = self.start_element(reader, &e)?;
                    child.self_closing = true;
                    element.children.push(XmlNode::Element(child));
                }
                Event::Text(e) => {
                    element.push_text(&reader.decoder().decode(&e)?);
                }
                Event::GeneralRef(e) => {
                    let entity = reader.decoder().decode(&e)?;
                    element.push_text(&decode_entity(&entity)?);
                }
                Event::CData(e) => {
                    element.push_text(&reader.decoder().decode(&e)?);
                }
                Event::End(_) => {
                    // End names are checked by the reader
                    return Ok(());
                }
                Event::Eof => {
                    return Err(ParseError::UnclosedElement(element.name.clone()));
                }
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
            }
            buf.clear();
        }
    }

    fn start_element<R: BufRead>(
        &self,
        reader: &Reader<R>,
        e: &BytesStart,
    ) -> Result<XmlElement, ParseError> {
        let name = reader.decoder().decode(e.name().as_ref())?.into_owned();

        let mut attrs = HashMap::new();
        for attr in e.attributes() {
            let attr = attr?;
            let key = reader.decoder().decode(attr.key.as_ref())?.into_owned();

            // Skip namespace declarations
            if key == "xmlns" || key.starts_with("xmlns:") {
                continue;
            }

            let value = attr.unescape_value()?.into_owned();
            attrs.insert(key, value);
        }

        Ok(XmlElement {
            name,
            attrs,
            ..Default::default()
        })
    }
}

impl Default for XmlTreeParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an XML entity reference to its character value.
fn decode_entity(entity: &str) -> Result<String, ParseError> {
    let text = match entity {
        "lt" => "<",
        "gt" => ">",
        "amp" => "&",
        "apos" => "'",
        "quot" => "\"",
        s if s.starts_with('#') => {
            let code = if let Some(hex) = s.strip_prefix("#x") {
                u32::from_str_radix(hex, 16).ok()
            } else {
                s[1..].parse::<u32>().ok()
            };
            return code
                .and_then(char::from_u32)
                .map(String::from)
                .ok_or_else(|| ParseError::InvalidCharRef(entity.to_owned()));
        }
        _ => return Err(ParseError::UnknownEntity(entity.to_owned())),
    };
    Ok(text.to_owned())
}
