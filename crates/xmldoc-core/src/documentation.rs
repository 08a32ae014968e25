//! Parsed documentation record and the parse entry point.

use indexmap::IndexMap;

use crate::error::ParseError;
use crate::parser::parse_xml;
use crate::sections::extract_sections;
use crate::tags::Section;

/// Marker that opens an XML comment. Input starting with it is treated as a
/// commented-out documentation block.
const XML_COMMENT_OPEN: &str = "<!--";

/// Plain-text rendering of one documentation comment.
///
/// Text sections default to an empty string and keyed sections to an empty
/// map. Map keys are code references with their member-kind prefix stripped,
/// or parameter names, kept in document order.
///
/// With the `serde` feature, serialized field names are `PascalCase`; empty
/// strings and maps are left out, and missing fields deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase", default))]
pub struct ParsedDocumentation {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub(crate) summary: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub(crate) remarks: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub(crate) returns: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub(crate) value: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub(crate) example: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "IndexMap::is_empty"))]
    pub(crate) exceptions: IndexMap<String, String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "IndexMap::is_empty"))]
    pub(crate) params: IndexMap<String, String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "IndexMap::is_empty"))]
    pub(crate) permissions: IndexMap<String, String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "IndexMap::is_empty"))]
    pub(crate) type_params: IndexMap<String, String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "IndexMap::is_empty"))]
    pub(crate) see_alsos: IndexMap<String, String>,
}

impl ParsedDocumentation {
    /// Short description, flattened to single-spaced prose.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Additional remarks.
    pub fn remarks(&self) -> &str {
        &self.remarks
    }

    /// Description of the return value.
    pub fn returns(&self) -> &str {
        &self.returns
    }

    /// Description of the value of a property.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Usage example.
    pub fn example(&self) -> &str {
        &self.example
    }

    /// Exception type to the conditions under which it is thrown.
    pub fn exceptions(&self) -> &IndexMap<String, String> {
        &self.exceptions
    }

    /// Parameter name to description.
    pub fn params(&self) -> &IndexMap<String, String> {
        &self.params
    }

    /// Permission reference to description.
    pub fn permissions(&self) -> &IndexMap<String, String> {
        &self.permissions
    }

    /// Type parameter name to description.
    pub fn type_params(&self) -> &IndexMap<String, String> {
        &self.type_params
    }

    /// Cross-references from `seealso` tags, wherever they appear, to their
    /// display text.
    pub fn see_alsos(&self) -> &IndexMap<String, String> {
        &self.see_alsos
    }

    /// Whether every section is empty.
    pub fn is_empty(&self) -> bool {
        [
            &self.summary,
            &self.remarks,
            &self.returns,
            &self.value,
            &self.example,
        ]
        .iter()
        .all(|text| text.is_empty())
            && [
                &self.exceptions,
                &self.params,
                &self.permissions,
                &self.type_params,
                &self.see_alsos,
            ]
            .iter()
            .all(|map| map.is_empty())
    }

    pub(crate) fn text_field_mut(&mut self, section: Section) -> Option<&mut String> {
        match section {
            Section::Summary => Some(&mut self.summary),
            Section::Remarks => Some(&mut self.remarks),
            Section::Returns => Some(&mut self.returns),
            Section::Value => Some(&mut self.value),
            Section::Example => Some(&mut self.example),
            _ => None,
        }
    }

    pub(crate) fn keyed_map_mut(
        &mut self,
        section: Section,
    ) -> Option<&mut IndexMap<String, String>> {
        match section {
            Section::Exception => Some(&mut self.exceptions),
            Section::Param => Some(&mut self.params),
            Section::Permission => Some(&mut self.permissions),
            Section::TypeParam => Some(&mut self.type_params),
            _ => None,
        }
    }
}

/// Parse a documentation comment into plain-text sections.
///
/// Returns `Ok(None)` when there is nothing to parse: no input, blank input,
/// or input starting with `<!--`. Everything else must be well-formed XML
/// with a single root element, whose direct children are the sections.
///
/// # Errors
///
/// Returns an error if the input is not well-formed XML.
///
/// # Examples
///
/// ```
/// let doc = xmldoc_core::parse(
///     r#"<doc><summary>Gets the <see cref="T:System.String"/> name.</summary></doc>"#,
/// )
/// .unwrap()
/// .unwrap();
///
/// assert_eq!(doc.summary(), "Gets the System.String name.");
/// assert!(xmldoc_core::parse(None::<&str>).unwrap().is_none());
/// ```
pub fn parse<'a>(
    input: impl Into<Option<&'a str>>,
) -> Result<Option<ParsedDocumentation>, ParseError> {
    let Some(xml) = input.into() else {
        tracing::trace!("No documentation comment");
        return Ok(None);
    };

    if xml.trim().is_empty() || xml.starts_with(XML_COMMENT_OPEN) {
        tracing::trace!(len = xml.len(), "Skipping empty or commented-out documentation");
        return Ok(None);
    }

    let root = parse_xml(xml)?;
    let doc = extract_sections(&root);

    tracing::debug!(
        root = %root.name,
        exceptions = doc.exceptions.len(),
        params = doc.params.len(),
        type_params = doc.type_params.len(),
        see_alsos = doc.see_alsos.len(),
        "Parsed documentation comment"
    );

    Ok(Some(doc))
}
