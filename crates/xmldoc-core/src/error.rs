//! Error types for documentation comment parsing.

/// Error raised when a documentation comment is not well-formed XML.
///
/// Only structural problems surface here. Missing attributes, unknown tags
/// and empty elements never fail; they degrade during rendering instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// XML tokenizer error, including mismatched end tags and invalid escapes
    /// in attribute values.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute (duplicate, unquoted, missing value).
    #[error("XML attribute error: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// Bytes that do not decode as text.
    #[error("encoding error: {0}")]
    Encoding(#[from] quick_xml::encoding::EncodingError),

    /// Entity reference other than the five predefined XML entities.
    #[error("unknown entity reference `&{0};`")]
    UnknownEntity(String),

    /// Numeric character reference that does not name a valid character.
    #[error("invalid character reference `&{0};`")]
    InvalidCharRef(String),

    /// Input ended while an element was still open.
    #[error("unexpected end of input inside `<{0}>`")]
    UnclosedElement(String),

    /// End tag with no matching start tag.
    #[error("unexpected end tag `</{0}>`")]
    UnexpectedEndTag(String),

    /// Input contains no element at all.
    #[error("document has no root element")]
    MissingRoot,

    /// A second element follows the root element.
    #[error("document has more than one root element (found `<{0}>`)")]
    MultipleRoots(String),

    /// Non-whitespace text before or after the root element.
    #[error("text content outside the root element")]
    TextOutsideRoot,
}
