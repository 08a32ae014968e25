//! Plain-text rendering of XML documentation comments.
//!
//! Compilers emit source-level doc comments as XML (`<summary>`, `<param>`,
//! `<see cref="..."/>`, `<list>`, ...). This crate turns one such comment into
//! a [`ParsedDocumentation`]: trimmed plain text per section plus keyed maps
//! for exceptions, parameters, permissions, type parameters and see-also
//! references. Inline markup is resolved to text and lists are laid out one
//! item per line, so consumers never deal with raw XML.
//!
//! # Whitespace
//!
//! The summary is flattened to single-spaced prose ([`WhitespaceMode::Collapse`]).
//! All other sections keep their line breaks with source indentation removed
//! ([`WhitespaceMode::Preserve`]). Newlines are the only structure markers in
//! the output.
//!
//! # Example
//!
//! ```
//! let xml = r#"<doc>
//!     <summary>Returns the larger of <paramref name="a"/> and <paramref name="b"/>.</summary>
//!     <param name="a">First value.</param>
//!     <param name="b">Second value.</param>
//!     <exception cref="T:System.ArgumentNullException">A value is null.</exception>
//! </doc>"#;
//!
//! let doc = xmldoc_core::parse(xml).unwrap().unwrap();
//!
//! assert_eq!(doc.summary(), "Returns the larger of a and b.");
//! assert_eq!(doc.params()["b"], "Second value.");
//! assert_eq!(doc.exceptions()["System.ArgumentNullException"], "A value is null.");
//! ```

mod cref;
mod documentation;
mod error;
mod inline;
mod list;
mod parser;
mod render;
mod sections;
mod tags;
mod tree;

pub use cref::strip_id_prefix;
pub use documentation::{ParsedDocumentation, parse};
pub use error::ParseError;
pub use inline::WhitespaceMode;
pub use parser::{XmlTreeParser, parse_xml};
pub use tree::{XmlElement, XmlNode};
