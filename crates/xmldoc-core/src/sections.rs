//! Extraction of top-level sections from a documentation comment root.

use crate::cref::strip_id_prefix;
use crate::documentation::ParsedDocumentation;
use crate::inline::WhitespaceMode;
use crate::render::NodeRenderer;
use crate::tags::Section;
use crate::tree::XmlElement;

/// Build the documentation record from the children of the comment root.
///
/// Children are visited once in document order, so see-also references are
/// registered in the order they are written no matter which section they
/// appear in. Only the first occurrence of a singular section is rendered.
pub(crate) fn extract_sections(root: &XmlElement) -> ParsedDocumentation {
    let mut doc = ParsedDocumentation::default();
    let mut rendered_singular: Vec<Section> = Vec::new();

    for element in root.elements() {
        let Some(section) = Section::from_tag(&element.name) else {
            continue;
        };

        match section {
            Section::Summary
            | Section::Remarks
            | Section::Returns
            | Section::Value
            | Section::Example => {
                if rendered_singular.contains(&section) {
                    continue;
                }
                rendered_singular.push(section);

                let text =
                    NodeRenderer::new(&mut doc.see_alsos).render(element, section_mode(section));
                if let Some(field) = doc.text_field_mut(section) {
                    *field = text;
                }
            }
            Section::Exception | Section::Param | Section::Permission | Section::TypeParam => {
                let Some(key) = section
                    .key_attribute()
                    .and_then(|attr| element.attr(attr))
                    .filter(|key| !key.trim().is_empty())
                else {
                    continue;
                };

                let text = NodeRenderer::new(&mut doc.see_alsos)
                    .render(element, WhitespaceMode::Preserve);
                if let Some(map) = doc.keyed_map_mut(section) {
                    map.insert(strip_id_prefix(key).to_owned(), text);
                }
            }
            Section::SeeAlso => {
                // No surrounding text at the top level, only the registry entry
                NodeRenderer::new(&mut doc.see_alsos)
                    .register_see_also(element, WhitespaceMode::Preserve);
            }
        }
    }

    doc
}

/// Whitespace mode for a singular section: the summary reads as one
/// paragraph, everything else keeps its line structure.
fn section_mode(section: Section) -> WhitespaceMode {
    if section == Section::Summary {
        WhitespaceMode::Collapse
    } else {
        WhitespaceMode::Preserve
    }
}
