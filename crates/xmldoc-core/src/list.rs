//! Bullet, numbered and definition list formatting.

use crate::inline::WhitespaceMode;
use crate::render::NodeRenderer;
use crate::tags::{DESCRIPTION, ITEM, ListKind, START, TERM, TYPE};
use crate::tree::XmlElement;

/// Separator between term and description in bullet and numbered lists.
const MARKED_SEPARATOR: &str = " - ";
/// Separator between term and description in definition lists.
const DEFINITION_SEPARATOR: &str = " \u{2014} ";

/// Rendered `term` and `description` of a list item. `None` when the item
/// has no such child element.
struct ItemParts {
    term: Option<String>,
    description: Option<String>,
}

impl ItemParts {
    fn is_absent(&self) -> bool {
        self.term.is_none() && self.description.is_none()
    }

    /// Whether both parts are absent or render to nothing.
    fn is_blank(&self) -> bool {
        [&self.term, &self.description]
            .into_iter()
            .all(|part| part.as_deref().is_none_or(str::is_empty))
    }

    /// `{term} - {description}`, with the term and its separator left out
    /// when the term is empty. The separator stays when only the
    /// description is empty.
    fn marked(&self) -> String {
        let term = self.term.as_deref().unwrap_or_default();
        let description = self.description.as_deref().unwrap_or_default();
        if term.is_empty() {
            description.to_owned()
        } else {
            format!("{term}{MARKED_SEPARATOR}{description}")
        }
    }

    /// Non-empty parts joined with `separator`.
    fn joined(&self, separator: &str) -> String {
        [self.term.as_deref(), self.description.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl NodeRenderer<'_> {
    /// Render `<item>` children of a `<list>` as one line each.
    pub(crate) fn render_list(&mut self, list: &XmlElement, out: &mut String) {
        match ListKind::from_attr(list.attr(TYPE)) {
            ListKind::Bullet => {
                for item in list.children_named(ITEM) {
                    let line = self.marked_item("* ", item);
                    push_line(out, &line);
                }
            }
            ListKind::Number => {
                let mut number = i64::from(start_number(list));
                for item in list.children_named(ITEM) {
                    let line = self.marked_item(&format!("{number}. "), item);
                    push_line(out, &line);
                    number += 1;
                }
            }
            ListKind::Definition => {
                for item in list.children_named(ITEM) {
                    let line = self.definition_item(item);
                    push_line(out, &line);
                }
            }
        }
    }

    /// `{marker}{term} - {description}`, or the item's raw text when both
    /// parts are empty.
    fn marked_item(&mut self, marker: &str, item: &XmlElement) -> String {
        let parts = self.item_parts(item);
        if parts.is_blank() {
            return format!("{marker}{}", item.text_content().trim());
        }
        format!("{marker}{}", parts.marked())
    }

    /// Term and description joined by a dash, or the rendered item body for
    /// plain items.
    fn definition_item(&mut self, item: &XmlElement) -> String {
        let parts = self.item_parts(item);
        if parts.is_absent() {
            self.render(item, WhitespaceMode::Preserve)
        } else {
            parts.joined(DEFINITION_SEPARATOR)
        }
    }

    fn item_parts(&mut self, item: &XmlElement) -> ItemParts {
        ItemParts {
            term: item
                .child(TERM)
                .map(|term| self.render(term, WhitespaceMode::Preserve)),
            description: item
                .child(DESCRIPTION)
                .map(|description| self.render(description, WhitespaceMode::Preserve)),
        }
    }
}

/// First number of a numbered list, defaulting to 1.
fn start_number(list: &XmlElement) -> i32 {
    list.attr(START)
        .and_then(|start| start.trim().parse().ok())
        .unwrap_or(1)
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parser::parse_xml;

    fn render_with(xml: &str, mode: WhitespaceMode) -> String {
        let element = parse_xml(xml).unwrap();
        let mut see_alsos = IndexMap::new();
        NodeRenderer::new(&mut see_alsos).render(&element, mode)
    }

    fn render_remarks(xml: &str) -> String {
        render_with(xml, WhitespaceMode::Preserve)
    }

    fn list_xml(attrs: &str, items: &str) -> String {
        format!("<remarks><list {attrs}>{items}</list></remarks>")
    }

    const TWO_ITEMS: &str = "
        <item><term>Term1</term><description>Desc1</description></item>
        <item><term>Term2</term><description>Desc2</description></item>";

    #[test]
    fn test_bullet_list() {
        assert_eq!(
            render_remarks(&list_xml(r#"type="bullet""#, TWO_ITEMS)),
            "* Term1 - Desc1\n* Term2 - Desc2"
        );
    }

    #[test]
    fn test_numbered_list_defaults_to_one() {
        assert_eq!(
            render_remarks(&list_xml(r#"type="number""#, TWO_ITEMS)),
            "1. Term1 - Desc1\n2. Term2 - Desc2"
        );
    }

    #[test]
    fn test_numbered_list_with_start() {
        assert_eq!(
            render_remarks(&list_xml(r#"type="number" start="5""#, TWO_ITEMS)),
            "5. Term1 - Desc1\n6. Term2 - Desc2"
        );
    }

    #[test]
    fn test_numbered_list_invalid_start_defaults_to_one() {
        assert_eq!(
            render_remarks(&list_xml(r#"type="number" start="five""#, TWO_ITEMS)),
            "1. Term1 - Desc1\n2. Term2 - Desc2"
        );
    }

    #[test]
    fn test_numbered_list_negative_start() {
        assert_eq!(
            render_remarks(&list_xml(r#"type="number" start="-1""#, TWO_ITEMS)),
            "-1. Term1 - Desc1\n0. Term2 - Desc2"
        );
    }

    #[test]
    fn test_definition_list() {
        assert_eq!(
            render_remarks(&list_xml(r#"type="definition""#, TWO_ITEMS)),
            "Term1 \u{2014} Desc1\nTerm2 \u{2014} Desc2"
        );
    }

    #[test]
    fn test_missing_or_unknown_type_is_definition() {
        let expected = "Term1 \u{2014} Desc1\nTerm2 \u{2014} Desc2";
        assert_eq!(render_remarks(&list_xml("", TWO_ITEMS)), expected);
        assert_eq!(render_remarks(&list_xml(r#"type="table""#, TWO_ITEMS)), expected);
    }

    #[test]
    fn test_bullet_item_without_term_or_description_uses_raw_text() {
        assert_eq!(
            render_remarks(&list_xml(
                r#"type="bullet""#,
                "<item>Content without term or description</item>"
            )),
            "* Content without term or description"
        );
    }

    #[test]
    fn test_bullet_item_with_empty_parts_uses_raw_text() {
        assert_eq!(
            render_remarks(&list_xml(
                r#"type="bullet""#,
                "<item><term/> raw <description></description></item>"
            )),
            "* raw"
        );
    }

    #[test]
    fn test_bullet_item_description_only() {
        assert_eq!(
            render_remarks(&list_xml(
                r#"type="bullet""#,
                "<item><description>Only description</description></item>"
            )),
            "* Only description"
        );
    }

    #[test]
    fn test_bullet_item_term_only_keeps_separator() {
        assert_eq!(
            render_remarks(&list_xml(r#"type="bullet""#, "<item><term>Only term</term></item>")),
            "* Only term -"
        );
    }

    #[test]
    fn test_bullet_term_only_item_mid_list() {
        assert_eq!(
            render_remarks(&list_xml(
                r#"type="bullet""#,
                "<item><term>A</term></item><item><term>B</term><description>D</description></item>"
            )),
            "* A - \n* B - D"
        );
    }

    #[test]
    fn test_numbered_item_with_empty_description() {
        assert_eq!(
            render_remarks(&list_xml(
                r#"type="number""#,
                "<item><term>A</term><description/></item><item><term>B</term><description>D</description></item>"
            )),
            "1. A - \n2. B - D"
        );
    }

    #[test]
    fn test_definition_plain_item_renders_body() {
        assert_eq!(
            render_remarks(&list_xml(
                r#"type="definition""#,
                r#"<item>Uses <see cref="T:Foo"/> here</item>"#
            )),
            "Uses Foo here"
        );
    }

    #[test]
    fn test_item_parts_render_inline_markup() {
        assert_eq!(
            render_remarks(&list_xml(
                r#"type="bullet""#,
                r#"<item><term><c>null</c></term><description>When <paramref name="x"/> is missing</description></item>"#
            )),
            "* null - When x is missing"
        );
    }

    #[test]
    fn test_list_header_ignored() {
        assert_eq!(
            render_remarks(&list_xml(
                r#"type="bullet""#,
                "<listheader><term>Name</term></listheader><item><term>A</term><description>B</description></item>"
            )),
            "* A - B"
        );
    }

    #[test]
    fn test_text_before_and_after_list() {
        let xml = r#"<summary>
            This is regular content.
            <list type="bullet">
                <item>
                    <term>Item 1</term>
                    <description>Description 1</description>
                </item>
            </list>
            This is content after the list.
        </summary>"#;

        assert_eq!(
            render_with(xml, WhitespaceMode::Collapse),
            "This is regular content.\n* Item 1 - Description 1\nThis is content after the list."
        );
    }

    #[test]
    fn test_list_always_opens_a_new_line() {
        let xml = "<remarks>Intro\n    <list type=\"bullet\"><item>a</item></list></remarks>";

        assert_eq!(render_remarks(xml), "Intro\n\n* a");
    }

    #[test]
    fn test_consecutive_lists_separated_by_blank_line() {
        let xml = r#"<remarks><list type="bullet"><item>a</item></list><list type="bullet"><item>b</item></list></remarks>"#;

        assert_eq!(render_remarks(xml), "* a\n\n* b");
    }

    #[test]
    fn test_nested_see_also_inside_item_is_registered() {
        let element = parse_xml(
            r#"<remarks><list type="bullet"><item><description><seealso cref="T:Bar"/></description></item></list></remarks>"#,
        )
        .unwrap();
        let mut see_alsos = IndexMap::new();

        let text = NodeRenderer::new(&mut see_alsos).render(&element, WhitespaceMode::Preserve);

        assert_eq!(text, "* Bar");
        assert_eq!(see_alsos["Bar"], "Bar");
    }
}
