//! Code reference identifiers.

/// Member-kind markers that may prefix a code reference: namespace, type,
/// field, property, method, event and error.
const MEMBER_KINDS: [char; 7] = ['N', 'T', 'F', 'P', 'M', 'E', '!'];

/// Strip the member-kind prefix (`T:`, `M:`, ...) from a code reference.
///
/// Blank input yields an empty string. Anything without a recognized prefix
/// is returned unchanged.
///
/// # Examples
///
/// ```
/// use xmldoc_core::strip_id_prefix;
///
/// assert_eq!(strip_id_prefix("T:System.String"), "System.String");
/// assert_eq!(strip_id_prefix("System.String"), "System.String");
/// assert_eq!(strip_id_prefix("   "), "");
/// ```
pub fn strip_id_prefix(value: &str) -> &str {
    if value.trim().is_empty() {
        return "";
    }

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(kind), Some(':')) if MEMBER_KINDS.contains(&kind) => chars.as_str(),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_every_member_kind() {
        for prefix in ["N:", "T:", "F:", "P:", "M:", "E:", "!:"] {
            assert_eq!(strip_id_prefix(&format!("{prefix}Foo.Bar")), "Foo.Bar");
        }
    }

    #[test]
    fn test_unknown_prefix_unchanged() {
        assert_eq!(strip_id_prefix("X:Foo"), "X:Foo");
        assert_eq!(strip_id_prefix("t:Foo"), "t:Foo");
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        assert_eq!(strip_id_prefix(" T:Foo"), " T:Foo");
        assert_eq!(strip_id_prefix("Foo.T:Bar"), "Foo.T:Bar");
    }

    #[test]
    fn test_only_first_prefix_removed() {
        assert_eq!(strip_id_prefix("T:M:Foo"), "M:Foo");
    }

    #[test]
    fn test_bare_prefix_yields_empty() {
        assert_eq!(strip_id_prefix("M:"), "");
    }

    #[test]
    fn test_blank_yields_empty() {
        assert_eq!(strip_id_prefix(""), "");
        assert_eq!(strip_id_prefix(" \t\n"), "");
    }
}
