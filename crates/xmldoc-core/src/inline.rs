//! Spacing and whitespace rules for inline text fragments.

/// Whitespace handling applied to inline fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespaceMode {
    /// Flatten multi-line source text into single-spaced prose. Used for the
    /// summary only.
    Collapse,
    /// Keep line breaks, dropping indentation around each line.
    #[default]
    Preserve,
}

/// Append an inline fragment to `out`.
///
/// Leading whitespace of the fragment is dropped and a single separating
/// space is inserted when the fragment continues a line and starts with a
/// word character. An empty fragment still counts as a word for that
/// decision, so it may leave a trailing space behind.
pub(crate) fn append_inline(out: &mut String, fragment: &str, mode: WhitespaceMode) {
    let fragment = fragment.trim_start();

    if needs_separator(out, fragment) {
        out.push(' ');
    }

    match mode {
        WhitespaceMode::Collapse => out.push_str(collapse_whitespace(fragment).trim()),
        WhitespaceMode::Preserve => push_trimmed_lines(out, fragment),
    }
}

/// Normalize a standalone fragment, as if appended to an empty buffer.
pub(crate) fn normalize(fragment: &str, mode: WhitespaceMode) -> String {
    let mut out = String::new();
    append_inline(&mut out, fragment, mode);
    out.trim().to_owned()
}

fn needs_separator(out: &str, fragment: &str) -> bool {
    !out.is_empty() && !out.ends_with('\n') && !starts_with_non_word(fragment)
}

/// Whether the fragment opens with punctuation or a symbol.
fn starts_with_non_word(fragment: &str) -> bool {
    fragment
        .chars()
        .next()
        .is_some_and(|c| !(c.is_alphanumeric() || c == '_'))
}

/// Replace every run of two or more whitespace characters with one space.
fn collapse_whitespace(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut run = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            run.push(c);
            continue;
        }
        flush_run(&mut result, &mut run);
        result.push(c);
    }
    flush_run(&mut result, &mut run);

    result
}

fn flush_run(result: &mut String, run: &mut String) {
    if run.chars().nth(1).is_some() {
        result.push(' ');
    } else {
        result.push_str(run);
    }
    run.clear();
}

fn push_trimmed_lines(out: &mut String, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.trim());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appended(initial: &str, fragment: &str, mode: WhitespaceMode) -> String {
        let mut out = initial.to_owned();
        append_inline(&mut out, fragment, mode);
        out
    }

    #[test]
    fn test_no_separator_on_empty_buffer() {
        assert_eq!(appended("", "  word", WhitespaceMode::Preserve), "word");
    }

    #[test]
    fn test_separator_between_words() {
        assert_eq!(appended("This is", "code", WhitespaceMode::Preserve), "This is code");
    }

    #[test]
    fn test_no_separator_before_punctuation() {
        assert_eq!(appended("param1", ".", WhitespaceMode::Collapse), "param1.");
        assert_eq!(appended("call", "(x)", WhitespaceMode::Collapse), "call(x)");
    }

    #[test]
    fn test_no_separator_after_newline() {
        assert_eq!(appended("line\n", "next", WhitespaceMode::Preserve), "line\nnext");
    }

    #[test]
    fn test_empty_fragment_still_separates() {
        assert_eq!(appended("element:", "", WhitespaceMode::Collapse), "element: ");
        assert_eq!(appended("element:", "   ", WhitespaceMode::Collapse), "element: ");
    }

    #[test]
    fn test_underscore_and_digits_are_word_characters() {
        assert_eq!(appended("a", "_b", WhitespaceMode::Preserve), "a _b");
        assert_eq!(appended("a", "42", WhitespaceMode::Preserve), "a 42");
    }

    #[test]
    fn test_collapse_flattens_runs() {
        assert_eq!(
            appended("", "first line\n        second   line\n    ", WhitespaceMode::Collapse),
            "first line second line"
        );
    }

    #[test]
    fn test_collapse_keeps_single_whitespace_characters() {
        assert_eq!(collapse_whitespace("a\nb\tc"), "a\nb\tc");
        assert_eq!(collapse_whitespace("a \n b"), "a b");
    }

    #[test]
    fn test_preserve_trims_each_line() {
        assert_eq!(
            appended("", "var x = 1;\n    var y = 2;\n\n    var z;\n  ", WhitespaceMode::Preserve),
            "var x = 1;\nvar y = 2;\n\nvar z;\n"
        );
    }

    #[test]
    fn test_preserve_trims_carriage_returns() {
        assert_eq!(
            appended("", "one\r\n  two", WhitespaceMode::Preserve),
            "one\ntwo"
        );
    }

    #[test]
    fn test_normalize_trims_result() {
        assert_eq!(normalize("\n   text  \n", WhitespaceMode::Preserve), "text");
        assert_eq!(normalize("  a   b  ", WhitespaceMode::Collapse), "a b");
        assert_eq!(normalize("   ", WhitespaceMode::Collapse), "");
    }
}
