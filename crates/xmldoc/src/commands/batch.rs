//! `xmldoc batch` command implementation.
//!
//! Input is a JSON object mapping declaration ids to raw documentation
//! comments (or `null`). Each comment is parsed on its own, so one malformed
//! comment does not affect the others.

use std::path::PathBuf;

use clap::Args;
use indexmap::IndexMap;
use xmldoc_core::{ParseError, ParsedDocumentation};

use super::{CommonArgs, read_input};
use crate::error::CliError;
use crate::output::{Output, write_json};

/// Arguments for the batch command.
#[derive(Args)]
pub(crate) struct BatchArgs {
    /// JSON file mapping declaration ids to comments (`-` for stdin).
    file: PathBuf,

    /// Stop at the first malformed comment (overrides config).
    #[arg(long)]
    fail_fast: bool,

    #[command(flatten)]
    common: CommonArgs,
}

/// Parsed records by declaration id, in input order.
type Documents = IndexMap<String, Option<ParsedDocumentation>>;

/// Outcome of parsing a batch.
#[derive(Debug, Default)]
pub(crate) struct BatchResult {
    /// Record per id; `None` for empty input and for malformed comments.
    pub(crate) documents: Documents,
    /// Ids of malformed comments with their errors.
    pub(crate) failures: Vec<(String, ParseError)>,
}

impl BatchArgs {
    /// Execute the batch command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = self.common.load_config(self.fail_fast.then_some(true))?;

        let input = read_input(Some(&self.file))?;
        let comments: IndexMap<String, Option<String>> = serde_json::from_str(&input)?;

        let result = parse_batch(comments, config.batch.fail_fast)?;

        for (id, err) in &result.failures {
            output.warning(&format!("Skipped {id}: {err}"));
        }
        if result.failures.is_empty() {
            output.success(&format!("Parsed {} comments", result.documents.len()));
        } else {
            output.warning(&format!(
                "Parsed {} comments, {} malformed",
                result.documents.len(),
                result.failures.len()
            ));
        }

        write_json(std::io::stdout().lock(), &result.documents, &config.output)
    }
}

/// Parse every comment independently.
///
/// Malformed comments map to `None` and are collected in
/// [`BatchResult::failures`], unless `fail_fast` is set, in which case the
/// first one aborts the batch.
pub(crate) fn parse_batch(
    comments: IndexMap<String, Option<String>>,
    fail_fast: bool,
) -> Result<BatchResult, CliError> {
    let mut result = BatchResult {
        documents: IndexMap::with_capacity(comments.len()),
        failures: Vec::new(),
    };

    for (id, comment) in comments {
        match xmldoc_core::parse(comment.as_deref()) {
            Ok(doc) => {
                result.documents.insert(id, doc);
            }
            Err(source) if fail_fast => {
                return Err(CliError::Comment { id, source });
            }
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "Skipping malformed documentation comment");
                result.documents.insert(id.clone(), None);
                result.failures.push((id, err));
            }
        }
    }

    tracing::info!(
        total = result.documents.len(),
        failures = result.failures.len(),
        "Batch completed"
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn comments(entries: &[(&str, Option<&str>)]) -> IndexMap<String, Option<String>> {
        entries
            .iter()
            .map(|(id, comment)| ((*id).to_owned(), comment.map(str::to_owned)))
            .collect()
    }

    #[test]
    fn test_parse_batch_keeps_input_order() {
        let input = comments(&[
            ("M:B", Some("<doc><summary>b</summary></doc>")),
            ("M:A", Some("<doc><summary>a</summary></doc>")),
        ]);

        let result = parse_batch(input, false).unwrap();

        let ids: Vec<&str> = result.documents.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["M:B", "M:A"]);
        assert!(result.failures.is_empty());
    }

    #[test]
    fn test_parse_batch_empty_comments_map_to_none() {
        let input = comments(&[("a", None), ("b", Some("  ")), ("c", Some("<!-- off -->"))]);

        let result = parse_batch(input, false).unwrap();

        assert_eq!(result.documents.len(), 3);
        assert!(result.documents.values().all(Option::is_none));
        assert!(result.failures.is_empty());
    }

    #[test]
    fn test_parse_batch_isolates_malformed_comment() {
        let input = comments(&[
            ("good", Some("<doc><summary>fine</summary></doc>")),
            ("bad", Some("<doc><summary>broken</doc>")),
            ("after", Some("<doc><remarks>still parsed</remarks></doc>")),
        ]);

        let result = parse_batch(input, false).unwrap();

        assert_eq!(result.documents.len(), 3);
        assert!(result.documents["bad"].is_none());
        assert_eq!(
            result.documents["after"].as_ref().unwrap().remarks(),
            "still parsed"
        );
        assert_eq!(result.failures.len(), 1);
        assert_eq!(result.failures[0].0, "bad");
    }

    #[test]
    fn test_parse_batch_fail_fast() {
        let input = comments(&[
            ("bad", Some("<doc>")),
            ("good", Some("<doc/>")),
        ]);

        let result = parse_batch(input, true);

        assert!(matches!(result, Err(CliError::Comment { id, .. }) if id == "bad"));
    }

    #[test]
    fn test_batch_output_json() {
        let input = comments(&[
            ("T:Foo", Some(r#"<doc><summary>A <see cref="T:Bar"/>.</summary></doc>"#)),
            ("T:Empty", None),
        ]);
        let result = parse_batch(input, false).unwrap();

        let json = serde_json::to_string(&result.documents).unwrap();

        assert_eq!(json, r#"{"T:Foo":{"Summary":"A Bar."},"T:Empty":null}"#);
    }
}
