use std::fmt;

use crate::types::SearchResult;

const RULE_WIDTH: usize = 80;
const MAX_CONTENT_LINES: usize = 5;

/// Human-readable console summary of one query.
pub fn render_report(result: &SearchResult) -> String {
    Report(result).to_string()
}

struct Report<'a>(&'a SearchResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "\n{rule}")?;
        writeln!(f, "Query: {}", result.query)?;
        writeln!(f, "Status: {}", result.status)?;
        writeln!(f, "URL: {}", result.url)?;
        if let Some(error) = &result.error {
            writeln!(f, "Error: {error}")?;
        }

        if !result.results.is_empty() {
            writeln!(f, "\nFound {} result(s):", result.results.len())?;
        }
        for (i, pod) in result.results.iter().enumerate() {
            writeln!(f, "\n--- Result {} ---", i + 1)?;
            if !pod.title.is_empty() {
                writeln!(f, "Title: {}", pod.title)?;
            }
            if !pod.formulas.is_empty() {
                writeln!(f, "\nFormulas:")?;
                for formula in &pod.formulas {
                    writeln!(f, "  • {formula}")?;
                }
            }
            if !pod.content.is_empty() {
                writeln!(f, "\nContent:")?;
                for line in pod.content.iter().take(MAX_CONTENT_LINES) {
                    writeln!(f, "  • {line}")?;
                }
            }
            if !pod.images.is_empty() {
                writeln!(f, "\nImages: {} found", pod.images.len())?;
            }
        }

        writeln!(f, "\n{rule}")
    }
}
