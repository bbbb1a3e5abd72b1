//! Identifier extraction via the per-language pattern sets.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::patterns::PatternSet;

/// Identifiers extracted from a snippet, grouped by category.
///
/// Sequences preserve the order in which matches occur in the text; a
/// category with no matches is an empty list, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeStructure {
    pub functions: Vec<String>,
    pub variables: Vec<String>,
    pub classes: Vec<String>,
    pub imports: Vec<String>,
}

/// Apply every pattern of a set to the code and collect matched identifiers.
pub fn extract_structure(code: &str, patterns: &PatternSet) -> CodeStructure {
    CodeStructure {
        functions: collect_matches(&patterns.functions, code),
        variables: collect_matches(&patterns.variables, code),
        classes: collect_matches(&patterns.classes, code),
        imports: collect_matches(&patterns.imports, code),
    }
}

/// Collect the first non-empty capture group of every match, in text order.
///
/// Stateless find-all iteration; no cursor state survives between calls even
/// when the same compiled pattern is reused across requests.
fn collect_matches(pattern: &Regex, code: &str) -> Vec<String> {
    pattern
        .captures_iter(code)
        .filter_map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str())
                .find(|s| !s.is_empty())
                .map(String::from)
        })
        .collect()
}
