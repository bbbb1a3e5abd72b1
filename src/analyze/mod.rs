//! Pattern-based code analysis.
//!
//! No lexing or parsing happens here: structure extraction is regex
//! matching, complexity is keyword counting, and suggestions are fixed
//! substring checks. The result is a superficial but deterministic picture
//! of a snippet.

mod complexity;
mod patterns;
mod structure;
mod suggest;

pub use complexity::{estimate_complexity, Complexity, ComplexityLevel};
pub use patterns::{for_language, PatternSet};
pub use structure::{extract_structure, CodeStructure};
pub use suggest::generate_suggestions;

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref LOOP_KEYWORDS: Regex = Regex::new(r"(?:for|while|forEach)").unwrap();
    static ref CONDITION_KEYWORDS: Regex = Regex::new(r"(?:if|switch|case)").unwrap();
    static ref ASYNC_KEYWORDS: Regex = Regex::new(r"(?:async|await|Promise)").unwrap();
}

/// Full analysis of one snippet. Built fresh per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub structure: CodeStructure,
    pub complexity: Complexity,
    pub suggestions: Vec<String>,
}

/// Stateless analyzer over the process-wide pattern tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeAnalyzer;

impl CodeAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a snippet in the named language.
    ///
    /// The language name is matched case-insensitively; unrecognized names
    /// silently use the JavaScript pattern set.
    pub fn analyze(&self, code: &str, language: &str) -> Result<AnalysisResult> {
        let lang = language.to_lowercase();
        let patterns = patterns::for_language(&lang);

        Ok(AnalysisResult {
            summary: generate_summary(code, &lang),
            structure: extract_structure(code, patterns),
            complexity: estimate_complexity(code),
            suggestions: generate_suggestions(code),
        })
    }
}

/// Compose the templated summary sentence.
///
/// Clause order is fixed: loops, conditions, async.
fn generate_summary(code: &str, language: &str) -> String {
    let lines = code.split('\n').count();
    let chars = code.chars().count();

    let mut summary = format!(
        "This {} code contains {} lines and {} characters. ",
        language, lines, chars
    );

    if LOOP_KEYWORDS.is_match(code) {
        summary.push_str("It includes loop structures for iteration. ");
    }
    if CONDITION_KEYWORDS.is_match(code) {
        summary.push_str("It uses conditional logic for decision making. ");
    }
    if ASYNC_KEYWORDS.is_match(code) {
        summary.push_str("It handles asynchronous operations. ");
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_mentions_counts() {
        let summary = generate_summary("let x = 1;\nlet y = 2;", "javascript");
        assert!(summary.starts_with("This javascript code contains 2 lines and 21 characters."));
    }

    #[test]
    fn test_summary_clause_order() {
        let summary = generate_summary("for (;;) { if (x) { await y; } }", "javascript");
        let loops = summary.find("loop structures").unwrap();
        let conds = summary.find("conditional logic").unwrap();
        let asyncs = summary.find("asynchronous").unwrap();
        assert!(loops < conds && conds < asyncs);
    }

    #[test]
    fn test_analyze_known_scenario() {
        let code = "function calculateSum(a, b) {\n if (a > 0 && b > 0) {\n return a + b;\n }\n return 0;\n}\n\nconst result = calculateSum(5, 10);\nconsole.log(result);";
        let analysis = CodeAnalyzer::new().analyze(code, "javascript").unwrap();

        assert!(analysis
            .structure
            .functions
            .contains(&"calculateSum".to_string()));
        assert!(analysis.structure.variables.contains(&"result".to_string()));
        assert_eq!(analysis.complexity.level, ComplexityLevel::Low);
    }

    #[test]
    fn test_language_lookup_is_case_insensitive() {
        let analyzer = CodeAnalyzer::new();
        let upper = analyzer.analyze("def walk():\n    pass", "Python").unwrap();
        assert_eq!(upper.structure.functions, vec!["walk"]);
        assert!(upper.summary.contains("This python code"));
    }
}
