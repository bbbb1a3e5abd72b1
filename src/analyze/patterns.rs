//! Per-language regex pattern sets for structure extraction.

use once_cell::sync::Lazy;
use regex::Regex;

/// The four extraction patterns associated with one source language.
///
/// Compiled once at startup and shared process-wide; never mutated.
pub struct PatternSet {
    pub functions: Regex,
    pub variables: Regex,
    pub classes: Regex,
    pub imports: Regex,
}

impl PatternSet {
    fn new(functions: &str, variables: &str, classes: &str, imports: &str) -> Self {
        Self {
            functions: Regex::new(functions).unwrap(),
            variables: Regex::new(variables).unwrap(),
            classes: Regex::new(classes).unwrap(),
            imports: Regex::new(imports).unwrap(),
        }
    }
}

static JAVASCRIPT: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::new(
        r"function\s+(\w+)\s*\([^)]*\)|(\w+)\s*=\s*\([^)]*\)\s*=>",
        r"(?:let|const|var)\s+(\w+)",
        r"class\s+(\w+)",
        r#"(?:import|require)\s*.*?from\s*['"]([^'"]+)['"]"#,
    )
});

static PYTHON: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::new(
        r"def\s+(\w+)\s*\(",
        r"(\w+)\s*=",
        r"class\s+(\w+)",
        r"(?:import|from)\s+(\w+)",
    )
});

static JAVA: Lazy<PatternSet> = Lazy::new(|| {
    PatternSet::new(
        r"(?:public|private|protected)?\s*(?:static)?\s*\w+\s+(\w+)\s*\(",
        r"(?:int|String|boolean|double|float)\s+(\w+)",
        r"(?:public\s+)?class\s+(\w+)",
        r"import\s+([^;]+);",
    )
});

/// Look up the pattern set for a lowercased language name.
///
/// Unrecognized languages fall back to the JavaScript set; this is not an
/// error.
pub fn for_language(lang: &str) -> &'static PatternSet {
    match lang {
        "python" => &PYTHON,
        "java" => &JAVA,
        _ => &JAVASCRIPT,
    }
}
