//! Literal substitution tables for known language pairs.
//!
//! Declaration order is load-bearing: the translator folds over a table in
//! order and each rule operates on text already modified by earlier rules.
//! Keep these as ordered slices, never hash maps.

/// One (literal pattern, replacement) substitution.
pub type Rule = (&'static str, &'static str);

const JAVASCRIPT_TO_PYTHON: &[Rule] = &[
    ("function", "def"),
    ("let ", ""),
    ("const ", ""),
    ("var ", ""),
    ("===", "=="),
    ("!==", "!="),
    ("console.log", "print"),
    ("true", "True"),
    ("false", "False"),
    ("null", "None"),
];

const JAVASCRIPT_TO_JAVA: &[Rule] = &[
    ("let ", "var "),
    ("const ", "final var "),
    ("function", "public static void"),
    ("console.log", "System.out.println"),
    ("true", "true"),
    ("false", "false"),
];

const PYTHON_TO_JAVASCRIPT: &[Rule] = &[
    ("def ", "function "),
    ("print", "console.log"),
    ("True", "true"),
    ("False", "false"),
    ("None", "null"),
    ("==", "==="),
    ("!=", "!=="),
];

/// Look up the rule table for a lowercased (source, target) pair.
pub fn table_for(from: &str, to: &str) -> Option<&'static [Rule]> {
    match (from, to) {
        ("javascript", "python") => Some(JAVASCRIPT_TO_PYTHON),
        ("javascript", "java") => Some(JAVASCRIPT_TO_JAVA),
        ("python", "javascript") => Some(PYTHON_TO_JAVASCRIPT),
        _ => None,
    }
}
