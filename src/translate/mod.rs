//! Rule-based source translation.
//!
//! Substitutions are literal and textual, not token-aware: a pattern inside
//! a string literal or comment is rewritten exactly like code. That is the
//! documented contract of this translator, kept for compatibility with its
//! output format.

mod fallback;
mod rules;

pub use rules::{table_for, Rule};

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Outcome of one translation. `applied_rules` is present only when a rule
/// table was used, and is omitted from the JSON entirely otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    pub translated_code: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_rules: Option<Vec<String>>,
}

/// Stateless translator over the process-wide rule tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeTranslator;

impl CodeTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translate a snippet between two case-insensitively named languages.
    pub fn translate(&self, code: &str, from_language: &str, to_language: &str) -> Result<TranslationResult> {
        let from = from_language.to_lowercase();
        let to = to_language.to_lowercase();

        if from == to {
            return Ok(TranslationResult {
                translated_code: code.to_string(),
                notes: "No translation needed - same language".to_string(),
                applied_rules: None,
            });
        }

        let Some(table) = rules::table_for(&from, &to) else {
            return Ok(TranslationResult {
                translated_code: fallback::basic_translation(code, &to),
                notes: format!(
                    "Basic translation from {} to {}. Manual review recommended.",
                    from_language, to_language
                ),
                applied_rules: None,
            });
        };

        let mut translated = code.to_string();
        let mut applied_rules = Vec::new();

        // Ordered fold: each rule sees the output of the previous one.
        for (pattern, replacement) in table {
            if translated.contains(pattern) {
                translated = translated.replace(pattern, replacement);
                applied_rules.push(format!("{} → {}", pattern, replacement));
            }
        }

        let translated = apply_language_formatting(translated, &to);

        Ok(TranslationResult {
            translated_code: translated,
            notes: format!("Translated from {} to {}", from_language, to_language),
            applied_rules: Some(applied_rules),
        })
    }
}

/// Target-keyed reformatting after the rule pass.
///
/// The python branch is scope-oblivious by contract: every `{` becomes `:`
/// and every `}` is dropped, object literals included.
fn apply_language_formatting(code: String, to: &str) -> String {
    match to {
        "python" => code.replace('{', ":").replace('}', ""),
        "java" => {
            if code.contains("class ") {
                code
            } else {
                format!("public class Main {{\n{}\n}}", code)
            }
        }
        _ => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_language_is_identity() {
        let translator = CodeTranslator::new();
        let result = translator
            .translate("def x():\n    pass", "Python", "python")
            .unwrap();
        assert_eq!(result.translated_code, "def x():\n    pass");
        assert_eq!(result.notes, "No translation needed - same language");
        assert!(result.applied_rules.is_none());
    }

    #[test]
    fn test_js_to_python_known_scenario() {
        let code = "function greet(name) {\n console.log(\"Hello, \" + name);\n return true;\n}";
        let result = CodeTranslator::new()
            .translate(code, "javascript", "python")
            .unwrap();

        assert!(result.translated_code.contains("print"));
        assert!(result.translated_code.contains("True"));
        assert!(!result.translated_code.contains("console.log"));

        let applied = result.applied_rules.unwrap();
        assert!(applied.contains(&"console.log → print".to_string()));
        assert!(applied.contains(&"true → True".to_string()));
    }

    #[test]
    fn test_applied_rules_keep_table_order() {
        let code = "function f() { const x = true; }";
        let result = CodeTranslator::new()
            .translate(code, "javascript", "python")
            .unwrap();

        let applied = result.applied_rules.unwrap();
        let function_pos = applied.iter().position(|r| r.starts_with("function")).unwrap();
        let const_pos = applied.iter().position(|r| r.starts_with("const")).unwrap();
        let true_pos = applied.iter().position(|r| r.starts_with("true")).unwrap();
        assert!(function_pos < const_pos && const_pos < true_pos);
    }

    #[test]
    fn test_python_formatting_strips_braces() {
        let result = CodeTranslator::new()
            .translate("function f() { return 1; }", "javascript", "python")
            .unwrap();
        assert!(!result.translated_code.contains('{'));
        assert!(!result.translated_code.contains('}'));
        assert!(result.translated_code.contains(':'));
    }

    #[test]
    fn test_java_formatting_wraps_in_class() {
        let result = CodeTranslator::new()
            .translate("let x = 1;", "javascript", "java")
            .unwrap();
        assert!(result.translated_code.starts_with("public class Main {"));
        assert!(result.translated_code.ends_with("}"));
        assert!(result.translated_code.contains("var x = 1;"));
    }

    #[test]
    fn test_java_formatting_skips_existing_class() {
        let result = CodeTranslator::new()
            .translate("class Thing {}\nlet x = 1;", "javascript", "java")
            .unwrap();
        assert!(!result.translated_code.starts_with("public class Main"));
    }

    #[test]
    fn test_fallback_pair_has_no_applied_rules() {
        let result = CodeTranslator::new()
            .translate("print('hi')", "python", "java")
            .unwrap();
        assert!(result.applied_rules.is_none());
        assert!(result.notes.contains("Manual review recommended"));
    }

    #[test]
    fn test_fallback_note_keeps_caller_spelling() {
        let result = CodeTranslator::new()
            .translate("x = 1", "Ruby", "Go")
            .unwrap();
        assert_eq!(
            result.notes,
            "Basic translation from Ruby to Go. Manual review recommended."
        );
        assert_eq!(result.translated_code, "x = 1");
    }

    #[test]
    fn test_substitutions_compound() {
        // "function" → "def" first, then "true" → "True" runs on the
        // already-rewritten text.
        let result = CodeTranslator::new()
            .translate("function t() { return true; }", "javascript", "python")
            .unwrap();
        assert!(result.translated_code.contains("def t()"));
        assert!(result.translated_code.contains("True"));
    }

    #[test]
    fn test_rules_hit_string_literals_too() {
        // Literal substitution is not token-aware by contract.
        let result = CodeTranslator::new()
            .translate("console.log(\"true story\");", "javascript", "python")
            .unwrap();
        assert!(result.translated_code.contains("True story"));
    }
}
