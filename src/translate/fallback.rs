//! Hard-coded fallback substitutions for pairs without a rule table.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Function declaration header, capturing the identifier for reuse.
    static ref FUNCTION_HEADER: Regex = Regex::new(r"function\s+(\w+)\s*\(").unwrap();
}

/// Best-effort syntax rewrite toward the target language.
///
/// Only `python` and `java` targets are rewritten; every other target gets
/// the input back unchanged. No formatting pass runs on this path.
pub fn basic_translation(code: &str, to: &str) -> String {
    match to {
        "python" => {
            let translated = FUNCTION_HEADER.replace_all(code, "def $1(").into_owned();
            translated
                .replace("console.log", "print")
                .replace("true", "True")
                .replace("false", "False")
                .replace("null", "None")
        }
        "java" => {
            let translated = FUNCTION_HEADER
                .replace_all(code, "public static void $1(")
                .into_owned();
            translated.replace("console.log", "System.out.println")
        }
        _ => code.to_string(),
    }
}
