//! Stateless improvement suggestions.

/// Run the fixed suggestion checks against a snippet.
///
/// Each check fires at most once and appends its message in check order:
/// legacy `var` declarations, overlong lines, missing comments.
pub fn generate_suggestions(code: &str) -> Vec<String> {
    let mut suggestions = Vec::new();

    if code.contains("var ") {
        suggestions
            .push("Consider using 'let' or 'const' instead of 'var' for better scoping".into());
    }

    if code.split('\n').any(|line| line.chars().count() > 120) {
        suggestions
            .push("Some lines are very long - consider breaking them up for readability".into());
    }

    if !code.contains("//") && !code.contains("/*") {
        suggestions.push("Add comments to explain complex logic".into());
    }

    suggestions
}
