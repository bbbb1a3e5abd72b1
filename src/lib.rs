//! Code Companion - superficial source-code inspection over HTTP.
//!
//! Two JSON endpoints do the real work: a pattern-based analyzer (line and
//! keyword counts plus regex identifier extraction) and a rule-based
//! translator (ordered literal find/replace tables with a small regex
//! fallback). A static page submits snippets and renders the results.
//!
//! # Architecture
//!
//! - `analyze`: pattern tables, structure extraction, complexity estimate,
//!   suggestions
//! - `translate`: rule tables, ordered substitution pass, fallback rewrites
//! - `api`: axum routing, request validation, error mapping
//! - `config`: environment-driven runtime settings
//!
//! There is no parsing and no AST anywhere; both services are bounded
//! single-pass string scans over immutable process-wide tables.

pub mod analyze;
pub mod api;
pub mod config;
pub mod languages;
pub mod translate;

pub use analyze::{AnalysisResult, CodeAnalyzer};
pub use api::{create_routes, AppState};
pub use config::Config;
pub use languages::SUPPORTED_LANGUAGES;
pub use translate::{CodeTranslator, TranslationResult};

/// Force-compile the process-wide pattern and rule tables.
///
/// Call once at startup so the first request never pays compilation cost.
/// Idempotent.
pub fn init() {
    for lang in SUPPORTED_LANGUAGES {
        let _ = analyze::for_language(lang);
    }
    let _ = translate::table_for("javascript", "python");
}
