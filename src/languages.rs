//! The fixed list of language identifiers advertised by the API.

/// Lowercase identifiers accepted by the analyze and translate endpoints.
///
/// The list is static for the lifetime of the process. Names outside it are
/// still accepted by the endpoints and handled via fallback paths.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "javascript",
    "python",
    "java",
    "cpp",
    "csharp",
    "go",
    "rust",
    "php",
    "ruby",
    "typescript",
];
