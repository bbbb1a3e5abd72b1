//! Request handlers for the JSON API.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::analyze::{AnalysisResult, CodeAnalyzer};
use crate::languages::SUPPORTED_LANGUAGES;
use crate::translate::{CodeTranslator, TranslationResult};

use super::error::ApiError;

/// Shared, immutable application state.
///
/// Both services are stateless over process-wide tables, so concurrent
/// requests never contend on anything.
#[derive(Debug, Default)]
pub struct AppState {
    pub analyzer: CodeAnalyzer,
    pub translator: CodeTranslator,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub code: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    pub code: Option<String>,
    pub from_language: Option<String>,
    pub to_language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation: TranslationResult,
}

/// Service liveness probe.
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "code-companion",
        })),
    )
}

/// `GET /api/languages`: the fixed supported-language list.
pub async fn list_languages() -> Json<Value> {
    Json(json!({ "supported": SUPPORTED_LANGUAGES }))
}

/// `POST /api/analyze`: analyze one snippet.
pub async fn analyze_code(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    // Empty strings count as missing, same as absent fields.
    let code = match payload.code {
        Some(c) if !c.is_empty() => c,
        _ => return Err(ApiError::Validation("Code is required")),
    };
    let language = payload.language.as_deref().unwrap_or("javascript");

    let analysis = state.analyzer.analyze(&code, language).map_err(|e| {
        tracing::error!(error = %e, "analysis failed");
        ApiError::Internal("Failed to analyze code")
    })?;

    Ok(Json(AnalyzeResponse { analysis }))
}

/// `POST /api/translate`: translate one snippet between two languages.
pub async fn translate_code(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<TranslateRequest>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let (code, from, to) = match (payload.code, payload.from_language, payload.to_language) {
        (Some(code), Some(from), Some(to))
            if !code.is_empty() && !from.is_empty() && !to.is_empty() =>
        {
            (code, from, to)
        }
        _ => {
            return Err(ApiError::Validation(
                "Code, fromLanguage, and toLanguage are required",
            ))
        }
    };

    let translation = state.translator.translate(&code, &from, &to).map_err(|e| {
        tracing::error!(error = %e, "translation failed");
        ApiError::Internal("Failed to translate code")
    })?;

    Ok(Json(TranslateResponse { translation }))
}
