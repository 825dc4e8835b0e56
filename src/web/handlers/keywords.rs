// POST /api/keywords — keyword research for a search term.
//
// Body: { "searchTerm": "..." }. Responds { "success": true, "data": outcome }
// where outcome is a ResearchOutcome; cached results carry cached = true.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::keywords::research::KeywordResearch;
use crate::web::{api_error, failure_response, AppState};

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct KeywordsRequest {
    pub search_term: Option<String>,
    /// Skip the cache read
    pub refresh: bool,
}

pub async fn research(State(state): State<AppState>, Json(body): Json<KeywordsRequest>) -> Response {
    let term = body.search_term.unwrap_or_default();
    if term.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Search term is required");
    }

    let research = KeywordResearch::new(
        state.search.as_ref(),
        state.extractor.as_ref(),
        Some(state.cache.as_ref()),
    );

    match research.research(&term, body.refresh).await {
        Ok(outcome) => Json(serde_json::json!({
            "success": true,
            "data": outcome,
        }))
        .into_response(),
        Err(e) => failure_response(e),
    }
}
