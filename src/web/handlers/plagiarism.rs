// Plagiarism handlers.
//
// POST /api/plagiarism       — full check of { "article" }, returns a PlagiarismReport
// POST /api/search-snippets  — one raw search for { "snippet" }
// POST /api/fetch-content    — body text of { "url" }
//
// The two single-step routes let a client drive the pipeline itself and
// render progress as it goes. They go through the same pacer as full checks.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::plagiarism::checker::{CheckerSettings, PlagiarismChecker};
use crate::web::{api_error, failure_response, AppState};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct CheckRequest {
    pub article: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct SnippetRequest {
    pub snippet: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct FetchRequest {
    pub url: Option<String>,
}

/// POST /api/plagiarism — split, search, fetch and score an article.
pub async fn check(State(state): State<AppState>, Json(body): Json<CheckRequest>) -> Response {
    let article = body.article.unwrap_or_default();

    let checker = PlagiarismChecker::new(
        state.search.as_ref(),
        state.fetcher.as_ref(),
        state.pacer.as_ref(),
        CheckerSettings::default(),
    );

    match checker.check(&article).await {
        Ok(report) => Json(report).into_response(),
        Err(e) => failure_response(e),
    }
}

/// POST /api/search-snippets — the search response for one snippet.
pub async fn search_snippets(
    State(state): State<AppState>,
    Json(body): Json<SnippetRequest>,
) -> Response {
    let snippet = body.snippet.unwrap_or_default();
    if snippet.trim().is_empty() {
        return api_error(StatusCode::BAD_REQUEST, "Snippet is required");
    }

    state.pacer.acquire().await;
    match state.search.search(snippet.trim()).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => failure_response(e),
    }
}

/// POST /api/fetch-content — `{ "content": text }` for a page.
pub async fn fetch_content(
    State(state): State<AppState>,
    Json(body): Json<FetchRequest>,
) -> Response {
    let url = body.url.unwrap_or_default();
    let url = url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return api_error(StatusCode::BAD_REQUEST, "An http(s) URL is required");
    }

    state.pacer.acquire().await;
    match state.fetcher.fetch_text(url).await {
        Ok(Some(content)) => Json(serde_json::json!({ "content": content })).into_response(),
        Ok(None) => api_error(StatusCode::BAD_GATEWAY, "Failed to fetch"),
        Err(e) => failure_response(e),
    }
}
