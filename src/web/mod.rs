// Web server — Axum-based JSON API.
//
// Every tool the CLI offers is also a POST route under /api/. Handlers are
// thin: they validate the body, call the same library code the CLI does and
// map failures to a status code. Errors are always `{ "error": message }`.
//
// The external collaborators live in AppState as trait objects, so the
// router can be exercised end to end with in-memory fakes.

use std::sync::Arc;

use anyhow::Result;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::db::KeywordCache;
use crate::error::TextError;
use crate::fetch::http::HttpContentFetcher;
use crate::fetch::traits::ContentFetcher;
use crate::keywords::density::NgramDensityExtractor;
use crate::keywords::traits::KeywordExtractor;
use crate::rate_limiter::{RateLimiter, RequestPacer};
use crate::search::google::GoogleSearchClient;
use crate::search::traits::SearchProvider;

pub mod handlers;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn KeywordCache>,
    pub search: Arc<dyn SearchProvider>,
    pub fetcher: Arc<dyn ContentFetcher>,
    pub extractor: Arc<dyn KeywordExtractor>,
    /// Shared by every plagiarism check so concurrent requests still
    /// respect one outbound rate.
    pub pacer: Arc<dyn RequestPacer>,
}

impl AppState {
    /// Build the production state: Google search, HTTP page fetches and
    /// a pacer at the configured interval.
    pub fn new(config: &Config, cache: Arc<dyn KeywordCache>) -> Result<Self> {
        let search = GoogleSearchClient::new(
            &config.search_url,
            config.search_api_key.clone(),
            config.search_cx.clone(),
        )?;

        Ok(Self {
            cache,
            search: Arc::new(search),
            fetcher: Arc::new(HttpContentFetcher::new()?),
            extractor: Arc::new(NgramDensityExtractor::default()),
            pacer: Arc::new(RateLimiter::with_interval(config.request_interval())),
        })
    }
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(
    config: Config,
    cache: Arc<dyn KeywordCache>,
    port: u16,
    bind: &str,
) -> Result<()> {
    let state = AppState::new(&config, cache)?;
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("Wordsmith API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/keywords", post(handlers::keywords::research))
        .route(
            "/api/search-snippets",
            post(handlers::plagiarism::search_snippets),
        )
        .route(
            "/api/fetch-content",
            post(handlers::plagiarism::fetch_content),
        )
        .route("/api/plagiarism", post(handlers::plagiarism::check))
        .route("/api/text/stats", post(handlers::text::stats))
        .route("/api/text/case", post(handlers::text::case))
        .route("/api/text/hash", post(handlers::text::hash));

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check — always returns 200 OK.
async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({ "status": "ok" })),
    )
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

/// Map a failed tool call to a response.
///
/// Input refusals from the text core are the caller's fault (400, or 422
/// for an over-long article). Anything else came from the search API or a
/// fetched page and is reported as a bad gateway.
pub fn failure_response(err: anyhow::Error) -> Response {
    match err.downcast_ref::<TextError>() {
        Some(e @ TextError::ArticleTooLong { .. }) => {
            api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.to_string())
        }
        Some(e) => api_error(StatusCode::BAD_REQUEST, &e.to_string()),
        None => {
            warn!(error = %err, "Upstream request failed");
            api_error(StatusCode::BAD_GATEWAY, &format!("{err:#}"))
        }
    }
}
