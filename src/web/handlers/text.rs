// Text tool handlers. Pure computation, no external calls.
//
// POST /api/text/stats — { "text" } → TextStats
// POST /api/text/case  — { "text", "style" } → { "text", "style" }
// POST /api/text/hash  — { "text" } → Digests (400 under 5 characters)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::text::case::{convert, CaseStyle};
use crate::text::{digest, stats as text_stats};
use crate::web::{api_error, failure_response};

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct TextRequest {
    pub text: String,
    pub style: Option<String>,
}

pub async fn stats(Json(body): Json<TextRequest>) -> Response {
    Json(text_stats::analyze(&body.text)).into_response()
}

pub async fn case(Json(body): Json<TextRequest>) -> Response {
    let Some(raw) = body.style.as_deref() else {
        return api_error(StatusCode::BAD_REQUEST, "Case style is required");
    };
    let style: CaseStyle = match raw.parse() {
        Ok(style) => style,
        Err(message) => return api_error(StatusCode::BAD_REQUEST, &message),
    };

    Json(serde_json::json!({
        "text": convert(&body.text, style),
        "style": style,
    }))
    .into_response()
}

pub async fn hash(Json(body): Json<TextRequest>) -> Response {
    match digest::generate(&body.text) {
        Ok(digests) => Json(digests).into_response(),
        Err(e) => failure_response(e.into()),
    }
}
