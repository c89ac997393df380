//! Chat message endpoint.

use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderMap, header};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::models::{MessageRequest, MessageResponse};

/// `POST /message` — echoes the message back as the bot's reply.
///
/// The body is taken raw and parsed here so that a wrong content type or
/// malformed JSON surfaces as an internal error instead of an extractor
/// rejection.
pub async fn message_handler(
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<Json<MessageResponse>> {
    require_json(&headers)?;
    let request = parse_request(&body?)?;
    let response = chatback_core::reply::respond_to(request.text().as_deref())?;
    debug!(len = response.len(), "replied to message");
    Ok(Json(MessageResponse { response }))
}

/// Accepts `application/json` and `application/*+json`, parameters ignored.
fn require_json(headers: &HeaderMap) -> AppResult<()> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let is_json = mime == "application/json"
        || (mime.starts_with("application/") && mime.ends_with("+json"));
    if is_json {
        Ok(())
    } else {
        Err(AppError::Internal(format!(
            "unsupported content type: {content_type:?}"
        )))
    }
}

/// The body must be a JSON object; arrays and scalars are rejected.
fn parse_request(body: &[u8]) -> Result<MessageRequest, serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_slice(body)?;
    serde_json::from_value(Value::Object(object))
}
