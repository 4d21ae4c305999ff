use actix_web::{error::JsonPayloadError, HttpRequest, HttpResponse};

use crate::core::{AppError, Result};

/// Maps JSON extractor failures onto the standard error body.
///
/// Only bodies that are not JSON objects land here; field-level problems are
/// absorbed by lenient coercion.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::warn!(path = %req.path(), error = %err, "Rejected request body");

    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            format!("Request body exceeds {} bytes", limit)
        }
        JsonPayloadError::Deserialize(e) => format!("Request body must be a JSON object: {}", e),
        other => other.to_string(),
    };

    AppError::validation(message).into()
}

/// Fallback for unknown routes
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse> {
    Err(AppError::not_found(format!("{} {}", req.method(), req.path())))
}
