// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::Response,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use tracing::warn;

use crate::response::generic::{self, MessageResponse};

/// Maps middleware errors to generic JSON message responses
pub async fn handle_global_error(err: BoxError) -> Response {
    let status: StatusCode = classify(&err);
    warn!("Request failed in middleware with {}: {}", status, err);

    // 413/408 keep the standard reason, anything else explains itself
    let message: Option<MessageResponse> = match status {
        StatusCode::INTERNAL_SERVER_ERROR => {
            Some(MessageResponse::new(format!("Unhandled internal error: {err}")))
        }
        _ => None,
    };

    generic::reply(status.as_u16(), message)
}

fn classify(err: &BoxError) -> StatusCode {
    // 413 if the body was too large
    if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(&**err).is_some() {
        return StatusCode::PAYLOAD_TOO_LARGE;
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    // Otherwise, 500
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
