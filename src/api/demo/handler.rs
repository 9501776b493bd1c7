// Start of file: /src/api/demo/handler.rs

// Demo handlers, one per response shape the library produces

use axum::{extract::State, response::Response, Json};
use serde_json::{json, Value};
use tracing::{info, instrument};

use crate::config::state::AppState;
use crate::response::envelope::{Envelope, Reply};
use crate::response::generic::{self, MessageResponse};

/// Payload wrapped by the active transform
#[instrument(skip(state))]
pub async fn hello_handler(State(state): State<AppState>) -> Reply {
    info!("Hello endpoint called");

    Envelope::new(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.environment.environment.as_ref(),
    }))
    .reply(200)
}

/// Status line and headers only; the transform is skipped
#[instrument]
pub async fn empty_handler() -> Reply {
    Envelope::empty().reply(204)
}

/// Generic path with the default message body
#[instrument]
pub async fn missing_handler() -> Response {
    generic::reply(404, None::<MessageResponse>)
}

/// 418 with an excuse attached
#[instrument]
pub async fn teapot_handler() -> Reply {
    Envelope::new("short and stout")
        .with_programming_excuse()
        .reply(418)
}

/// Per-response header overrides, including a custom Content-Type
#[instrument]
pub async fn headers_handler() -> Reply {
    Envelope::new(json!({ "cached": false }))
        .header("Cache-Control", "no-store")
        .header("Content-Type", "application/vnd.demo+json")
        .reply(200)
}

/// Echoes the request body back as 201
#[instrument(skip(body))]
pub async fn echo_handler(Json(body): Json<Value>) -> Reply {
    info!("Echoing request body");

    Envelope::new(body).reply(201)
}

// End of file: /src/api/demo/handler.rs
