// Start of file: /src/api/demo/routes.rs

use axum::{routing::{get, post}, Router};

use crate::api::demo::handler::{
    echo_handler, empty_handler, headers_handler, hello_handler, missing_handler, teapot_handler,
};
use crate::config::state::AppState;

// Build a Router with all demo endpoints
pub fn demo_routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_handler))
        .route("/empty", get(empty_handler))
        .route("/missing", get(missing_handler))
        .route("/teapot", get(teapot_handler))
        .route("/headers", get(headers_handler))
        .route("/echo", post(echo_handler))
}

// End of file: /src/api/demo/routes.rs
