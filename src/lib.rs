// Library root: JSON response helpers for axum plus the demo server pieces

pub mod api;
pub mod config;
pub mod core;
pub mod response;
pub mod utils;

pub use config::response_config::{
    reset_transformer, set_default_content_type, set_indent, set_transformer, ResponseConfig,
    DEFAULT_CONTENT_TYPE,
};
pub use response::envelope::{Envelope, Reply};
pub use response::error::ResponseError;
pub use response::generic;
pub use response::generic::MessageResponse;
pub use response::status::{reason_phrase, STATUS_CODES};
pub use response::transform::{
    DefaultTransform, MessageCode, MessageCodeExcuse, Passthrough, Transform, DATA_KEY, EXCUSE_KEY,
};
pub use response::writer::{Recorder, ResponseWriter, WriteEvent};
