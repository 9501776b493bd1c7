// Start of file: /src/response/error.rs

/*
    * Errors raised while building or emitting a JSON response.
    * A failed emit writes nothing to the writer.
*/

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseError {
    // The payload (or transformed body) cannot be represented as JSON.
    #[error("failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid header name `{name}`")]
    InvalidHeaderName { name: String },

    #[error("invalid value for header `{name}`")]
    InvalidHeaderValue { name: String },
}

// End of file: /src/response/error.rs
