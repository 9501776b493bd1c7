// Start of file: /src/response/writer.rs

/*
    * The outbound side of the library: a handle that receives header
    * writes, exactly one status line and at most one body, in that order.
    * `Recorder` buffers those calls and hands the result to axum.
*/

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Response, StatusCode},
    response::IntoResponse,
};
use tracing::error;

pub trait ResponseWriter {
    /// Headers that will be sent with the status line.
    fn headers_mut(&mut self) -> &mut HeaderMap;

    fn write_status(&mut self, code: u16);

    fn write_body(&mut self, body: Bytes);
}

/// Order in which a writer was driven, kept for inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteEvent {
    Status,
    Body,
}

/// In-memory `ResponseWriter` that can be turned into an axum response.
#[derive(Debug, Default)]
pub struct Recorder {
    pub code: Option<u16>,
    pub headers: HeaderMap,
    pub body: Option<Bytes>,
    pub events: Vec<WriteEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stand-in for an emit that failed before anything was written.
    pub fn aborted() -> Self {
        Self {
            code: Some(StatusCode::INTERNAL_SERVER_ERROR.as_u16()),
            ..Self::default()
        }
    }

    pub fn body_str(&self) -> Option<&str> {
        self.body
            .as_ref()
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    fn status(&self) -> StatusCode {
        match self.code {
            Some(code) => StatusCode::from_u16(code).unwrap_or_else(|_| {
                error!("Status code {code} cannot be sent over HTTP, using 500 instead");
                StatusCode::INTERNAL_SERVER_ERROR
            }),
            // No status written means 200
            None => StatusCode::OK,
        }
    }
}

impl ResponseWriter for Recorder {
    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_status(&mut self, code: u16) {
        self.code = Some(code);
        self.events.push(WriteEvent::Status);
    }

    fn write_body(&mut self, body: Bytes) {
        self.body = Some(body);
        self.events.push(WriteEvent::Body);
    }
}

impl IntoResponse for Recorder {
    fn into_response(self) -> axum::response::Response {
        let status: StatusCode = self.status();
        let body: Body = match self.body {
            Some(bytes) => Body::from(bytes),
            None => Body::empty(),
        };

        let mut response: Response<Body> = Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = self.headers;
        response
    }
}


// End of file: /src/response/writer.rs
