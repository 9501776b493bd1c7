// Start of file: /src/response/envelope.rs

/*
    * The per-response `Envelope`: payload, explicit header overrides and an
    * optional excuse (auxiliary message) consumed by the active transform.
*/

use std::collections::HashMap;

use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::config::response_config::ResponseConfig;
use crate::response::emit::emit_envelope;
use crate::response::error::ResponseError;
use crate::response::excuses::random_excuse;
use crate::response::writer::{Recorder, ResponseWriter};

/// A response body waiting to be transformed and written.
///
/// Builder methods take `self` by value, so cloning an envelope and then
/// adding a header leaves the original untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    payload: Option<Value>,
    headers: HashMap<String, String>,
    excuse: String,
}

impl Envelope {
    pub fn new(payload: impl Into<Value>) -> Self {
        Self {
            payload: Some(payload.into()),
            ..Self::default()
        }
    }

    /// Builds an envelope from any serde value.
    ///
    /// Fails for values JSON cannot represent, such as maps keyed by
    /// non-string types.
    pub fn try_new<T: Serialize + ?Sized>(payload: &T) -> Result<Self, ResponseError> {
        Ok(Self::new(serde_json::to_value(payload)?))
    }

    /// An envelope without a body. The transform is skipped and only the
    /// status line and headers are written, e.g. for 204 responses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a header override. Names are case-insensitive and stored
    /// lowercased; setting the same name again replaces the earlier value.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut name: String = name.into();
        name.make_ascii_lowercase();
        self.headers.insert(name, value.into());
        self
    }

    /// Sets the excuse. An empty string means "unset".
    pub fn excuse(mut self, excuse: impl Into<String>) -> Self {
        self.excuse = excuse.into();
        self
    }

    /// Attaches a random programming excuse. Only transforms that read the
    /// excuse (the default one, `MessageCodeExcuse`) will show it.
    pub fn with_programming_excuse(self) -> Self {
        self.excuse(random_excuse())
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn auxiliary(&self) -> &str {
        &self.excuse
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_none()
    }

    /// Emits the envelope with the process-wide configuration.
    pub fn respond<W: ResponseWriter>(self, writer: &mut W, code: u16) -> Result<(), ResponseError> {
        self.respond_with(ResponseConfig::global(), writer, code)
    }

    /// Emits the envelope with an explicit configuration.
    pub fn respond_with<W: ResponseWriter>(
        self,
        config: &ResponseConfig,
        writer: &mut W,
        code: u16,
    ) -> Result<(), ResponseError> {
        emit_envelope(config, &self, writer, code)
    }

    /// Wraps the envelope so an axum handler can return it directly.
    pub fn reply(self, code: u16) -> Reply {
        Reply { envelope: self, code }
    }
}

/// An envelope paired with its status code, rendered with the global
/// configuration when axum asks for the response.
#[derive(Debug, Clone)]
pub struct Reply {
    envelope: Envelope,
    code: u16,
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let mut recorder: Recorder = Recorder::new();

        match self.envelope.respond(&mut recorder, self.code) {
            Ok(()) => recorder.into_response(),
            Err(err) => {
                tracing::error!("Aborted JSON response with status {}: {err}", self.code);
                Recorder::aborted().into_response()
            }
        }
    }
}


// End of file: /src/response/envelope.rs
