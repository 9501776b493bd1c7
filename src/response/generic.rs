// Start of file: /src/response/generic.rs

/*
    * The generic emit path: no transform and no header overrides. The value
    * is serialized as is, falling back to a `MessageResponse` carrying the
    * status code and its reason phrase.
*/

use std::any::Any;

use axum::{
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::config::response_config::ResponseConfig;
use crate::response::emit::{resolve_content_type, serialize, write_response, ContentTypeRule};
use crate::response::error::ResponseError;
use crate::response::status::{reason_phrase, status_table};
use crate::response::writer::{Recorder, ResponseWriter};

/// Minimal `{"code": .., "message": ..}` body. Zero/empty fields are left out
/// of the JSON and filled from the status code when sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

fn is_zero(code: &u16) -> bool {
    *code == 0
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: 0,
            message: message.into(),
        }
    }

    fn fill_defaults(&mut self, code: u16) {
        if self.code == 0 {
            self.code = code;
        }
        if self.message.is_empty() {
            self.message = reason_phrase(code).to_owned();
        }
    }
}

/// Writes `response` with the process-wide configuration.
pub fn respond<W, T>(writer: &mut W, code: u16, response: Option<T>) -> Result<(), ResponseError>
where
    W: ResponseWriter,
    T: Serialize + 'static,
{
    respond_with(ResponseConfig::global(), writer, code, response)
}

/// Writes `response`, or a default `MessageResponse` when it is `None`.
///
/// The Content-Type header is only set when the writer has none yet and the
/// configured default is not empty. The active transform is never used.
///
/// Only a `MessageResponse` passed by value gets its empty fields filled in.
/// `Box<MessageResponse>`, references and other wrappers are written as is.
pub fn respond_with<W, T>(
    config: &ResponseConfig,
    writer: &mut W,
    code: u16,
    response: Option<T>,
) -> Result<(), ResponseError>
where
    W: ResponseWriter,
    T: Serialize + 'static,
{
    let indent: bool = config.indent();

    let body: String = match response {
        None => {
            let mut message: MessageResponse = MessageResponse::default();
            message.fill_defaults(code);
            serialize(&message, indent)?
        }
        Some(mut value) => {
            if let Some(message) = (&mut value as &mut dyn Any).downcast_mut::<MessageResponse>() {
                message.fill_defaults(code);
            }
            serialize(&value, indent)?
        }
    };

    resolve_content_type(
        writer.headers_mut(),
        &config.default_content_type(),
        ContentTypeRule::NonEmpty,
    )?;

    debug!("Writing generic JSON response with status {}", code);
    write_response(writer, code, HeaderMap::new(), Some(body));
    Ok(())
}

/// Builds an axum response through the generic path.
pub fn reply<T: Serialize + 'static>(code: u16, response: Option<T>) -> Response {
    let mut recorder: Recorder = Recorder::new();

    match respond(&mut recorder, code, response) {
        Ok(()) => recorder.into_response(),
        Err(err) => {
            error!("Aborted generic JSON response with status {code}: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

macro_rules! generic_functions {
    ($($name:ident => $code:literal, $reason:literal;)*) => {
        $(
            #[doc = concat!("Sends `response` with HTTP status ", stringify!($code), " (", $reason, ").")]
            pub fn $name<W, T>(writer: &mut W, response: Option<T>) -> Result<(), ResponseError>
            where
                W: ResponseWriter,
                T: Serialize + 'static,
            {
                respond(writer, $code, response)
            }
        )*

        #[cfg(test)]
        type GenericEmitter = fn(&mut Recorder, Option<MessageResponse>) -> Result<(), ResponseError>;

        #[cfg(test)]
        const GENERIC_EMITTERS: &[(u16, GenericEmitter)] = &[
            $(($code, $name::<Recorder, MessageResponse>),)*
        ];
    };
}

status_table!(generic_functions);


// End of file: /src/response/generic.rs
