// Start of file: /src/response/transform.rs

/*
    * Transforms reshape an envelope into the (headers, body) pair that is
    * actually written. Exactly one transform is active per `ResponseConfig`.
*/

use axum::http::HeaderMap;
use serde_json::{Map, Value};

use crate::response::envelope::Envelope;

/// Key the default transform stores the payload under.
pub const DATA_KEY: &str = "data";

/// Key used for the envelope's excuse, when it is set.
pub const EXCUSE_KEY: &str = "programming-excuse";

/// Something that can reshape a response body before serialization.
///
/// Never called for empty envelopes. Headers returned here lose against the
/// envelope's own header overrides. A `None` body means only the status line
/// and headers are written.
pub trait Transform: Send + Sync {
    fn apply(&self, envelope: &Envelope, code: u16) -> (HeaderMap, Option<Value>);

    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

// Plain closures work as caller-supplied transforms.
impl<F> Transform for F
where
    F: Fn(&Envelope, u16) -> (HeaderMap, Option<Value>) + Send + Sync,
{
    fn apply(&self, envelope: &Envelope, code: u16) -> (HeaderMap, Option<Value>) {
        self(envelope, code)
    }
}

fn payload_of(envelope: &Envelope) -> Value {
    envelope.payload().cloned().unwrap_or(Value::Null)
}

fn insert_excuse(body: &mut Map<String, Value>, envelope: &Envelope) {
    if !envelope.auxiliary().is_empty() {
        body.insert(EXCUSE_KEY.to_owned(), Value::from(envelope.auxiliary()));
    }
}

/// `{"data": payload}`, plus `"programming-excuse"` when an excuse is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTransform;

impl Transform for DefaultTransform {
    fn apply(&self, envelope: &Envelope, _code: u16) -> (HeaderMap, Option<Value>) {
        let mut body: Map<String, Value> = Map::new();
        body.insert(DATA_KEY.to_owned(), payload_of(envelope));
        insert_excuse(&mut body, envelope);

        (HeaderMap::new(), Some(Value::Object(body)))
    }

    fn name(&self) -> &str {
        "default"
    }
}

/// Returns the payload as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

impl Transform for Passthrough {
    fn apply(&self, envelope: &Envelope, _code: u16) -> (HeaderMap, Option<Value>) {
        (HeaderMap::new(), envelope.payload().cloned())
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}

/// Wraps the payload and the status code under caller-chosen keys.
/// The excuse is ignored.
#[derive(Debug, Clone)]
pub struct MessageCode {
    pub data_field: String,
    pub code_field: String,
}

impl MessageCode {
    pub fn new(data_field: impl Into<String>, code_field: impl Into<String>) -> Self {
        Self {
            data_field: data_field.into(),
            code_field: code_field.into(),
        }
    }

    fn body(&self, envelope: &Envelope, code: u16) -> Map<String, Value> {
        let mut body: Map<String, Value> = Map::new();
        body.insert(self.data_field.clone(), payload_of(envelope));
        body.insert(self.code_field.clone(), Value::from(code));
        body
    }
}

impl Transform for MessageCode {
    fn apply(&self, envelope: &Envelope, code: u16) -> (HeaderMap, Option<Value>) {
        (HeaderMap::new(), Some(Value::Object(self.body(envelope, code))))
    }

    fn name(&self) -> &str {
        "message-code"
    }
}

/// Same as [`MessageCode`], plus `"programming-excuse"` when an excuse is set.
#[derive(Debug, Clone)]
pub struct MessageCodeExcuse(MessageCode);

impl MessageCodeExcuse {
    pub fn new(data_field: impl Into<String>, code_field: impl Into<String>) -> Self {
        Self(MessageCode::new(data_field, code_field))
    }
}

impl Transform for MessageCodeExcuse {
    fn apply(&self, envelope: &Envelope, code: u16) -> (HeaderMap, Option<Value>) {
        let mut body: Map<String, Value> = self.0.body(envelope, code);
        insert_excuse(&mut body, envelope);

        (HeaderMap::new(), Some(Value::Object(body)))
    }

    fn name(&self) -> &str {
        "message-code-excuse"
    }
}


// End of file: /src/response/transform.rs
