// Start of file: /src/response/emit.rs

/*
    * Header precedence, Content-Type resolution and JSON serialization,
    * shared by the envelope path and the generic path.
*/

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};
use tracing::debug;

use crate::config::response_config::ResponseConfig;
use crate::response::envelope::Envelope;
use crate::response::error::ResponseError;
use crate::response::transform::Transform;
use crate::response::writer::ResponseWriter;

/// When the default Content-Type is added to a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTypeRule {
    /// Added whenever no Content-Type was chosen, even if the default is
    /// empty. Used by the envelope path.
    Always,
    /// Added only when no Content-Type was chosen and the default is not
    /// empty. Used by the generic path.
    NonEmpty,
}

/// Applies the envelope's overrides on top of the transform's headers.
/// Overrides win on equal names; everything else is kept from both sides.
pub fn merge_headers(
    mut transformed: HeaderMap,
    overrides: &HashMap<String, String>,
) -> Result<HeaderMap, ResponseError> {
    for (name, value) in overrides {
        let header_name: HeaderName =
            HeaderName::try_from(name.as_str()).map_err(|_| ResponseError::InvalidHeaderName {
                name: name.clone(),
            })?;
        let header_value: HeaderValue =
            HeaderValue::try_from(value.as_str()).map_err(|_| ResponseError::InvalidHeaderValue {
                name: name.clone(),
            })?;

        transformed.insert(header_name, header_value);
    }

    Ok(transformed)
}

/// Inserts `default` as Content-Type unless one is already present.
pub fn resolve_content_type(
    headers: &mut HeaderMap,
    default: &str,
    rule: ContentTypeRule,
) -> Result<(), ResponseError> {
    if headers.contains_key(CONTENT_TYPE) {
        return Ok(());
    }
    if rule == ContentTypeRule::NonEmpty && default.is_empty() {
        return Ok(());
    }

    let value: HeaderValue =
        HeaderValue::try_from(default).map_err(|_| ResponseError::InvalidHeaderValue {
            name: CONTENT_TYPE.to_string(),
        })?;
    headers.insert(CONTENT_TYPE, value);
    Ok(())
}

/// Compact JSON, or one tab per nesting level when `indent` is set.
pub fn serialize<T: Serialize + ?Sized>(value: &T, indent: bool) -> Result<String, ResponseError> {
    let mut writer: Vec<u8> = Vec::new();

    if indent {
        let formatter: PrettyFormatter<'_> = PrettyFormatter::with_indent(b"\t");
        let mut ser: Serializer<&mut Vec<u8>, PrettyFormatter<'_>> =
            Serializer::with_formatter(&mut writer, formatter);
        value.serialize(&mut ser)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }

    // serde_json only ever produces UTF-8
    Ok(String::from_utf8_lossy(&writer).into_owned())
}

/// Writes headers, then the status line, then the body (plus one trailing
/// newline) if there is one.
pub fn write_response<W: ResponseWriter>(
    writer: &mut W,
    code: u16,
    headers: HeaderMap,
    body: Option<String>,
) {
    // Replaces same-named headers already on the writer
    writer.headers_mut().extend(headers);

    writer.write_status(code);

    if let Some(mut body) = body {
        body.push('\n');
        writer.write_body(Bytes::from(body));
    }
}

/// Runs the envelope pipeline: transform, merge, resolve, serialize, write.
///
/// Every fallible step happens before the writer is touched, so an error
/// leaves it untouched.
pub fn emit_envelope<W: ResponseWriter>(
    config: &ResponseConfig,
    envelope: &Envelope,
    writer: &mut W,
    code: u16,
) -> Result<(), ResponseError> {
    let (transformed, body): (HeaderMap, Option<Value>) = if envelope.is_empty() {
        (HeaderMap::new(), None)
    } else {
        let transformer: Arc<dyn Transform> = config.transformer();
        debug!("Applying '{}' transform for status {}", transformer.name(), code);
        transformer.apply(envelope, code)
    };

    let mut headers: HeaderMap = merge_headers(transformed, envelope.headers())?;
    resolve_content_type(&mut headers, &config.default_content_type(), ContentTypeRule::Always)?;

    let serialized: Option<String> = body
        .as_ref()
        .map(|value| serialize(value, config.indent()))
        .transpose()?;

    write_response(writer, code, headers, serialized);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::transform::{MessageCode, Passthrough};
    use crate::response::writer::{Recorder, WriteEvent};
    use serde_json::json;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn decode(recorder: &Recorder) -> Value {
        serde_json::from_str(recorder.body_str().unwrap()).unwrap()
    }

    #[test]
    fn default_transform_wraps_payloads() {
        let config: ResponseConfig = ResponseConfig::new();

        for (payload, expected) in [
            (json!(1.0), json!({ "data": 1.0 })),
            (json!(true), json!({ "data": true })),
            (json!({ "key": 42.0 }), json!({ "data": { "key": 42.0 } })),
        ] {
            let mut recorder: Recorder = Recorder::new();
            Envelope::new(payload).respond_with(&config, &mut recorder, 200).unwrap();

            assert_eq!(recorder.code, Some(200));
            assert_eq!(decode(&recorder), expected);
        }
    }

    #[test]
    fn body_ends_with_single_newline() {
        let config: ResponseConfig = ResponseConfig::new();
        let mut recorder: Recorder = Recorder::new();

        Envelope::new(1).respond_with(&config, &mut recorder, 200).unwrap();

        assert_eq!(recorder.body_str(), Some("{\"data\":1}\n"));
    }

    #[test]
    fn empty_envelope_skips_transform_and_body() {
        let config: ResponseConfig = ResponseConfig::new();
        let called: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
        let flag: Arc<AtomicBool> = Arc::clone(&called);
        config.set_transformer(move |_: &Envelope, _: u16| {
            flag.store(true, Ordering::SeqCst);
            (HeaderMap::new(), None::<Value>)
        });

        let mut recorder: Recorder = Recorder::new();
        Envelope::empty().respond_with(&config, &mut recorder, 204).unwrap();

        assert!(!called.load(Ordering::SeqCst));
        assert_eq!(recorder.code, Some(204));
        assert!(recorder.body.is_none());
        assert_eq!(recorder.events, vec![WriteEvent::Status]);
    }

    #[test]
    fn custom_transform_is_called_and_sets_headers() {
        let config: ResponseConfig = ResponseConfig::new();
        config.set_transformer(|_: &Envelope, _: u16| {
            let mut headers: HeaderMap = HeaderMap::new();
            headers.insert("x-my-custom-header", HeaderValue::from_static("random header value"));
            (headers, Some(json!({ "value": "do not care what I got" })))
        });

        let mut recorder: Recorder = Recorder::new();
        Envelope::new("does not matter").respond_with(&config, &mut recorder, 200).unwrap();

        assert_eq!(recorder.headers["X-My-Custom-Header"], "random header value");
        assert_eq!(decode(&recorder), json!({ "value": "do not care what I got" }));
        assert_eq!(recorder.events, vec![WriteEvent::Status, WriteEvent::Body]);
    }

    #[test]
    fn transform_without_body_writes_status_only() {
        let config: ResponseConfig = ResponseConfig::new();
        config.set_transformer(|_: &Envelope, _: u16| {
            let mut headers: HeaderMap = HeaderMap::new();
            headers.insert("location", HeaderValue::from_static("/elsewhere"));
            (headers, None::<Value>)
        });

        let mut recorder: Recorder = Recorder::new();
        Envelope::new(1).respond_with(&config, &mut recorder, 303).unwrap();

        assert_eq!(recorder.code, Some(303));
        assert_eq!(recorder.headers["location"], "/elsewhere");
        assert!(recorder.body.is_none());
        assert_eq!(recorder.events, vec![WriteEvent::Status]);
    }

    #[test]
    fn case_variant_overrides_keep_the_last_value() {
        let config: ResponseConfig = ResponseConfig::new();

        for _ in 0..16 {
            let mut recorder: Recorder = Recorder::new();
            Envelope::new(1)
                .header("X-Custom", "first")
                .header("x-custom", "second")
                .header("X-CUSTOM", "third")
                .respond_with(&config, &mut recorder, 200)
                .unwrap();

            assert_eq!(recorder.headers.get_all("x-custom").iter().count(), 1);
            assert_eq!(recorder.headers["x-custom"], "third");
        }
    }

    #[test]
    fn overrides_win_and_headers_are_union_merged() {
        let mut transformed: HeaderMap = HeaderMap::new();
        transformed.insert("x-shared", HeaderValue::from_static("transform"));
        transformed.insert("x-transform-only", HeaderValue::from_static("t"));

        let overrides: HashMap<String, String> = HashMap::from([
            ("X-Shared".to_owned(), "override".to_owned()),
            ("X-Override-Only".to_owned(), "o".to_owned()),
        ]);

        let merged: HeaderMap = merge_headers(transformed, &overrides).unwrap();

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["x-shared"], "override");
        assert_eq!(merged["x-transform-only"], "t");
        assert_eq!(merged["x-override-only"], "o");
    }

    #[test]
    fn invalid_override_name_aborts_without_writing() {
        let config: ResponseConfig = ResponseConfig::new();
        let mut recorder: Recorder = Recorder::new();

        let result: Result<(), ResponseError> = Envelope::new(1)
            .header("bad header", "x")
            .respond_with(&config, &mut recorder, 200);

        assert!(matches!(result, Err(ResponseError::InvalidHeaderName { .. })));
        assert!(recorder.events.is_empty());
        assert!(recorder.headers.is_empty());
    }

    #[test]
    fn explicit_content_type_is_kept() {
        let config: ResponseConfig = ResponseConfig::new();
        let mut recorder: Recorder = Recorder::new();

        Envelope::new(1)
            .header("Content-Type", "application/problem+json")
            .respond_with(&config, &mut recorder, 400)
            .unwrap();

        assert_eq!(recorder.headers[CONTENT_TYPE], "application/problem+json");
    }

    #[test]
    fn transform_content_type_is_kept() {
        let config: ResponseConfig = ResponseConfig::new();
        config.set_transformer(|envelope: &Envelope, _: u16| {
            let mut headers: HeaderMap = HeaderMap::new();
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/hal+json"));
            (headers, envelope.payload().cloned())
        });

        let mut recorder: Recorder = Recorder::new();
        Envelope::new(1).respond_with(&config, &mut recorder, 200).unwrap();

        assert_eq!(recorder.headers[CONTENT_TYPE], "application/hal+json");
    }

    #[test]
    fn envelope_path_always_adds_default_content_type() {
        let config: ResponseConfig = ResponseConfig::new();
        let mut recorder: Recorder = Recorder::new();
        Envelope::new(1).respond_with(&config, &mut recorder, 200).unwrap();
        assert_eq!(recorder.headers[CONTENT_TYPE], "application/json; charset=utf-8");

        config.set_default_content_type("");
        let mut recorder: Recorder = Recorder::new();
        Envelope::new(1).respond_with(&config, &mut recorder, 200).unwrap();
        assert_eq!(recorder.headers[CONTENT_TYPE], "");
    }

    #[test]
    fn non_empty_rule_skips_empty_default() {
        let mut headers: HeaderMap = HeaderMap::new();
        resolve_content_type(&mut headers, "", ContentTypeRule::NonEmpty).unwrap();
        assert!(headers.is_empty());

        resolve_content_type(&mut headers, "text/plain", ContentTypeRule::NonEmpty).unwrap();
        assert_eq!(headers[CONTENT_TYPE], "text/plain");
    }

    #[test]
    fn indent_uses_tabs_and_keeps_the_value() {
        let value: Value = json!({ "data": { "list": [1, 2], "ok": true } });

        let compact: String = serialize(&value, false).unwrap();
        let indented: String = serialize(&value, true).unwrap();

        assert!(!compact.contains('\t'));
        assert!(indented.contains("\n\t\"data\""));
        assert!(indented.contains("\n\t\t\"list\""));
        assert_eq!(
            serde_json::from_str::<Value>(&compact).unwrap(),
            serde_json::from_str::<Value>(&indented).unwrap()
        );
    }

    #[test]
    fn indent_flag_is_honoured_on_emit() {
        let config: ResponseConfig = ResponseConfig::new();
        config.set_indent(true);

        let mut recorder: Recorder = Recorder::new();
        Envelope::new(1).respond_with(&config, &mut recorder, 200).unwrap();

        assert_eq!(recorder.body_str(), Some("{\n\t\"data\": 1\n}\n"));
    }

    #[test]
    fn passthrough_and_message_code_on_emit() {
        let config: ResponseConfig = ResponseConfig::new();
        config.set_transformer(Passthrough);

        let mut recorder: Recorder = Recorder::new();
        Envelope::new(json!([1, 2, 3])).respond_with(&config, &mut recorder, 200).unwrap();
        assert_eq!(decode(&recorder), json!([1, 2, 3]));

        config.set_transformer(MessageCode::new("data", "code"));
        let mut recorder: Recorder = Recorder::new();
        Envelope::new("gone").respond_with(&config, &mut recorder, 410).unwrap();
        assert_eq!(decode(&recorder), json!({ "data": "gone", "code": 410 }));
    }

    #[test]
    fn unknown_status_codes_pass_through() {
        let config: ResponseConfig = ResponseConfig::new();
        let mut recorder: Recorder = Recorder::new();

        Envelope::new(1).respond_with(&config, &mut recorder, 299).unwrap();
        assert_eq!(recorder.code, Some(299));
    }
}

// End of file: /src/response/emit.rs
