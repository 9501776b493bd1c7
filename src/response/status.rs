// Start of file: /src/response/status.rs

/*
    * One table of (method name, code, reason) rows drives every per-status
    * convenience function, on `Envelope` and on the generic path alike.
*/

use axum::http::StatusCode;

use crate::response::envelope::Envelope;
use crate::response::error::ResponseError;
use crate::response::writer::ResponseWriter;

// Invokes `$callback!` with the full status table.
macro_rules! status_table {
    ($callback:ident) => {
        $callback! {
            // 1xx
            continue_ => 100, "Continue";
            switching_protocols => 101, "Switching Protocols";
            processing => 102, "Processing";
            early_hints => 103, "Early Hints";

            // 2xx
            ok => 200, "OK";
            created => 201, "Created";
            accepted => 202, "Accepted";
            non_authoritative_info => 203, "Non-Authoritative Information";
            no_content => 204, "No Content";
            reset_content => 205, "Reset Content";
            partial_content => 206, "Partial Content";
            multi_status => 207, "Multi-Status";
            already_reported => 208, "Already Reported";
            im_used => 226, "IM Used";

            // 3xx
            multiple_choices => 300, "Multiple Choices";
            moved_permanently => 301, "Moved Permanently";
            found => 302, "Found";
            see_other => 303, "See Other";
            not_modified => 304, "Not Modified";
            use_proxy => 305, "Use Proxy";
            temporary_redirect => 307, "Temporary Redirect";
            permanent_redirect => 308, "Permanent Redirect";

            // 4xx
            bad_request => 400, "Bad Request";
            unauthorized => 401, "Unauthorized";
            payment_required => 402, "Payment Required";
            forbidden => 403, "Forbidden";
            not_found => 404, "Not Found";
            method_not_allowed => 405, "Method Not Allowed";
            not_acceptable => 406, "Not Acceptable";
            proxy_auth_required => 407, "Proxy Authentication Required";
            request_timeout => 408, "Request Timeout";
            conflict => 409, "Conflict";
            gone => 410, "Gone";
            length_required => 411, "Length Required";
            precondition_failed => 412, "Precondition Failed";
            request_entity_too_large => 413, "Payload Too Large";
            request_uri_too_long => 414, "URI Too Long";
            unsupported_media_type => 415, "Unsupported Media Type";
            requested_range_not_satisfiable => 416, "Range Not Satisfiable";
            expectation_failed => 417, "Expectation Failed";
            teapot => 418, "I'm a teapot";
            misdirected_request => 421, "Misdirected Request";
            unprocessable_entity => 422, "Unprocessable Entity";
            locked => 423, "Locked";
            failed_dependency => 424, "Failed Dependency";
            too_early => 425, "Too Early";
            upgrade_required => 426, "Upgrade Required";
            precondition_required => 428, "Precondition Required";
            too_many_requests => 429, "Too Many Requests";
            request_header_fields_too_large => 431, "Request Header Fields Too Large";
            unavailable_for_legal_reasons => 451, "Unavailable For Legal Reasons";

            // 5xx
            internal_server_error => 500, "Internal Server Error";
            not_implemented => 501, "Not Implemented";
            bad_gateway => 502, "Bad Gateway";
            service_unavailable => 503, "Service Unavailable";
            gateway_timeout => 504, "Gateway Timeout";
            http_version_not_supported => 505, "HTTP Version Not Supported";
            variant_also_negotiates => 506, "Variant Also Negotiates";
            insufficient_storage => 507, "Insufficient Storage";
            loop_detected => 508, "Loop Detected";
            not_extended => 510, "Not Extended";
            network_authentication_required => 511, "Network Authentication Required";
        }
    };
}

pub(crate) use status_table;

macro_rules! status_codes {
    ($($name:ident => $code:literal, $reason:literal;)*) => {
        /// Every status that has a convenience function: (name, code, reason).
        pub const STATUS_CODES: &[(&str, u16, &str)] = &[
            $((stringify!($name), $code, $reason),)*
        ];
    };
}

status_table!(status_codes);

macro_rules! envelope_methods {
    ($($name:ident => $code:literal, $reason:literal;)*) => {
        impl Envelope {
            $(
                #[doc = concat!("Sends the envelope with HTTP status ", stringify!($code), " (", $reason, ").")]
                pub fn $name<W: ResponseWriter>(self, writer: &mut W) -> Result<(), ResponseError> {
                    self.respond(writer, $code)
                }
            )*
        }

        #[cfg(test)]
        type EnvelopeEmitter = fn(Envelope, &mut crate::response::writer::Recorder) -> Result<(), ResponseError>;

        #[cfg(test)]
        const ENVELOPE_EMITTERS: &[(u16, EnvelopeEmitter)] = &[
            $(($code, Envelope::$name::<crate::response::writer::Recorder>),)*
        ];
    };
}

status_table!(envelope_methods);

/// Standard reason phrase for `code`, or "" when it has none.
pub fn reason_phrase(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .or_else(|| {
            STATUS_CODES
                .iter()
                .find(|(_, known, _)| *known == code)
                .map(|(_, _, reason)| *reason)
        })
        .unwrap_or("")
}


// End of file: /src/response/status.rs
