//! HTTP helper functions for the widget core
//!
//! Response handling lives here instead of inside the update handlers so the
//! transport's success/failure classification stays in one place.

use crux_http::{HttpError, Response};

/// Base URL for backend endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The shell strips this prefix before sending the request, so it is issued
/// relative to the dashboard origin.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use alarm_widget_core::http_helpers::build_url;
/// let url = build_url("/api/custom-alarm-node/abc/config");
/// assert_eq!(url, "https://relative/api/custom-alarm-node/abc/config");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Builds the failure text for a non-2xx response, keeping the server's body.
pub fn extract_error_message(
    action: &str,
    code: impl std::fmt::Display,
    body: Option<Vec<u8>>,
) -> String {
    match body {
        Some(body) if !body.is_empty() => match String::from_utf8(body) {
            Ok(msg) => format!("{action} failed: HTTP {code} ({msg})"),
            Err(e) => format!("{action} failed: HTTP {code} (Invalid UTF-8: {e})"),
        },
        Some(_) => format!("{action} failed: HTTP {code} (Empty body)"),
        None => format!("{action} failed: HTTP {code} (No body)"),
    }
}

/// Parse a successful response body as an arbitrary JSON value.
///
/// The body is not examined beyond parsing. A response without a body
/// yields `Value::Null`.
pub fn parse_json_value(
    action: &str,
    response: &mut Response<Vec<u8>>,
) -> Result<serde_json::Value, String> {
    match response.take_body() {
        Some(body) if !body.is_empty() => {
            serde_json::from_slice(&body).map_err(|e| format!("{action}: JSON parse error: {e}"))
        }
        _ => Ok(serde_json::Value::Null),
    }
}

/// Process HTTP response result and parse JSON
///
/// `crux_http` reports non-2xx responses as `HttpError::Http`; those and
/// transport errors both end up as `Err`, there is no further classification.
pub fn process_json_response(
    action: &str,
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<serde_json::Value, String> {
    match result {
        Ok(mut response) => parse_json_value(action, &mut response),
        Err(HttpError::Http { code, body, .. }) => Err(extract_error_message(action, code, body)),
        Err(e) => Err(format!("{action} failed: {e}")),
    }
}
