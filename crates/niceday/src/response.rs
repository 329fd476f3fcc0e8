//! Response extraction and error classification.
//!
//! The niceday-api reports some application errors inside 200-status JSON
//! bodies, so a parsed body is always scanned for the known `message`
//! markers before it is handed back.

use serde_json::Value;
use tracing::warn;

use crate::error::{Error, Result};

/// Substring marking an authorization failure.
pub(crate) const UNAUTHORIZED_MARKER: &str = "Unauthorized error";

/// Substring marking a missing resource.
pub(crate) const NOT_FOUND_MARKER: &str = "The requested resource could not be found";

/// Parse a response body and classify error markers.
pub(crate) fn extract_json(body: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(body).map_err(Error::NonJsonResponse)?;
    check_error_markers(&value)?;
    Ok(value)
}

/// Fail if `value` carries one of the known error markers in `message`.
///
/// The unauthorized marker is checked first.
pub(crate) fn check_error_markers(value: &Value) -> Result<()> {
    let Some(message) = value.get("message").and_then(Value::as_str) else {
        return Ok(());
    };

    if message.contains(UNAUTHORIZED_MARKER) {
        warn!(server_message = message, "niceday-api reported an authorization error");
        return Err(Error::Unauthorized(describe(UNAUTHORIZED_MARKER, value)));
    }
    if message.contains(NOT_FOUND_MARKER) {
        warn!(server_message = message, "niceday-api reported a missing resource");
        return Err(Error::NotFound(describe(NOT_FOUND_MARKER, value)));
    }
    Ok(())
}

fn describe(marker: &str, value: &Value) -> String {
    let mut msg = format!("'{}' response from niceday server. ", marker);
    if let Some(details) = value.get("details").and_then(|d| d.get("body")) {
        msg.push_str("Details provided: ");
        match details {
            Value::String(s) => msg.push_str(s),
            other => msg.push_str(&other.to_string()),
        }
    }
    msg
}
