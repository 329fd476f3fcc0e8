//! Acknowledgement returned by write operations.

use serde_json::Value;

use crate::error::Result;
use crate::response::extract_json;

/// The server's answer to a POST that passed the status check.
///
/// The body is kept as text; call [`Acknowledgement::json`] to parse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement {
    /// The HTTP status code (always 2xx or 3xx).
    pub status: u16,
    /// The raw response body.
    pub body: String,
}

impl Acknowledgement {
    /// Parse the body as JSON, classifying error markers like every other
    /// response.
    pub fn json(&self) -> Result<Value> {
        extract_json(&self.body)
    }
}
