//! Error types for the niceday crate.
//!
//! Every failure surfaces as a distinct [`Error`] variant; nothing is retried
//! or swallowed inside the client.
//!
//! # Error Handling
//!
//! The kinds you will most often want to tell apart:
//!
//! - [`Error::Transport`]: the server answered with a 4xx/5xx status
//! - [`Error::NonJsonResponse`]: the body could not be parsed as JSON
//! - [`Error::Unauthorized`] / [`Error::NotFound`]: the server reported an
//!   application error inside an otherwise successful JSON body
//! - [`Error::MalformedResponse`]: the JSON is fine but an expected key is missing
//!
//! # Example
//!
//! ```no_run
//! use niceday::{Error, NicedayClient};
//!
//! # async fn example() {
//! let client = NicedayClient::new();
//!
//! match client.profiles().get(38527).await {
//!     Ok(profile) => println!("Hello {:?}", profile.first_name()),
//!     Err(Error::ConnectionRefused) => {
//!         eprintln!("Is the niceday-api running?");
//!     }
//!     Err(Error::MalformedResponse(msg)) => {
//!         eprintln!("Upstream schema changed: {}", msg);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for niceday-api operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An HTTP method other than GET or POST was requested.
    ///
    /// No request is sent. This is a bug in the caller.
    #[error("HTTP method {0} is not supported by the niceday client")]
    UnsupportedOperation(String),

    /// The server answered with a 4xx or 5xx status.
    #[error("niceday-api returned HTTP {status}: {body}")]
    Transport {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
    },

    /// The response body was not valid JSON.
    #[error("The niceday-api did not return JSON: {0}")]
    NonJsonResponse(#[source] serde_json::Error),

    /// The JSON body carried an `Unauthorized error` message.
    #[error("{0}")]
    Unauthorized(String),

    /// The JSON body carried a `The requested resource could not be found` message.
    #[error("{0}")]
    NotFound(String),

    /// The JSON body is missing a key the client depends on.
    ///
    /// Usually means the data stored upstream changed shape.
    #[error("Malformed response from niceday-api: {0}")]
    MalformedResponse(String),

    /// Connection refused - the niceday-api is likely not running.
    #[error("Could not connect to the niceday-api. Is it running?")]
    ConnectionRefused,

    /// Any other HTTP/network error from reqwest.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// A specialized Result type for niceday-api operations.
pub type Result<T> = std::result::Result<T, Error>;
