//! An async Rust client for the niceday-api.
//!
//! The niceday-api fronts the Sense user data and messaging service. This
//! crate turns a small set of method calls into HTTP requests against it and
//! hands back the validated JSON.
//!
//! # Quick Start
//!
//! ```no_run
//! use niceday::NicedayClient;
//!
//! # async fn example() -> niceday::Result<()> {
//! // Create a client with default settings (http://localhost:8080/)
//! let client = NicedayClient::new();
//!
//! let profile = client.profiles().get(38527).await?;
//! println!("Hello {:?}", profile.first_name());
//!
//! client.messages().post(38527, "Hello world").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! ```no_run
//! use niceday::NicedayClient;
//!
//! # fn example() -> niceday::Result<()> {
//! let client = NicedayClient::builder()
//!     .url("http://niceday-api:8080/")
//!     .header("X-Request-Source", "perfectfit")
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Action Groups
//!
//! - [`NicedayClient::profiles()`] - Raw user data and the reduced user profile
//! - [`NicedayClient::messages()`] - Send text messages
//! - [`NicedayClient::trackers()`] - Tracker statuses, smoking entries and reminders
//!
//! # Errors
//!
//! The server reports some failures inside 200-status JSON bodies. Those are
//! classified from the `message` field; see [`Error`] for every kind.

pub mod actions;
pub mod client;
pub mod error;
mod request;
mod response;
pub mod types;

pub use client::{ClientBuilder, DEFAULT_URL, NicedayClient};
pub use error::{Error, Result};
pub use types::{
    Acknowledgement, IsoTimestamp, Tracker, TrackerStatus, USER_PROFILE_KEYS, UserProfile,
};
