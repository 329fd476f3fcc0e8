//! Domain types for the niceday-api.
//!
//! This module contains the tracker definitions, the user profile shape and
//! the acknowledgement returned by write operations.

mod ack;
mod profile;
mod tracker;

pub use ack::Acknowledgement;
pub use profile::{USER_PROFILE_KEYS, UserProfile};
pub use tracker::{IsoTimestamp, Tracker, TrackerStatus};
