//! niceday-api endpoint operations, grouped by resource.

mod messages;
mod profiles;
mod trackers;

pub use messages::MessageActions;
pub use profiles::ProfileActions;
pub use trackers::TrackerActions;
