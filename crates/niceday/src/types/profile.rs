//! User profile types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// The keys kept from the server's `userProfile` payload.
pub const USER_PROFILE_KEYS: [&str; 5] =
    ["firstName", "lastName", "location", "birthDate", "gender"];

/// A user's profile, reduced to [`USER_PROFILE_KEYS`].
///
/// Values are copied verbatim from the server payload, so they are kept as
/// JSON values rather than coerced into strings. Serializes as the plain map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile(Map<String, Value>);

impl UserProfile {
    /// Reduce raw user data to the profile keys.
    ///
    /// Fails with [`Error::MalformedResponse`] if `userProfile` or any of the
    /// profile keys is missing.
    pub fn from_user_data(user_data: &Value) -> Result<Self> {
        let profile = user_data.get("userProfile").ok_or_else(|| {
            Error::MalformedResponse(
                "expected user data to contain the key \"userProfile\" but it is missing. \
                 Has the data structure stored on the Senseserver changed?"
                    .to_string(),
            )
        })?;

        let mut fields = Map::new();
        for key in USER_PROFILE_KEYS {
            let value = profile.get(key).ok_or_else(|| {
                Error::MalformedResponse(format!(
                    "\"userProfile\" does not contain expected key \"{}\". \
                     Has the data structure stored on the Senseserver changed?",
                    key
                ))
            })?;
            fields.insert(key.to_string(), value.clone());
        }

        Ok(Self(fields))
    }

    /// Look up a profile value by its server key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The user's first name, if it is a string.
    pub fn first_name(&self) -> Option<&str> {
        self.get_str("firstName")
    }

    /// The user's last name, if it is a string.
    pub fn last_name(&self) -> Option<&str> {
        self.get_str("lastName")
    }

    /// The user's location, if it is a string.
    pub fn location(&self) -> Option<&str> {
        self.get_str("location")
    }

    /// The user's birth date (`YYYY-MM-DD`), if it is a string.
    pub fn birth_date(&self) -> Option<&str> {
        self.get_str("birthDate")
    }

    /// The user's gender, if it is a string.
    pub fn gender(&self) -> Option<&str> {
        self.get_str("gender")
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the profile, returning the underlying map.
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}
