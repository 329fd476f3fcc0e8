//! User data and profile operations.

use serde_json::Value;

use crate::client::NicedayClient;
use crate::error::Result;
use crate::types::UserProfile;

/// Provides access to user profile operations.
///
/// Obtained via [`NicedayClient::profiles()`].
#[derive(Debug)]
pub struct ProfileActions<'a> {
    pub(crate) client: &'a NicedayClient,
}

impl<'a> ProfileActions<'a> {
    /// Get the raw user data stored for a user.
    ///
    /// The shape is controlled by the server and usually contains
    /// `networks`, `userProfile` and `user`. Nothing is validated beyond the
    /// generic error checks.
    pub async fn raw(&self, user_id: i64) -> Result<Value> {
        self.client
            .get_json(&format!("userdata/{}", user_id), &[])
            .await
    }

    /// Get a user's profile.
    ///
    /// The raw user data is reduced to
    /// [`USER_PROFILE_KEYS`](crate::USER_PROFILE_KEYS). Fails with
    /// [`Error::MalformedResponse`](crate::Error::MalformedResponse) naming the
    /// missing key if the server's payload lacks any of them.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use niceday::NicedayClient;
    /// # async fn example() -> niceday::Result<()> {
    /// let client = NicedayClient::new();
    /// let profile = client.profiles().get(38527).await?;
    /// println!("Born on {:?}", profile.birth_date());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get(&self, user_id: i64) -> Result<UserProfile> {
        let user_data = self.raw(user_id).await?;
        UserProfile::from_user_data(&user_data)
    }
}
