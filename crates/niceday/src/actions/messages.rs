//! Messaging operations.

use crate::client::NicedayClient;
use crate::error::Result;
use crate::request::MessageBody;
use crate::types::Acknowledgement;

/// Provides access to messaging operations.
///
/// Obtained via [`NicedayClient::messages()`].
#[derive(Debug)]
pub struct MessageActions<'a> {
    pub(crate) client: &'a NicedayClient,
}

impl<'a> MessageActions<'a> {
    /// Send a text message to a user.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use niceday::NicedayClient;
    /// # async fn example() -> niceday::Result<()> {
    /// let client = NicedayClient::new();
    /// client.messages().post(38527, "Hello world").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn post(&self, recipient_id: i64, text: &str) -> Result<Acknowledgement> {
        let body = MessageBody { recipient_id, text };
        self.client.post_json("messages/", &body).await
    }
}
