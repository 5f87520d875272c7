use crate::models::{Image, Rankcard, Record};
use crate::{endpoint, Client, Result};
use serde_json::Value;

/// Endpoints that require an API key.
#[derive(Clone, Copy)]
pub struct PremiumClient<'a> {
    client: &'a Client,
}

impl<'a> PremiumClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Renders a rank card.
    ///
    /// The card's own key is used if it has one, otherwise the client's. With
    /// neither, the call fails with
    /// [`Error::MissingParameter`](crate::Error::MissingParameter) before any
    /// request is made.
    ///
    /// ```no_run
    /// use somerandomapi::{models::Rankcard, Client};
    ///
    /// # async fn example() -> Result<(), somerandomapi::Error> {
    /// let client = Client::builder().api_key("my-key").build()?;
    /// let card = Rankcard::builder("ferris", "https://example.com/ferris.png", 1, 7, 250, 400)
    ///     .background_color("random")
    ///     .build()?;
    ///
    /// let image = client.premium().rank_card(&card).await?;
    /// println!("{} bytes from {}", image.len(), image.url());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn rank_card(self, card: &Rankcard) -> Result<Image> {
        let mut params = card.to_wire()?;
        if !params.contains_key("key") {
            if let Some(key) = self.client.api_key() {
                params.insert("key".to_string(), Value::String(key.to_string()));
            }
        }

        tracing::debug!(username = card.username(), level = card.level(), "Rendering rank card");
        self.client
            .request_image(&endpoint::RANK_CARD, Some(&params))
            .await
    }
}
