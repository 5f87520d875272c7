use super::string_field;
use crate::choices::{Animal, FactAnimal, ImgAnimal, IntoChoice};
use crate::models::{AnimalImageFact, Record};
use crate::{endpoint, Client, Result};

/// The animal endpoints.
///
/// Every method accepts the category enum or its name as text in any case.
/// An unknown name fails before any request is made.
#[derive(Clone, Copy)]
pub struct AnimalClient<'a> {
    client: &'a Client,
}

impl<'a> AnimalClient<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A random image of the animal together with a fact about it.
    ///
    /// ```no_run
    /// # async fn example() -> Result<(), somerandomapi::Error> {
    /// let client = somerandomapi::Client::new()?;
    /// let panda = client.animal().get_image_and_fact("red_panda").await?;
    /// println!("{}", panda.fact());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_image_and_fact(
        self,
        animal: impl IntoChoice<Animal>,
    ) -> Result<AnimalImageFact> {
        let animal = animal.into_choice("animal")?;
        tracing::debug!(%animal, "Fetching animal image and fact");

        let response = self.client.request(&endpoint::animal(animal), None).await?;
        AnimalImageFact::from_wire(response.data)
    }

    /// URL of a random image of the animal.
    pub async fn get_image(self, animal: impl IntoChoice<ImgAnimal>) -> Result<String> {
        let animal = animal.into_choice("animal")?;
        tracing::debug!(%animal, "Fetching animal image");

        let response = self.client.request(&endpoint::img(animal), None).await?;
        string_field(response, "link")
    }

    /// A random fact about the animal.
    pub async fn get_fact(self, animal: impl IntoChoice<FactAnimal>) -> Result<String> {
        let animal = animal.into_choice("animal")?;
        tracing::debug!(%animal, "Fetching animal fact");

        let response = self.client.request(&endpoint::facts(animal), None).await?;
        string_field(response, "fact")
    }
}
