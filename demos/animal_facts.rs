//! Fetches an image and a fact for a few animals, then tries an invalid one.
//!
//! Run with: `cargo run --example animal_facts -- dog koala whale`

use somerandomapi::{Animal, Client, Error};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter("somerandomapi=debug,animal_facts=info")
        .init();

    let client = Client::builder()
        .timeout(Duration::from_secs(15))
        .user_agent("somerandomapi-demo/0.1")?
        .build()?;

    let mut names: Vec<String> = std::env::args().skip(1).collect();
    if names.is_empty() {
        names = vec!["dog".into(), "red_panda".into(), "unicorn".into()];
    }

    for name in &names {
        match client.animal().get_image_and_fact(name).await {
            Ok(animal) => {
                tracing::info!(animal = %name, image = animal.image(), "Got animal");
                println!("{name}: {}", animal.fact());
            }
            Err(e) if e.is_invalid_input() => {
                println!("{e}");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Request failed");
                return Err(e);
            }
        }
    }

    // The canonical value works just as well as its name.
    let image = client.animal().get_image_and_fact(Animal::Cat).await?;
    println!("cat: {}", image.image());

    Ok(())
}
