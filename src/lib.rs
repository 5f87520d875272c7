//! # somerandomapi - typed client for the Some Random API service
//!
//! An async client for <https://some-random-api.com> built on `reqwest`.
//! Inputs are validated before anything is sent, each operation performs a
//! single HTTP call, and JSON responses come back as validated records.
//!
//! ## Quick Start
//!
//! ```no_run
//! use somerandomapi::{Animal, Client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), somerandomapi::Error> {
//!     let client = Client::new()?;
//!
//!     // Enum values and text are interchangeable.
//!     let dog = client.animal().get_image_and_fact(Animal::Dog).await?;
//!     println!("{}: {}", dog.image(), dog.fact());
//!
//!     let cat = client.animal().get_image("cat").await?;
//!     println!("{cat}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Rank cards
//!
//! Request records validate on construction, so a bad color or an over-long
//! username never reaches the network:
//!
//! ```no_run
//! use somerandomapi::{models::Rankcard, Client};
//!
//! # async fn example() -> Result<(), somerandomapi::Error> {
//! let client = Client::builder().api_key("my-key").build()?;
//!
//! let card = Rankcard::builder("ferris", "https://example.com/ferris.png", 1, 7, 250, 400)
//!     .text_color("#ffaa00")
//!     .xp_bar_color("random")
//!     .build()?;
//!
//! let png = client.premium().rank_card(&card).await?;
//! println!("{} bytes", png.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! ```no_run
//! use somerandomapi::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::new()?;
//! match client.animal().get_fact("unicorn").await {
//!     Ok(fact) => println!("{fact}"),
//!     Err(e) if e.is_invalid_input() => eprintln!("Bad input: {e}"),
//!     Err(Error::HttpError { status, rate_limit_info, .. }) => {
//!         eprintln!("HTTP error {status}, rate limit: {rate_limit_info:?}");
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod choices;
mod client;
pub mod clients;
pub mod endpoint;
mod error;
pub mod models;
pub mod rate_limit;
mod response;

pub use choices::{Animal, Choice, FactAnimal, ImgAnimal, IntoChoice};
pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use endpoint::{Endpoint, Params};
pub use error::{Error, Result};
pub use models::{AnimalImageFact, Image, Rankcard, Record};
pub use response::Response;
