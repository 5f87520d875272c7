//! Facades grouping the operations of each endpoint family.
//!
//! Obtain them from [`Client::animal`](crate::Client::animal) and
//! [`Client::premium`](crate::Client::premium).

mod animal;
mod premium;

pub use animal::AnimalClient;
pub use premium::PremiumClient;

use crate::{Error, Response, Result};
use serde_json::Value;

/// Pulls a string field out of a JSON response.
fn string_field(response: Response<Value>, key: &str) -> Result<String> {
    match response.data.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => {
            tracing::error!(key, raw_response = %response.raw_body, "Response lacks expected field");
            Err(Error::DeserializationFailed {
                serde_error: format!("missing string field `{key}`"),
                status: response.status,
                raw_response: response.raw_body,
            })
        }
    }
}
