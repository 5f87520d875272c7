//! Endpoint descriptors and the registry that maps each operation onto one.
//!
//! Paths and parameter names form the contract with the remote service and
//! are kept exactly as the service documents them.

use crate::choices::{Animal, FactAnimal, ImgAnimal};
use crate::{Error, Result};
use serde_json::{Map, Value};
use std::fmt;

/// Parameters sent with a request, keyed by wire name.
pub type Params = Map<String, Value>;

/// HTTP methods used by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for http::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
        }
    }
}

/// Static description of one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// The HTTP method.
    pub method: HttpMethod,

    /// Path relative to the base URL.
    pub path: &'static str,

    /// Wire names of parameters that must be present.
    pub required: &'static [&'static str],
}

impl Endpoint {
    /// A `GET` endpoint without required parameters.
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Get,
            path,
            required: &[],
        }
    }

    /// A `POST` endpoint without required parameters.
    pub const fn post(path: &'static str) -> Self {
        Self {
            method: HttpMethod::Post,
            path,
            required: &[],
        }
    }

    /// Returns a copy of this descriptor with the given required parameters.
    pub const fn with_required(self, required: &'static [&'static str]) -> Self {
        Self { required, ..self }
    }

    /// Fails with [`Error::MissingParameter`] if a required parameter is absent
    /// or null.
    pub fn check_params(&self, params: Option<&Params>) -> Result<()> {
        for &param in self.required {
            let present = params
                .and_then(|p| p.get(param))
                .is_some_and(|value| !value.is_null());
            if !present {
                return Err(Error::MissingParameter {
                    path: self.path,
                    param,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Renders parameters as query string pairs.
///
/// Strings are sent as-is, other scalars in their JSON text form, and nulls
/// are dropped.
pub(crate) fn query_pairs(params: &Params) -> Vec<(&str, String)> {
    params
        .iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.as_str(), rendered))
        })
        .collect()
}

/// Premium rank card image.
pub const RANK_CARD: Endpoint = Endpoint::get("/premium/rankcard").with_required(&[
    "username",
    "avatar",
    "discriminator",
    "level",
    "cxp",
    "nxp",
    "key",
]);

/// Image and fact about an animal.
pub fn animal(kind: Animal) -> Endpoint {
    Endpoint::get(match kind {
        Animal::Bird => "/animal/bird",
        Animal::Cat => "/animal/cat",
        Animal::Dog => "/animal/dog",
        Animal::Fox => "/animal/fox",
        Animal::Kangaroo => "/animal/kangaroo",
        Animal::Koala => "/animal/koala",
        Animal::Panda => "/animal/panda",
        Animal::Raccoon => "/animal/raccoon",
        Animal::RedPanda => "/animal/red_panda",
    })
}

/// Image of an animal.
pub fn img(kind: ImgAnimal) -> Endpoint {
    Endpoint::get(match kind {
        ImgAnimal::Bird => "/img/bird",
        ImgAnimal::Cat => "/img/cat",
        ImgAnimal::Dog => "/img/dog",
        ImgAnimal::Fox => "/img/fox",
        ImgAnimal::Kangaroo => "/img/kangaroo",
        ImgAnimal::Koala => "/img/koala",
        ImgAnimal::Panda => "/img/panda",
        ImgAnimal::Raccoon => "/img/raccoon",
        ImgAnimal::RedPanda => "/img/red_panda",
        ImgAnimal::Whale => "/img/whale",
    })
}

/// Fact about an animal.
pub fn facts(kind: FactAnimal) -> Endpoint {
    Endpoint::get(match kind {
        FactAnimal::Bird => "/facts/bird",
        FactAnimal::Cat => "/facts/cat",
        FactAnimal::Dog => "/facts/dog",
        FactAnimal::Elephant => "/facts/elephant",
        FactAnimal::Fox => "/facts/fox",
        FactAnimal::Giraffe => "/facts/giraffe",
        FactAnimal::Kangaroo => "/facts/kangaroo",
        FactAnimal::Koala => "/facts/koala",
        FactAnimal::Panda => "/facts/panda",
        FactAnimal::Raccoon => "/facts/raccoon",
        FactAnimal::RedPanda => "/facts/red_panda",
        FactAnimal::Whale => "/facts/whale",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choices::Choice;
    use serde_json::json;

    #[test]
    fn test_every_member_has_distinct_path() {
        let mut paths: Vec<_> = Animal::all().iter().map(|a| animal(*a).path).collect();
        paths.extend(ImgAnimal::all().iter().map(|a| img(*a).path));
        paths.extend(FactAnimal::all().iter().map(|a| facts(*a).path));

        let total = paths.len();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn test_path_matches_wire_segment() {
        for kind in Animal::all() {
            assert_eq!(animal(*kind).path, format!("/animal/{}", kind.wire_name()));
        }
        for kind in ImgAnimal::all() {
            assert_eq!(img(*kind).path, format!("/img/{}", kind.wire_name()));
        }
        for kind in FactAnimal::all() {
            assert_eq!(facts(*kind).path, format!("/facts/{}", kind.wire_name()));
        }
    }

    #[test]
    fn test_check_params_reports_first_missing() {
        let mut params = Params::new();
        params.insert("username".into(), json!("ferris"));
        params.insert("avatar".into(), json!("https://example.com/a.png"));
        params.insert("discriminator".into(), json!(1));
        params.insert("level".into(), json!(3));
        params.insert("cxp".into(), Value::Null);

        match RANK_CARD.check_params(Some(&params)) {
            Err(Error::MissingParameter { path, param }) => {
                assert_eq!(path, "/premium/rankcard");
                assert_eq!(param, "cxp");
            }
            other => panic!("Expected MissingParameter, got {:?}", other),
        }

        assert!(animal(Animal::Dog).check_params(None).is_ok());
    }

    #[test]
    fn test_query_pairs_render_scalars() {
        let mut params = Params::new();
        params.insert("username".into(), json!("ferris"));
        params.insert("level".into(), json!(7));
        params.insert("bg".into(), Value::Null);

        let pairs = query_pairs(&params);
        assert_eq!(
            pairs,
            vec![("level", "7".to_string()), ("username", "ferris".to_string())]
        );
    }

    #[test]
    fn test_endpoint_display() {
        assert_eq!(RANK_CARD.to_string(), "GET /premium/rankcard");
        assert_eq!(Endpoint::post("/x").method, HttpMethod::Post);
    }
}
