use super::{Field, Record};
use crate::Result;
use serde::{Deserialize, Serialize};

/// A random animal picture together with a fact about that animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalImageFact {
    image: String,
    fact: String,
}

impl AnimalImageFact {
    /// URL of the image.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn fact(&self) -> &str {
        &self.fact
    }
}

impl Record for AnimalImageFact {
    const NAME: &'static str = "AnimalImageFact";
    const FIELDS: &'static [Field] = &[
        Field::required("image", "image"),
        Field::required("fact", "fact"),
    ];

    type Wire = Self;

    fn finish(wire: Self) -> Result<Self> {
        Ok(wire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::json;

    #[test]
    fn test_from_wire_ignores_extra_keys() {
        let record = AnimalImageFact::from_wire(json!({
            "image": "https://i.some-random-api.com/dog.png",
            "fact": "Dogs have wet noses.",
            "source": "elsewhere",
        }))
        .unwrap();

        assert_eq!(record.image(), "https://i.some-random-api.com/dog.png");
        assert_eq!(record.fact(), "Dogs have wet noses.");
    }

    #[test]
    fn test_missing_fact() {
        let err = AnimalImageFact::from_wire(json!({ "image": "x" })).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                record: "AnimalImageFact",
                field: "fact"
            }
        ));
    }

    #[test]
    fn test_not_an_object() {
        let err = AnimalImageFact::from_wire(json!(["image", "fact"])).unwrap_err();
        assert!(matches!(err, Error::InvalidRecord { .. }));
    }

    #[test]
    fn test_wire_round_trip() {
        let wire = json!({ "image": "a.png", "fact": "b" });
        let record = AnimalImageFact::from_wire(wire.clone()).unwrap();
        assert_eq!(serde_json::Value::Object(record.to_wire().unwrap()), wire);
    }

    #[test]
    fn test_aliases_unique() {
        crate::models::assert_aliases_unique::<AnimalImageFact>();
    }
}
