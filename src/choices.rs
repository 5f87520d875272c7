//! Closed sets of values accepted by the endpoints.
//!
//! Every category is a plain enum. Facade methods take any [`IntoChoice`]
//! value, so callers may pass the enum itself, text in any letter case, or a
//! dynamic [`serde_json::Value`] read from configuration.

use crate::{Error, Result};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A closed category of values.
pub trait Choice: Copy + Eq + fmt::Debug + 'static {
    /// Type name used in error messages.
    const CATEGORY: &'static str;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// Canonical uppercase form, e.g. `RED_PANDA`.
    fn as_str(&self) -> &'static str;

    /// Lowercase form used in URL paths, e.g. `red_panda`.
    fn wire_name(&self) -> &'static str;

    /// Parses text case-insensitively against [`Choice::all`].
    ///
    /// `parameter` names the caller's argument in the error.
    fn parse_choice(parameter: &'static str, value: &str) -> Result<Self> {
        let wanted = value.to_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|member| member.as_str() == wanted)
            .ok_or_else(|| Error::InvalidChoice {
                parameter,
                category: Self::CATEGORY,
                value: value.to_string(),
                valid: Self::all().iter().map(Choice::as_str).collect(),
            })
    }
}

/// Conversion from caller input into a category member.
pub trait IntoChoice<C: Choice> {
    /// Resolves `self` to a member of `C`, naming `parameter` on failure.
    fn into_choice(self, parameter: &'static str) -> Result<C>;
}

impl<C: Choice> IntoChoice<C> for &str {
    fn into_choice(self, parameter: &'static str) -> Result<C> {
        C::parse_choice(parameter, self)
    }
}

impl<C: Choice> IntoChoice<C> for String {
    fn into_choice(self, parameter: &'static str) -> Result<C> {
        C::parse_choice(parameter, &self)
    }
}

impl<C: Choice> IntoChoice<C> for &String {
    fn into_choice(self, parameter: &'static str) -> Result<C> {
        C::parse_choice(parameter, self)
    }
}

impl<C: Choice> IntoChoice<C> for &Value {
    fn into_choice(self, parameter: &'static str) -> Result<C> {
        match self {
            Value::String(s) => C::parse_choice(parameter, s),
            other => Err(Error::WrongType {
                parameter,
                expected: format!("an instance of `{}` or `str`", C::CATEGORY),
                found: json_type_name(other),
            }),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

macro_rules! choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $canonical:literal, $wire:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl Choice for $name {
            const CATEGORY: &'static str = stringify!($name);

            fn all() -> &'static [Self] {
                &[$($name::$variant,)+]
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $canonical,)+
                }
            }

            fn wire_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_choice("value", s)
            }
        }

        impl IntoChoice<$name> for $name {
            fn into_choice(self, _parameter: &'static str) -> Result<Self> {
                Ok(self)
            }
        }
    };
}

choice_enum! {
    /// Animals served by the image-and-fact endpoint.
    Animal {
        Bird => "BIRD", "bird";
        Cat => "CAT", "cat";
        Dog => "DOG", "dog";
        Fox => "FOX", "fox";
        Kangaroo => "KANGAROO", "kangaroo";
        Koala => "KOALA", "koala";
        Panda => "PANDA", "panda";
        Raccoon => "RACCOON", "raccoon";
        RedPanda => "RED_PANDA", "red_panda";
    }
}

choice_enum! {
    /// Animals served by the image endpoint.
    ImgAnimal {
        Bird => "BIRD", "bird";
        Cat => "CAT", "cat";
        Dog => "DOG", "dog";
        Fox => "FOX", "fox";
        Kangaroo => "KANGAROO", "kangaroo";
        Koala => "KOALA", "koala";
        Panda => "PANDA", "panda";
        Raccoon => "RACCOON", "raccoon";
        RedPanda => "RED_PANDA", "red_panda";
        Whale => "WHALE", "whale";
    }
}

choice_enum! {
    /// Animals served by the facts endpoint.
    FactAnimal {
        Bird => "BIRD", "bird";
        Cat => "CAT", "cat";
        Dog => "DOG", "dog";
        Elephant => "ELEPHANT", "elephant";
        Fox => "FOX", "fox";
        Giraffe => "GIRAFFE", "giraffe";
        Kangaroo => "KANGAROO", "kangaroo";
        Koala => "KOALA", "koala";
        Panda => "PANDA", "panda";
        Raccoon => "RACCOON", "raccoon";
        RedPanda => "RED_PANDA", "red_panda";
        Whale => "WHALE", "whale";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_any_case() {
        assert_eq!("dog".parse::<Animal>().unwrap(), Animal::Dog);
        assert_eq!("DOG".parse::<Animal>().unwrap(), Animal::Dog);
        assert_eq!("Red_Panda".parse::<Animal>().unwrap(), Animal::RedPanda);
        assert_eq!("whale".parse::<ImgAnimal>().unwrap(), ImgAnimal::Whale);
        assert_eq!("giraffe".parse::<FactAnimal>().unwrap(), FactAnimal::Giraffe);
    }

    #[test]
    fn test_every_member_parses_from_its_own_forms() {
        for member in FactAnimal::all() {
            assert_eq!(member.as_str().parse::<FactAnimal>().unwrap(), *member);
            assert_eq!(member.wire_name().parse::<FactAnimal>().unwrap(), *member);
        }
    }

    #[test]
    fn test_unknown_value_lists_every_member() {
        let err = IntoChoice::<Animal>::into_choice("whale", "animal").unwrap_err();
        match err {
            Error::InvalidChoice {
                parameter,
                category,
                value,
                valid,
            } => {
                assert_eq!(parameter, "animal");
                assert_eq!(category, "Animal");
                assert_eq!(value, "whale");
                assert_eq!(valid.len(), Animal::all().len());
                assert!(valid.contains(&"RED_PANDA"));
            }
            other => panic!("Expected InvalidChoice, got {:?}", other),
        }
    }

    #[test]
    fn test_canonical_value_passes_through() {
        let kind: Animal = Animal::Koala.into_choice("animal").unwrap();
        assert_eq!(kind, Animal::Koala);
    }

    #[test]
    fn test_dynamic_values() {
        let kind: ImgAnimal = (&json!("cat")).into_choice("animal").unwrap();
        assert_eq!(kind, ImgAnimal::Cat);

        let err = IntoChoice::<ImgAnimal>::into_choice(&json!(3), "animal").unwrap_err();
        match err {
            Error::WrongType {
                parameter,
                expected,
                found,
            } => {
                assert_eq!(parameter, "animal");
                assert_eq!(expected, "an instance of `ImgAnimal` or `str`");
                assert_eq!(found, "number");
            }
            other => panic!("Expected WrongType, got {:?}", other),
        }

        assert!(matches!(
            IntoChoice::<FactAnimal>::into_choice(&json!(null), "animal"),
            Err(Error::WrongType { found: "null", .. })
        ));
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(Animal::RedPanda.to_string(), "RED_PANDA");
        assert_eq!(FactAnimal::Elephant.wire_name(), "elephant");
    }
}
