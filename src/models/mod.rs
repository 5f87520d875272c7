//! Typed records exchanged with the service.
//!
//! Every JSON record implements [`Record`]: a descriptor table of its fields
//! (public name, wire key, constraint) plus a serde shape for the actual
//! conversion. [`Record::from_wire`] is the only way a record comes into
//! existence, so a record value in hand has always passed validation. A
//! record with constrained fields implements `Deserialize` through
//! `from_wire` as well.

mod animal;
mod color;
mod image;
mod rankcard;

pub use animal::AnimalImageFact;
pub use color::{normalize_color, Color};
pub use image::Image;
pub use rankcard::{Palette, Rankcard, RankcardBuilder};

use crate::endpoint::Params;
use crate::{Error, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Validation applied to one field before the record is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// No validation beyond the field's type.
    None,
    /// Text no longer than this many characters.
    MaxLength(usize),
    /// A hex color, normalized to bare lowercase `rrggbb`.
    Color {
        /// Whether the literal `random` is accepted.
        allow_random: bool,
    },
}

/// Descriptor for one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Rust-side field name, used in error messages.
    pub name: &'static str,
    /// Key used in JSON payloads.
    pub wire: &'static str,
    /// Whether the wire key must be present.
    pub required: bool,
    pub constraint: Constraint,
}

impl Field {
    pub const fn required(name: &'static str, wire: &'static str) -> Self {
        Self {
            name,
            wire,
            required: true,
            constraint: Constraint::None,
        }
    }

    pub const fn optional(name: &'static str, wire: &'static str) -> Self {
        Self {
            name,
            wire,
            required: false,
            constraint: Constraint::None,
        }
    }

    pub const fn max_length(self, limit: usize) -> Self {
        Self {
            constraint: Constraint::MaxLength(limit),
            ..self
        }
    }

    pub const fn color(self, allow_random: bool) -> Self {
        Self {
            constraint: Constraint::Color { allow_random },
            ..self
        }
    }

    /// Checks a present, non-null value and returns its normalized form if
    /// the constraint rewrites it.
    fn check(&self, record: &'static str, value: &Value) -> Result<Option<Value>> {
        let text = match (self.constraint, value) {
            (Constraint::None, _) => return Ok(None),
            (_, Value::String(s)) => s.as_str(),
            (_, other) => {
                return Err(Error::ValidationFailed {
                    record,
                    field: self.name,
                    constraint: "a string".to_string(),
                    value: other.to_string(),
                })
            }
        };

        match self.constraint {
            Constraint::None => Ok(None),
            Constraint::MaxLength(limit) => {
                if text.chars().count() > limit {
                    return Err(Error::ValidationFailed {
                        record,
                        field: self.name,
                        constraint: format!("at most {limit} characters"),
                        value: text.to_string(),
                    });
                }
                Ok(None)
            }
            Constraint::Color { allow_random } => match normalize_color(text, allow_random) {
                Some(normalized) => Ok(Some(Value::String(normalized))),
                None => Err(Error::ValidationFailed {
                    record,
                    field: self.name,
                    constraint: color::describe(allow_random).to_string(),
                    value: text.to_string(),
                }),
            },
        }
    }
}

/// A record with a declared wire shape.
pub trait Record: Serialize + Sized {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// Field descriptors in declaration order.
    const FIELDS: &'static [Field];

    /// Plain serde shape the checked wire object is decoded into.
    type Wire: DeserializeOwned;

    /// Turns the decoded wire form into the record once every direct field
    /// has passed. Cross-field checks and derived fields live here.
    fn finish(wire: Self::Wire) -> Result<Self>;

    /// Builds a record from its JSON wire form.
    ///
    /// Missing required keys are reported first, then field constraints are
    /// applied in declaration order; the first failure aborts construction.
    fn from_wire(value: Value) -> Result<Self> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(Error::InvalidRecord {
                    record: Self::NAME,
                    detail: format!("expected a JSON object, got {other}"),
                })
            }
        };

        for field in Self::FIELDS {
            let present = map.get(field.wire).is_some_and(|v| !v.is_null());
            if field.required && !present {
                return Err(Error::MissingField {
                    record: Self::NAME,
                    field: field.name,
                });
            }
        }

        for field in Self::FIELDS {
            let Some(value) = map.get(field.wire).filter(|v| !v.is_null()) else {
                continue;
            };
            if let Some(normalized) = field.check(Self::NAME, value)? {
                map.insert(field.wire.to_string(), normalized);
            }
        }

        let wire: Self::Wire =
            serde_json::from_value(Value::Object(map)).map_err(|e| Error::InvalidRecord {
                record: Self::NAME,
                detail: e.to_string(),
            })?;
        Self::finish(wire)
    }

    /// Emits the record in its JSON wire form, leaving out unset fields.
    fn to_wire(&self) -> Result<Params> {
        wire_object(Self::NAME, self)
    }
}

/// Serializes `value` and requires the result to be a JSON object.
pub(crate) fn wire_object<T: Serialize>(record: &'static str, value: &T) -> Result<Params> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(Error::SerializationFailed(format!(
            "{record} serialized to {other} instead of an object"
        ))),
        Err(e) => Err(Error::SerializationFailed(e.to_string())),
    }
}

#[cfg(test)]
pub(crate) fn assert_aliases_unique<R: Record>() {
    let mut wires: Vec<_> = R::FIELDS.iter().map(|f| f.wire).collect();
    let mut names: Vec<_> = R::FIELDS.iter().map(|f| f.name).collect();
    wires.sort_unstable();
    wires.dedup();
    names.sort_unstable();
    names.dedup();
    assert_eq!(wires.len(), R::FIELDS.len(), "{} reuses a wire key", R::NAME);
    assert_eq!(names.len(), R::FIELDS.len(), "{} reuses a field name", R::NAME);
}
