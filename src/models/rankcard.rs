use super::{wire_object, Color, Field, Record};
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request for a premium rank card image.
///
/// Build one with [`Rankcard::builder`], [`Record::from_wire`] or serde; all
/// three run the same validation. Color fields accept `#rrggbb`, `0xrrggbb`,
/// `rrggbb` or `random` and are stored as bare lowercase hex.
///
/// ```
/// use somerandomapi::models::Rankcard;
///
/// let card = Rankcard::builder("ferris", "https://example.com/ferris.png", 1, 7, 250, 400)
///     .text_color("#FFAA00")
///     .xp_bar_color("random")
///     .build()
///     .unwrap();
///
/// assert_eq!(card.text_color(), Some("ffaa00"));
/// assert_eq!(card.xp_bar_color(), Some("random"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rankcard {
    #[serde(flatten)]
    fields: RankcardWire,
    #[serde(skip)]
    palette: Palette,
}

/// Wire shape of a [`Rankcard`] before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankcardWire {
    username: String,
    #[serde(rename = "avatar")]
    avatar_url: String,
    discriminator: u32,
    level: u64,
    #[serde(rename = "cxp")]
    current_xp: u64,
    #[serde(rename = "nxp")]
    needed_xp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(rename = "bg", default, skip_serializing_if = "Option::is_none")]
    background_url: Option<String>,
    #[serde(rename = "cbg", default, skip_serializing_if = "Option::is_none")]
    background_color: Option<String>,
    #[serde(rename = "ctext", default, skip_serializing_if = "Option::is_none")]
    text_color: Option<String>,
    #[serde(rename = "ccxp", default, skip_serializing_if = "Option::is_none")]
    current_xp_color: Option<String>,
    #[serde(rename = "cbar", default, skip_serializing_if = "Option::is_none")]
    xp_bar_color: Option<String>,
}

/// Parsed colors of a [`Rankcard`]. `None` leaves the service default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    pub background: Option<Color>,
    pub text: Option<Color>,
    pub current_xp: Option<Color>,
    pub xp_bar: Option<Color>,
}

impl Record for Rankcard {
    const NAME: &'static str = "Rankcard";
    const FIELDS: &'static [Field] = &[
        Field::required("username", "username").max_length(32),
        Field::required("avatar_url", "avatar"),
        Field::required("discriminator", "discriminator"),
        Field::required("level", "level"),
        Field::required("current_xp", "cxp"),
        Field::required("needed_xp", "nxp"),
        Field::optional("key", "key"),
        Field::optional("background_url", "bg"),
        Field::optional("background_color", "cbg").color(true),
        Field::optional("text_color", "ctext").color(true),
        Field::optional("current_xp_color", "ccxp").color(true),
        Field::optional("xp_bar_color", "cbar").color(true),
    ];

    type Wire = RankcardWire;

    fn finish(fields: RankcardWire) -> Result<Self> {
        if let (Some(_), Some(color)) = (&fields.background_url, &fields.background_color) {
            return Err(Error::ValidationFailed {
                record: Self::NAME,
                field: "background_color",
                constraint: "unset when background_url is given".to_string(),
                value: color.clone(),
            });
        }

        let parse = |value: &Option<String>| value.as_deref().and_then(|v| Color::parse(v, true));
        let palette = Palette {
            background: parse(&fields.background_color),
            text: parse(&fields.text_color),
            current_xp: parse(&fields.current_xp_color),
            xp_bar: parse(&fields.xp_bar_color),
        };
        Ok(Self { fields, palette })
    }
}

impl<'de> Deserialize<'de> for Rankcard {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_wire(value).map_err(serde::de::Error::custom)
    }
}

impl Rankcard {
    /// Starts a rank card with every required field.
    pub fn builder(
        username: impl Into<String>,
        avatar_url: impl Into<String>,
        discriminator: u32,
        level: u64,
        current_xp: u64,
        needed_xp: u64,
    ) -> RankcardBuilder {
        RankcardBuilder {
            raw: RankcardWire {
                username: username.into(),
                avatar_url: avatar_url.into(),
                discriminator,
                level,
                current_xp,
                needed_xp,
                key: None,
                background_url: None,
                background_color: None,
                text_color: None,
                current_xp_color: None,
                xp_bar_color: None,
            },
        }
    }

    /// Username, at most 32 characters.
    pub fn username(&self) -> &str {
        &self.fields.username
    }

    /// Avatar URL, `.png` or `.jpg`.
    pub fn avatar_url(&self) -> &str {
        &self.fields.avatar_url
    }

    pub fn discriminator(&self) -> u32 {
        self.fields.discriminator
    }

    pub fn level(&self) -> u64 {
        self.fields.level
    }

    pub fn current_xp(&self) -> u64 {
        self.fields.current_xp
    }

    /// XP needed to reach the next level.
    pub fn needed_xp(&self) -> u64 {
        self.fields.needed_xp
    }

    /// API key for this card. When unset the client's key is sent instead.
    pub fn key(&self) -> Option<&str> {
        self.fields.key.as_deref()
    }

    /// Custom background image (tier 2+ key).
    pub fn background_url(&self) -> Option<&str> {
        self.fields.background_url.as_deref()
    }

    /// Custom background color (tier 1+ key).
    pub fn background_color(&self) -> Option<&str> {
        self.fields.background_color.as_deref()
    }

    pub fn text_color(&self) -> Option<&str> {
        self.fields.text_color.as_deref()
    }

    pub fn current_xp_color(&self) -> Option<&str> {
        self.fields.current_xp_color.as_deref()
    }

    pub fn xp_bar_color(&self) -> Option<&str> {
        self.fields.xp_bar_color.as_deref()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

/// Builder for [`Rankcard`]. Nothing is validated until [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct RankcardBuilder {
    raw: RankcardWire,
}

impl RankcardBuilder {
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.raw.key = Some(key.into());
        self
    }

    /// Background image URL. Cannot be combined with a background color.
    pub fn background_url(mut self, url: impl Into<String>) -> Self {
        self.raw.background_url = Some(url.into());
        self
    }

    /// Background color. Cannot be combined with a background image.
    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.raw.background_color = Some(color.into());
        self
    }

    pub fn text_color(mut self, color: impl Into<String>) -> Self {
        self.raw.text_color = Some(color.into());
        self
    }

    pub fn current_xp_color(mut self, color: impl Into<String>) -> Self {
        self.raw.current_xp_color = Some(color.into());
        self
    }

    pub fn xp_bar_color(mut self, color: impl Into<String>) -> Self {
        self.raw.xp_bar_color = Some(color.into());
        self
    }

    /// Validates every field and returns the finished card.
    pub fn build(self) -> Result<Rankcard> {
        Rankcard::from_wire(Value::Object(wire_object(Rankcard::NAME, &self.raw)?))
    }
}
