use std::fmt;

/// A validated color field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Let the service pick a color.
    Random,
    /// A 24-bit RGB color.
    Rgb(u32),
}

impl Color {
    /// Parses `#rrggbb`, `0xrrggbb`, bare `rrggbb`, or `random` when
    /// `allow_random` is set.
    pub fn parse(value: &str, allow_random: bool) -> Option<Self> {
        if value.eq_ignore_ascii_case("random") {
            return allow_random.then_some(Color::Random);
        }

        let digits = value
            .strip_prefix('#')
            .or_else(|| value.strip_prefix("0x"))
            .or_else(|| value.strip_prefix("0X"))
            .unwrap_or(value);

        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Color::Rgb)
    }

    pub fn red(&self) -> Option<u8> {
        self.channel(16)
    }

    pub fn green(&self) -> Option<u8> {
        self.channel(8)
    }

    pub fn blue(&self) -> Option<u8> {
        self.channel(0)
    }

    fn channel(&self, shift: u32) -> Option<u8> {
        match self {
            Color::Random => None,
            Color::Rgb(rgb) => Some(((rgb >> shift) & 0xff) as u8),
        }
    }
}

/// Canonical wire form: `random` or bare lowercase `rrggbb`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Random => f.write_str("random"),
            Color::Rgb(rgb) => write!(f, "{rgb:06x}"),
        }
    }
}

/// Returns the canonical form of a color value, or `None` if it is invalid.
///
/// ```
/// use somerandomapi::models::normalize_color;
///
/// assert_eq!(normalize_color("#1A2B3C", false).as_deref(), Some("1a2b3c"));
/// assert_eq!(normalize_color("0x1a2b3c", false).as_deref(), Some("1a2b3c"));
/// assert_eq!(normalize_color("random", true).as_deref(), Some("random"));
/// assert_eq!(normalize_color("random", false), None);
/// assert_eq!(normalize_color("zz0000", true), None);
/// ```
pub fn normalize_color(value: &str, allow_random: bool) -> Option<String> {
    Color::parse(value, allow_random).map(|color| color.to_string())
}

pub(crate) fn describe(allow_random: bool) -> &'static str {
    if allow_random {
        "a hex color ('#000000', '0x000000', '000000') or 'random'"
    } else {
        "a hex color ('#000000', '0x000000', '000000')"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_forms_normalize_identically() {
        let expected = Some("1a2b3c".to_string());
        assert_eq!(normalize_color("#1a2b3c", false), expected);
        assert_eq!(normalize_color("0x1a2b3c", false), expected);
        assert_eq!(normalize_color("1a2b3c", false), expected);
        assert_eq!(normalize_color("0X1A2B3C", false), expected);
    }

    #[test]
    fn test_random_only_when_permitted() {
        assert_eq!(Color::parse("random", true), Some(Color::Random));
        assert_eq!(Color::parse("RANDOM", true), Some(Color::Random));
        assert_eq!(Color::parse("random", false), None);
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["zz0000", "#12345", "1234567", "##123456", "0x", "", "+12345"] {
            assert_eq!(Color::parse(bad, true), None, "{bad} should be rejected");
        }
    }

    #[test]
    fn test_channels() {
        let color = Color::parse("#ff8001", false).unwrap();
        assert_eq!(color.red(), Some(0xff));
        assert_eq!(color.green(), Some(0x80));
        assert_eq!(color.blue(), Some(0x01));
        assert_eq!(Color::Random.red(), None);
        assert_eq!(color.to_string(), "ff8001");
    }
}
