use std::borrow::Borrow;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Deserialize;

/// Address of a node inside the keyed-children hierarchy.
///
/// Built by appending `"/" + key` for every keyed child on the way down from
/// the root, which is the empty string. Paths stay stable across renders only
/// as long as the keys do.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(String);

impl Path {
    pub const SEPARATOR: char = '/';

    pub fn root() -> Self {
        Self(String::new())
    }

    pub fn append_key(&self, key: &str) -> Self {
        let mut next = String::with_capacity(self.0.len() + 1 + key.len());
        next.push_str(&self.0);
        next.push(Self::SEPARATOR);
        next.push_str(key);
        Self(next)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Path {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// RGB color with every channel in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` with lowercase hex digits.
    pub fn to_hex_string(&self) -> String {
        let mut out = String::with_capacity(7);
        out.push('#');
        for channel in [self.r, self.g, self.b] {
            push_hex_byte(&mut out, channel_to_byte(channel));
        }
        out
    }
}

// floor first, clamp second: `0.0` and `1.0` land on `00` and `ff`.
fn channel_to_byte(value: f64) -> u8 {
    (value * 256.0).floor().clamp(0.0, 255.0) as u8
}

fn push_hex_byte(out: &mut String, byte: u8) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    out.push(HEX[(byte >> 4) as usize] as char);
    out.push(HEX[(byte & 0x0f) as usize] as char);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub enum Language {
    Japanese,
    English,
    Esperanto,
}

impl Language {
    pub fn ietf_tag(self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::English => "en",
            Language::Esperanto => "eo",
        }
    }
}

/// How a shared link is previewed on Twitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
pub enum TwitterCard {
    #[default]
    SummaryCard,
    SummaryCardWithLargeImage,
}

impl TwitterCard {
    pub fn as_str(self) -> &'static str {
        match self {
            TwitterCard::SummaryCard => "summary",
            TwitterCard::SummaryCardWithLargeImage => "summary_large_image",
        }
    }
}
