//! Fixed event color palette.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven colors an event can be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventColor {
    #[default]
    Amber,
    Orange,
    Green,
    Blue,
    Purple,
    Red,
    Teal,
}

impl EventColor {
    /// Palette in display order. The first entry is the form default.
    pub const ALL: [EventColor; 7] = [
        EventColor::Amber,
        EventColor::Orange,
        EventColor::Green,
        EventColor::Blue,
        EventColor::Purple,
        EventColor::Red,
        EventColor::Teal,
    ];

    /// Hex representation (`#rrggbb`)
    pub fn hex(&self) -> &'static str {
        match self {
            EventColor::Amber => "#f6be23",
            EventColor::Orange => "#f6501e",
            EventColor::Green => "#2ecc71",
            EventColor::Blue => "#3498db",
            EventColor::Purple => "#9b59b6",
            EventColor::Red => "#e74c3c",
            EventColor::Teal => "#1abc9c",
        }
    }

    /// RGB components of the palette entry
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        // Palette literals are always six valid hex digits.
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }

    /// Look up a palette entry by its hex string (case-insensitive, `#` required).
    pub fn from_hex(hex: &str) -> Option<Self> {
        if !hex.starts_with('#') {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|color| color.hex().eq_ignore_ascii_case(hex))
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}
