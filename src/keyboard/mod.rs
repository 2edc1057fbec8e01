//! ASCII to keyboard scan code lookup.
//!
//! Each language has one HID and one PS/2 table of 128 rows. Row `n`
//! describes code point `n + 1`, the layout used by the reader parameter
//! files. A row holds two hex strings: the modifier byte and the key code.
//! `"00", "00"` means the character cannot be typed.
//!
//! The `get_ascii_to_*_key_map_value` lookups index rows directly, so
//! `(0, 65, 1)` yields the key of `'B'`. [`Language::hid_key_stroke`] and
//! [`Language::ps2_key_stroke`] take the character itself.
//!
//! # Example
//!
//! ```
//! use coffee_lpu237::keyboard::{Language, get_ascii_to_hid_key_map_value};
//!
//! assert_eq!(get_ascii_to_hid_key_map_value(0, 65, 1), Some("05"));
//! assert_eq!(Language::from_index(8), Some(Language::UkEnglish));
//! ```

// ============================================================================
// Submodules
// ============================================================================

mod hid;
mod ps2;

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

// ============================================================================
// Types
// ============================================================================

/// `[modifier, key]` rows for code points `1..=128`.
pub(crate) type KeyTable = [[&'static str; 2]; 128];

/// Field index of the modifier byte.
pub const FIELD_MODIFIER: usize = 0;

/// Field index of the key code byte.
pub const FIELD_KEY: usize = 1;

// ============================================================================
// Language
// ============================================================================

/// Keyboard layout, in table index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    UsaEnglish = 0,
    Spanish = 1,
    Danish = 2,
    French = 3,
    German = 4,
    Italian = 5,
    Norwegian = 6,
    Swedish = 7,
    UkEnglish = 8,
    Israel = 9,
    Turkey = 10,
}

impl Language {
    /// All layouts in index order.
    pub const ALL: [Self; 11] = [
        Self::UsaEnglish,
        Self::Spanish,
        Self::Danish,
        Self::French,
        Self::German,
        Self::Italian,
        Self::Norwegian,
        Self::Swedish,
        Self::UkEnglish,
        Self::Israel,
        Self::Turkey,
    ];

    /// Returns the layout for a table index.
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the table index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the HID key stroke for `ascii`.
    #[must_use]
    pub fn hid_key_stroke(self, ascii: u8) -> Option<KeyStroke> {
        KeyStroke::from_row(char_row(hid::TABLES[self.index()], ascii)?)
    }

    /// Returns the PS/2 key stroke for `ascii`.
    #[must_use]
    pub fn ps2_key_stroke(self, ascii: u8) -> Option<KeyStroke> {
        KeyStroke::from_row(char_row(ps2::TABLES[self.index()], ascii)?)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UsaEnglish => "USA English",
            Self::Spanish => "Spanish",
            Self::Danish => "Danish",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Norwegian => "Norwegian",
            Self::Swedish => "Swedish",
            Self::UkEnglish => "UK English",
            Self::Israel => "Israel",
            Self::Turkey => "Turkey",
        };
        f.write_str(name)
    }
}

// ============================================================================
// KeyStroke
// ============================================================================

/// Decoded table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    pub modifier: u8,
    pub key: u8,
}

impl KeyStroke {
    /// `None` for the `"00", "00"` row.
    fn from_row(row: &[&str; 2]) -> Option<Self> {
        let modifier = u8::from_str_radix(row[FIELD_MODIFIER], 16).ok()?;
        let key = u8::from_str_radix(row[FIELD_KEY], 16).ok()?;
        (key != 0).then_some(Self { modifier, key })
    }
}

// ============================================================================
// Lookup
// ============================================================================

/// Row describing the character `ascii`.
fn char_row(table: &'static KeyTable, ascii: u8) -> Option<&'static [&'static str; 2]> {
    table.get(usize::from(ascii.checked_sub(1)?))
}

fn lookup(
    tables: &[&'static KeyTable; 11],
    language: usize,
    ascii: u32,
    field: usize,
) -> Option<&'static str> {
    let table = tables.get(language)?;
    let index = usize::try_from(ascii).ok()?;
    table.get(index)?.get(field).copied()
}

/// Looks up one HID table field (`0` modifier, `1` key code).
///
/// Row `ascii` describes code point `ascii + 1`. Returns `None` for an
/// unknown language, `ascii` above 127, or a field other than `0` and `1`.
#[must_use]
pub fn get_ascii_to_hid_key_map_value(language: usize, ascii: u32, field: usize) -> Option<&'static str> {
    lookup(&hid::TABLES, language, ascii, field)
}

/// Looks up one PS/2 table field (`0` modifier, `1` scan code).
///
/// Same domain as [`get_ascii_to_hid_key_map_value`].
#[must_use]
pub fn get_ascii_to_ps2_key_map_value(language: usize, ascii: u32, field: usize) -> Option<&'static str> {
    lookup(&ps2::TABLES, language, ascii, field)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_hid_fixed_points() {
        assert_eq!(get_ascii_to_hid_key_map_value(0, 65, 1), Some("05"));
        assert_eq!(get_ascii_to_hid_key_map_value(0, 65, 0), Some("02"));
        assert_eq!(get_ascii_to_hid_key_map_value(0, 64, 1), Some("04"));
        assert_eq!(get_ascii_to_hid_key_map_value(0, 96, 1), Some("04"));
        assert_eq!(get_ascii_to_hid_key_map_value(0, 96, 0), Some("00"));
    }

    #[test]
    fn test_english_ps2_fixed_points() {
        assert_eq!(get_ascii_to_ps2_key_map_value(0, 65, 1), Some("32"));
        assert_eq!(get_ascii_to_ps2_key_map_value(0, 96, 1), Some("1C"));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(get_ascii_to_hid_key_map_value(11, 65, 1), None);
        assert_eq!(get_ascii_to_hid_key_map_value(0, 128, 1), None);
        assert_eq!(get_ascii_to_ps2_key_map_value(0, 65, 2), None);
        assert_eq!(get_ascii_to_hid_key_map_value(0, 0, 1), Some("00"));
        assert_eq!(get_ascii_to_hid_key_map_value(0, 127, 1), Some("00"));
    }

    #[test]
    fn test_every_table_is_complete() {
        for language in Language::ALL {
            for ascii in 0..128u32 {
                for field in [FIELD_MODIFIER, FIELD_KEY] {
                    let hid = get_ascii_to_hid_key_map_value(language.index(), ascii, field);
                    let ps2 = get_ascii_to_ps2_key_map_value(language.index(), ascii, field);
                    assert_eq!(hid.map(str::len), Some(2), "{language} hid {ascii}");
                    assert_eq!(ps2.map(str::len), Some(2), "{language} ps2 {ascii}");
                }
            }
        }
    }

    #[test]
    fn test_german_swaps_y_and_z() {
        let y = Language::German.hid_key_stroke(b'y').expect("y");
        let z = Language::German.hid_key_stroke(b'z').expect("z");
        assert_eq!(y.key, 0x1D);
        assert_eq!(z.key, 0x1C);
    }

    #[test]
    fn test_key_stroke_rows() {
        let stroke = Language::UsaEnglish.hid_key_stroke(b'A').expect("row");
        assert_eq!(stroke, KeyStroke { modifier: 0x02, key: 0x04 });
        let stroke = Language::UsaEnglish.ps2_key_stroke(b'\n').expect("row");
        assert_eq!(stroke.key, 0x5A);
        assert_eq!(Language::UsaEnglish.hid_key_stroke(1), None);
    }

    #[test]
    fn test_language_index() {
        assert_eq!(Language::from_index(0), Some(Language::UsaEnglish));
        assert_eq!(Language::from_index(10), Some(Language::Turkey));
        assert_eq!(Language::from_index(11), None);
        assert_eq!(Language::Turkey.index(), 10);
    }
}
