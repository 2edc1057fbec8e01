//! ASCII to PS/2 scan code tables.
//!
//! Make codes from scan code set 2. Modifier bits follow the HID tables:
//! `02` shift, `40` AltGr.

// ============================================================================
// Imports
// ============================================================================

use super::KeyTable;

// ============================================================================
// Tables
// ============================================================================

/// PS/2 tables in [`Language`](super::Language) order.
pub(super) static TABLES: [&KeyTable; 11] = [
    &USA_ENGLISH,
    &SPANISH,
    &DANISH,
    &FRENCH,
    &GERMAN,
    &ITALIAN,
    &NORWEGIAN,
    &SWEDISH,
    &UK_ENGLISH,
    &ISRAEL,
    &TURKEY,
];

#[rustfmt::skip]
const USA_ENGLISH: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "66"],
    /* 0x09 */ ["00", "0D"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "76"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "29"],
    /* 0x21 */ ["02", "16"], ["02", "52"], ["02", "26"], ["02", "25"], ["02", "2E"], ["02", "3D"], ["00", "52"], ["02", "46"],
    /* 0x29 */ ["02", "45"], ["02", "3E"], ["02", "55"], ["00", "41"], ["00", "4E"], ["00", "49"], ["00", "4A"], ["00", "45"],
    /* 0x31 */ ["00", "16"], ["00", "1E"], ["00", "26"], ["00", "25"], ["00", "2E"], ["00", "36"], ["00", "3D"], ["00", "3E"],
    /* 0x39 */ ["00", "46"], ["02", "4C"], ["00", "4C"], ["02", "41"], ["00", "55"], ["02", "49"], ["02", "4A"], ["02", "1E"],
    /* 0x41 */ ["02", "1C"], ["02", "32"], ["02", "21"], ["02", "23"], ["02", "24"], ["02", "2B"], ["02", "34"], ["02", "33"],
    /* 0x49 */ ["02", "43"], ["02", "3B"], ["02", "42"], ["02", "4B"], ["02", "3A"], ["02", "31"], ["02", "44"], ["02", "4D"],
    /* 0x51 */ ["02", "15"], ["02", "2D"], ["02", "1B"], ["02", "2C"], ["02", "3C"], ["02", "2A"], ["02", "1D"], ["02", "22"],
    /* 0x59 */ ["02", "35"], ["02", "1A"], ["00", "54"], ["00", "5D"], ["00", "5B"], ["02", "36"], ["02", "4E"], ["00", "0E"],
    /* 0x61 */ ["00", "1C"], ["00", "32"], ["00", "21"], ["00", "23"], ["00", "24"], ["00", "2B"], ["00", "34"], ["00", "33"],
    /* 0x69 */ ["00", "43"], ["00", "3B"], ["00", "42"], ["00", "4B"], ["00", "3A"], ["00", "31"], ["00", "44"], ["00", "4D"],
    /* 0x71 */ ["00", "15"], ["00", "2D"], ["00", "1B"], ["00", "2C"], ["00", "3C"], ["00", "2A"], ["00", "1D"], ["00", "22"],
    /* 0x79 */ ["00", "35"], ["00", "1A"], ["02", "54"], ["02", "5D"], ["02", "5B"], ["02", "0E"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const SPANISH: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "66"],
    /* 0x09 */ ["00", "0D"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "76"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "29"],
    /* 0x21 */ ["02", "16"], ["02", "1E"], ["40", "26"], ["02", "25"], ["02", "2E"], ["02", "36"], ["00", "4E"], ["02", "3E"],
    /* 0x29 */ ["02", "46"], ["02", "5B"], ["00", "5B"], ["00", "41"], ["00", "4A"], ["00", "49"], ["02", "3D"], ["00", "45"],
    /* 0x31 */ ["00", "16"], ["00", "1E"], ["00", "26"], ["00", "25"], ["00", "2E"], ["00", "36"], ["00", "3D"], ["00", "3E"],
    /* 0x39 */ ["00", "46"], ["02", "49"], ["02", "41"], ["00", "61"], ["02", "45"], ["02", "61"], ["02", "4E"], ["40", "1E"],
    /* 0x41 */ ["02", "1C"], ["02", "32"], ["02", "21"], ["02", "23"], ["02", "24"], ["02", "2B"], ["02", "34"], ["02", "33"],
    /* 0x49 */ ["02", "43"], ["02", "3B"], ["02", "42"], ["02", "4B"], ["02", "3A"], ["02", "31"], ["02", "44"], ["02", "4D"],
    /* 0x51 */ ["02", "15"], ["02", "2D"], ["02", "1B"], ["02", "2C"], ["02", "3C"], ["02", "2A"], ["02", "1D"], ["02", "22"],
    /* 0x59 */ ["02", "35"], ["02", "1A"], ["40", "54"], ["40", "0E"], ["40", "5B"], ["02", "54"], ["02", "4A"], ["00", "54"],
    /* 0x61 */ ["00", "1C"], ["00", "32"], ["00", "21"], ["00", "23"], ["00", "24"], ["00", "2B"], ["00", "34"], ["00", "33"],
    /* 0x69 */ ["00", "43"], ["00", "3B"], ["00", "42"], ["00", "4B"], ["00", "3A"], ["00", "31"], ["00", "44"], ["00", "4D"],
    /* 0x71 */ ["00", "15"], ["00", "2D"], ["00", "1B"], ["00", "2C"], ["00", "3C"], ["00", "2A"], ["00", "1D"], ["00", "22"],
    /* 0x79 */ ["00", "35"], ["00", "1A"], ["40", "52"], ["40", "16"], ["40", "5D"], ["40", "25"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const DANISH: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "66"],
    /* 0x09 */ ["00", "0D"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "76"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "29"],
    /* 0x21 */ ["02", "16"], ["02", "1E"], ["02", "26"], ["40", "25"], ["02", "2E"], ["02", "36"], ["00", "5D"], ["02", "3E"],
    /* 0x29 */ ["02", "46"], ["02", "5D"], ["00", "4E"], ["00", "41"], ["00", "4A"], ["00", "49"], ["02", "3D"], ["00", "45"],
    /* 0x31 */ ["00", "16"], ["00", "1E"], ["00", "26"], ["00", "25"], ["00", "2E"], ["00", "36"], ["00", "3D"], ["00", "3E"],
    /* 0x39 */ ["00", "46"], ["02", "49"], ["02", "41"], ["00", "61"], ["02", "45"], ["02", "61"], ["02", "4E"], ["40", "1E"],
    /* 0x41 */ ["02", "1C"], ["02", "32"], ["02", "21"], ["02", "23"], ["02", "24"], ["02", "2B"], ["02", "34"], ["02", "33"],
    /* 0x49 */ ["02", "43"], ["02", "3B"], ["02", "42"], ["02", "4B"], ["02", "3A"], ["02", "31"], ["02", "44"], ["02", "4D"],
    /* 0x51 */ ["02", "15"], ["02", "2D"], ["02", "1B"], ["02", "2C"], ["02", "3C"], ["02", "2A"], ["02", "1D"], ["02", "22"],
    /* 0x59 */ ["02", "35"], ["02", "1A"], ["40", "3E"], ["40", "61"], ["40", "46"], ["02", "5B"], ["02", "4A"], ["02", "55"],
    /* 0x61 */ ["00", "1C"], ["00", "32"], ["00", "21"], ["00", "23"], ["00", "24"], ["00", "2B"], ["00", "34"], ["00", "33"],
    /* 0x69 */ ["00", "43"], ["00", "3B"], ["00", "42"], ["00", "4B"], ["00", "3A"], ["00", "31"], ["00", "44"], ["00", "4D"],
    /* 0x71 */ ["00", "15"], ["00", "2D"], ["00", "1B"], ["00", "2C"], ["00", "3C"], ["00", "2A"], ["00", "1D"], ["00", "22"],
    /* 0x79 */ ["00", "35"], ["00", "1A"], ["40", "3D"], ["40", "55"], ["40", "45"], ["40", "5B"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const FRENCH: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "66"],
    /* 0x09 */ ["00", "0D"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "76"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "29"],
    /* 0x21 */ ["00", "4A"], ["00", "26"], ["40", "26"], ["00", "5B"], ["02", "52"], ["00", "16"], ["00", "25"], ["00", "2E"],
    /* 0x29 */ ["00", "4E"], ["00", "5D"], ["02", "55"], ["00", "3A"], ["00", "36"], ["02", "41"], ["02", "49"], ["02", "45"],
    /* 0x31 */ ["02", "16"], ["02", "1E"], ["02", "26"], ["02", "25"], ["02", "2E"], ["02", "36"], ["02", "3D"], ["02", "3E"],
    /* 0x39 */ ["02", "46"], ["00", "49"], ["00", "41"], ["00", "61"], ["00", "55"], ["02", "61"], ["02", "3A"], ["40", "45"],
    /* 0x41 */ ["02", "15"], ["02", "32"], ["02", "21"], ["02", "23"], ["02", "24"], ["02", "2B"], ["02", "34"], ["02", "33"],
    /* 0x49 */ ["02", "43"], ["02", "3B"], ["02", "42"], ["02", "4B"], ["02", "4C"], ["02", "31"], ["02", "44"], ["02", "4D"],
    /* 0x51 */ ["02", "1C"], ["02", "2D"], ["02", "1B"], ["02", "2C"], ["02", "3C"], ["02", "2A"], ["02", "1A"], ["02", "22"],
    /* 0x59 */ ["02", "35"], ["02", "1D"], ["40", "2E"], ["40", "3E"], ["40", "4E"], ["00", "54"], ["00", "3E"], ["40", "3D"],
    /* 0x61 */ ["00", "15"], ["00", "32"], ["00", "21"], ["00", "23"], ["00", "24"], ["00", "2B"], ["00", "34"], ["00", "33"],
    /* 0x69 */ ["00", "43"], ["00", "3B"], ["00", "42"], ["00", "4B"], ["00", "4C"], ["00", "31"], ["00", "44"], ["00", "4D"],
    /* 0x71 */ ["00", "1C"], ["00", "2D"], ["00", "1B"], ["00", "2C"], ["00", "3C"], ["00", "2A"], ["00", "1A"], ["00", "22"],
    /* 0x79 */ ["00", "35"], ["00", "1D"], ["40", "25"], ["40", "36"], ["40", "55"], ["40", "1E"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const GERMAN: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "66"],
    /* 0x09 */ ["00", "0D"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "76"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "29"],
    /* 0x21 */ ["02", "16"], ["02", "1E"], ["00", "5D"], ["02", "25"], ["02", "2E"], ["02", "36"], ["02", "5D"], ["02", "3E"],
    /* 0x29 */ ["02", "46"], ["02", "5B"], ["00", "5B"], ["00", "41"], ["00", "4A"], ["00", "49"], ["02", "3D"], ["00", "45"],
    /* 0x31 */ ["00", "16"], ["00", "1E"], ["00", "26"], ["00", "25"], ["00", "2E"], ["00", "36"], ["00", "3D"], ["00", "3E"],
    /* 0x39 */ ["00", "46"], ["02", "49"], ["02", "41"], ["00", "61"], ["02", "45"], ["02", "61"], ["02", "4E"], ["40", "15"],
    /* 0x41 */ ["02", "1C"], ["02", "32"], ["02", "21"], ["02", "23"], ["02", "24"], ["02", "2B"], ["02", "34"], ["02", "33"],
    /* 0x49 */ ["02", "43"], ["02", "3B"], ["02", "42"], ["02", "4B"], ["02", "3A"], ["02", "31"], ["02", "44"], ["02", "4D"],
    /* 0x51 */ ["02", "15"], ["02", "2D"], ["02", "1B"], ["02", "2C"], ["02", "3C"], ["02", "2A"], ["02", "1D"], ["02", "22"],
    /* 0x59 */ ["02", "1A"], ["02", "35"], ["40", "3E"], ["40", "4E"], ["40", "46"], ["00", "0E"], ["02", "4A"], ["02", "55"],
    /* 0x61 */ ["00", "1C"], ["00", "32"], ["00", "21"], ["00", "23"], ["00", "24"], ["00", "2B"], ["00", "34"], ["00", "33"],
    /* 0x69 */ ["00", "43"], ["00", "3B"], ["00", "42"], ["00", "4B"], ["00", "3A"], ["00", "31"], ["00", "44"], ["00", "4D"],
    /* 0x71 */ ["00", "15"], ["00", "2D"], ["00", "1B"], ["00", "2C"], ["00", "3C"], ["00", "2A"], ["00", "1D"], ["00", "22"],
    /* 0x79 */ ["00", "1A"], ["00", "35"], ["40", "3D"], ["40", "61"], ["40", "45"], ["40", "5B"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const ITALIAN: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "66"],
    /* 0x09 */ ["00", "0D"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "76"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "29"],
    /* 0x21 */ ["02", "16"], ["02", "1E"], ["40", "52"], ["02", "25"], ["02", "2E"], ["02", "36"], ["00", "4E"], ["02", "3E"],
    /* 0x29 */ ["02", "46"], ["02", "5B"], ["00", "5B"], ["00", "41"], ["00", "4A"], ["00", "49"], ["02", "3D"], ["00", "45"],
    /* 0x31 */ ["00", "16"], ["00", "1E"], ["00", "26"], ["00", "25"], ["00", "2E"], ["00", "36"], ["00", "3D"], ["00", "3E"],
    /* 0x39 */ ["00", "46"], ["02", "49"], ["02", "41"], ["00", "61"], ["02", "45"], ["02", "61"], ["02", "4E"], ["40", "4C"],
    /* 0x41 */ ["02", "1C"], ["02", "32"], ["02", "21"], ["02", "23"], ["02", "24"], ["02", "2B"], ["02", "34"], ["02", "33"],
    /* 0x49 */ ["02", "43"], ["02", "3B"], ["02", "42"], ["02", "4B"], ["02", "3A"], ["02", "31"], ["02", "44"], ["02", "4D"],
    /* 0x51 */ ["02", "15"], ["02", "2D"], ["02", "1B"], ["02", "2C"], ["02", "3C"], ["02", "2A"], ["02", "1D"], ["02", "22"],
    /* 0x59 */ ["02", "35"], ["02", "1A"], ["40", "54"], ["00", "0E"], ["40", "5B"], ["02", "55"], ["02", "4A"], ["00", "00"],
    /* 0x61 */ ["00", "1C"], ["00", "32"], ["00", "21"], ["00", "23"], ["00", "24"], ["00", "2B"], ["00", "34"], ["00", "33"],
    /* 0x69 */ ["00", "43"], ["00", "3B"], ["00", "42"], ["00", "4B"], ["00", "3A"], ["00", "31"], ["00", "44"], ["00", "4D"],
    /* 0x71 */ ["00", "15"], ["00", "2D"], ["00", "1B"], ["00", "2C"], ["00", "3C"], ["00", "2A"], ["00", "1D"], ["00", "22"],
    /* 0x79 */ ["00", "35"], ["00", "1A"], ["00", "00"], ["02", "0E"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const NORWEGIAN: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "66"],
    /* 0x09 */ ["00", "0D"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "76"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "29"],
    /* 0x21 */ ["02", "16"], ["02", "1E"], ["02", "26"], ["40", "25"], ["02", "2E"], ["02", "36"], ["00", "5D"], ["02", "3E"],
    /* 0x29 */ ["02", "46"], ["02", "5D"], ["00", "4E"], ["00", "41"], ["00", "4A"], ["00", "49"], ["02", "3D"], ["00", "45"],
    /* 0x31 */ ["00", "16"], ["00", "1E"], ["00", "26"], ["00", "25"], ["00", "2E"], ["00", "36"], ["00", "3D"], ["00", "3E"],
    /* 0x39 */ ["00", "46"], ["02", "49"], ["02", "41"], ["00", "61"], ["02", "45"], ["02", "61"], ["02", "4E"], ["40", "1E"],
    /* 0x41 */ ["02", "1C"], ["02", "32"], ["02", "21"], ["02", "23"], ["02", "24"], ["02", "2B"], ["02", "34"], ["02", "33"],
    /* 0x49 */ ["02", "43"], ["02", "3B"], ["02", "42"], ["02", "4B"], ["02", "3A"], ["02", "31"], ["02", "44"], ["02", "4D"],
    /* 0x51 */ ["02", "15"], ["02", "2D"], ["02", "1B"], ["02", "2C"], ["02", "3C"], ["02", "2A"], ["02", "1D"], ["02", "22"],
    /* 0x59 */ ["02", "35"], ["02", "1A"], ["40", "3E"], ["00", "55"], ["40", "46"], ["02", "5B"], ["02", "4A"], ["02", "55"],
    /* 0x61 */ ["00", "1C"], ["00", "32"], ["00", "21"], ["00", "23"], ["00", "24"], ["00", "2B"], ["00", "34"], ["00", "33"],
    /* 0x69 */ ["00", "43"], ["00", "3B"], ["00", "42"], ["00", "4B"], ["00", "3A"], ["00", "31"], ["00", "44"], ["00", "4D"],
    /* 0x71 */ ["00", "15"], ["00", "2D"], ["00", "1B"], ["00", "2C"], ["00", "3C"], ["00", "2A"], ["00", "1D"], ["00", "22"],
    /* 0x79 */ ["00", "35"], ["00", "1A"], ["40", "3D"], ["00", "0E"], ["40", "45"], ["40", "5B"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const SWEDISH: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "66"],
    /* 0x09 */ ["00", "0D"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "76"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "29"],
    /* 0x21 */ ["02", "16"], ["02", "1E"], ["02", "26"], ["40", "25"], ["02", "2E"], ["02", "36"], ["00", "5D"], ["02", "3E"],
    /* 0x29 */ ["02", "46"], ["02", "5D"], ["00", "4E"], ["00", "41"], ["00", "4A"], ["00", "49"], ["02", "3D"], ["00", "45"],
    /* 0x31 */ ["00", "16"], ["00", "1E"], ["00", "26"], ["00", "25"], ["00", "2E"], ["00", "36"], ["00", "3D"], ["00", "3E"],
    /* 0x39 */ ["00", "46"], ["02", "49"], ["02", "41"], ["00", "61"], ["02", "45"], ["02", "61"], ["02", "4E"], ["40", "1E"],
    /* 0x41 */ ["02", "1C"], ["02", "32"], ["02", "21"], ["02", "23"], ["02", "24"], ["02", "2B"], ["02", "34"], ["02", "33"],
    /* 0x49 */ ["02", "43"], ["02", "3B"], ["02", "42"], ["02", "4B"], ["02", "3A"], ["02", "31"], ["02", "44"], ["02", "4D"],
    /* 0x51 */ ["02", "15"], ["02", "2D"], ["02", "1B"], ["02", "2C"], ["02", "3C"], ["02", "2A"], ["02", "1D"], ["02", "22"],
    /* 0x59 */ ["02", "35"], ["02", "1A"], ["40", "3E"], ["40", "4E"], ["40", "46"], ["02", "5B"], ["02", "4A"], ["02", "55"],
    /* 0x61 */ ["00", "1C"], ["00", "32"], ["00", "21"], ["00", "23"], ["00", "24"], ["00", "2B"], ["00", "34"], ["00", "33"],
    /* 0x69 */ ["00", "43"], ["00", "3B"], ["00", "42"], ["00", "4B"], ["00", "3A"], ["00", "31"], ["00", "44"], ["00", "4D"],
    /* 0x71 */ ["00", "15"], ["00", "2D"], ["00", "1B"], ["00", "2C"], ["00", "3C"], ["00", "2A"], ["00", "1D"], ["00", "22"],
    /* 0x79 */ ["00", "35"], ["00", "1A"], ["40", "3D"], ["40", "61"], ["40", "45"], ["40", "5B"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const UK_ENGLISH: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "66"],
    /* 0x09 */ ["00", "0D"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "76"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "29"],
    /* 0x21 */ ["02", "16"], ["02", "1E"], ["00", "5D"], ["02", "25"], ["02", "2E"], ["02", "3D"], ["00", "52"], ["02", "46"],
    /* 0x29 */ ["02", "45"], ["02", "3E"], ["02", "55"], ["00", "41"], ["00", "4E"], ["00", "49"], ["00", "4A"], ["00", "45"],
    /* 0x31 */ ["00", "16"], ["00", "1E"], ["00", "26"], ["00", "25"], ["00", "2E"], ["00", "36"], ["00", "3D"], ["00", "3E"],
    /* 0x39 */ ["00", "46"], ["02", "4C"], ["00", "4C"], ["02", "41"], ["00", "55"], ["02", "49"], ["02", "4A"], ["02", "52"],
    /* 0x41 */ ["02", "1C"], ["02", "32"], ["02", "21"], ["02", "23"], ["02", "24"], ["02", "2B"], ["02", "34"], ["02", "33"],
    /* 0x49 */ ["02", "43"], ["02", "3B"], ["02", "42"], ["02", "4B"], ["02", "3A"], ["02", "31"], ["02", "44"], ["02", "4D"],
    /* 0x51 */ ["02", "15"], ["02", "2D"], ["02", "1B"], ["02", "2C"], ["02", "3C"], ["02", "2A"], ["02", "1D"], ["02", "22"],
    /* 0x59 */ ["02", "35"], ["02", "1A"], ["00", "54"], ["00", "61"], ["00", "5B"], ["02", "36"], ["02", "4E"], ["00", "0E"],
    /* 0x61 */ ["00", "1C"], ["00", "32"], ["00", "21"], ["00", "23"], ["00", "24"], ["00", "2B"], ["00", "34"], ["00", "33"],
    /* 0x69 */ ["00", "43"], ["00", "3B"], ["00", "42"], ["00", "4B"], ["00", "3A"], ["00", "31"], ["00", "44"], ["00", "4D"],
    /* 0x71 */ ["00", "15"], ["00", "2D"], ["00", "1B"], ["00", "2C"], ["00", "3C"], ["00", "2A"], ["00", "1D"], ["00", "22"],
    /* 0x79 */ ["00", "35"], ["00", "1A"], ["02", "54"], ["02", "61"], ["02", "5B"], ["02", "5D"], ["00", "00"], ["00", "00"],
];

/// Latin layer of the Israeli layout matches the US layout.
const ISRAEL: KeyTable = USA_ENGLISH;

#[rustfmt::skip]
const TURKEY: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "66"],
    /* 0x09 */ ["00", "0D"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "5A"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "76"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "29"],
    /* 0x21 */ ["02", "16"], ["00", "0E"], ["40", "26"], ["40", "25"], ["02", "2E"], ["02", "36"], ["02", "1E"], ["02", "3E"],
    /* 0x29 */ ["02", "46"], ["00", "4E"], ["02", "25"], ["00", "5D"], ["00", "55"], ["00", "4A"], ["02", "3D"], ["00", "45"],
    /* 0x31 */ ["00", "16"], ["00", "1E"], ["00", "26"], ["00", "25"], ["00", "2E"], ["00", "36"], ["00", "3D"], ["00", "3E"],
    /* 0x39 */ ["00", "46"], ["02", "4A"], ["02", "5D"], ["00", "61"], ["02", "45"], ["02", "61"], ["02", "4E"], ["40", "15"],
    /* 0x41 */ ["02", "1C"], ["02", "32"], ["02", "21"], ["02", "23"], ["02", "24"], ["02", "2B"], ["02", "34"], ["02", "33"],
    /* 0x49 */ ["02", "43"], ["02", "3B"], ["02", "42"], ["02", "4B"], ["02", "3A"], ["02", "31"], ["02", "44"], ["02", "4D"],
    /* 0x51 */ ["02", "15"], ["02", "2D"], ["02", "1B"], ["02", "2C"], ["02", "3C"], ["02", "2A"], ["02", "1D"], ["02", "22"],
    /* 0x59 */ ["02", "35"], ["02", "1A"], ["40", "3E"], ["40", "4E"], ["40", "46"], ["02", "26"], ["02", "55"], ["40", "5D"],
    /* 0x61 */ ["00", "1C"], ["00", "32"], ["00", "21"], ["00", "23"], ["00", "24"], ["00", "2B"], ["00", "34"], ["00", "33"],
    /* 0x69 */ ["00", "52"], ["00", "3B"], ["00", "42"], ["00", "4B"], ["00", "3A"], ["00", "31"], ["00", "44"], ["00", "4D"],
    /* 0x71 */ ["00", "15"], ["00", "2D"], ["00", "1B"], ["00", "2C"], ["00", "3C"], ["00", "2A"], ["00", "1D"], ["00", "22"],
    /* 0x79 */ ["00", "35"], ["00", "1A"], ["40", "3D"], ["40", "55"], ["40", "45"], ["40", "5B"], ["00", "00"], ["00", "00"],
];
