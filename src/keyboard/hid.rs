//! ASCII to USB HID usage tables.
//!
//! Usage ids from the keyboard/keypad page. Modifier bits: `02` left shift,
//! `40` right alt (AltGr).

// ============================================================================
// Imports
// ============================================================================

use super::KeyTable;

// ============================================================================
// Tables
// ============================================================================

/// HID tables in [`Language`](super::Language) order.
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
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2A"],
    /* 0x09 */ ["00", "2B"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "29"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2C"],
    /* 0x21 */ ["02", "1E"], ["02", "34"], ["02", "20"], ["02", "21"], ["02", "22"], ["02", "24"], ["00", "34"], ["02", "26"],
    /* 0x29 */ ["02", "27"], ["02", "25"], ["02", "2E"], ["00", "36"], ["00", "2D"], ["00", "37"], ["00", "38"], ["00", "27"],
    /* 0x31 */ ["00", "1E"], ["00", "1F"], ["00", "20"], ["00", "21"], ["00", "22"], ["00", "23"], ["00", "24"], ["00", "25"],
    /* 0x39 */ ["00", "26"], ["02", "33"], ["00", "33"], ["02", "36"], ["00", "2E"], ["02", "37"], ["02", "38"], ["02", "1F"],
    /* 0x41 */ ["02", "04"], ["02", "05"], ["02", "06"], ["02", "07"], ["02", "08"], ["02", "09"], ["02", "0A"], ["02", "0B"],
    /* 0x49 */ ["02", "0C"], ["02", "0D"], ["02", "0E"], ["02", "0F"], ["02", "10"], ["02", "11"], ["02", "12"], ["02", "13"],
    /* 0x51 */ ["02", "14"], ["02", "15"], ["02", "16"], ["02", "17"], ["02", "18"], ["02", "19"], ["02", "1A"], ["02", "1B"],
    /* 0x59 */ ["02", "1C"], ["02", "1D"], ["00", "2F"], ["00", "31"], ["00", "30"], ["02", "23"], ["02", "2D"], ["00", "35"],
    /* 0x61 */ ["00", "04"], ["00", "05"], ["00", "06"], ["00", "07"], ["00", "08"], ["00", "09"], ["00", "0A"], ["00", "0B"],
    /* 0x69 */ ["00", "0C"], ["00", "0D"], ["00", "0E"], ["00", "0F"], ["00", "10"], ["00", "11"], ["00", "12"], ["00", "13"],
    /* 0x71 */ ["00", "14"], ["00", "15"], ["00", "16"], ["00", "17"], ["00", "18"], ["00", "19"], ["00", "1A"], ["00", "1B"],
    /* 0x79 */ ["00", "1C"], ["00", "1D"], ["02", "2F"], ["02", "31"], ["02", "30"], ["02", "35"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const SPANISH: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2A"],
    /* 0x09 */ ["00", "2B"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "29"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2C"],
    /* 0x21 */ ["02", "1E"], ["02", "1F"], ["40", "20"], ["02", "21"], ["02", "22"], ["02", "23"], ["00", "2D"], ["02", "25"],
    /* 0x29 */ ["02", "26"], ["02", "30"], ["00", "30"], ["00", "36"], ["00", "38"], ["00", "37"], ["02", "24"], ["00", "27"],
    /* 0x31 */ ["00", "1E"], ["00", "1F"], ["00", "20"], ["00", "21"], ["00", "22"], ["00", "23"], ["00", "24"], ["00", "25"],
    /* 0x39 */ ["00", "26"], ["02", "37"], ["02", "36"], ["00", "64"], ["02", "27"], ["02", "64"], ["02", "2D"], ["40", "1F"],
    /* 0x41 */ ["02", "04"], ["02", "05"], ["02", "06"], ["02", "07"], ["02", "08"], ["02", "09"], ["02", "0A"], ["02", "0B"],
    /* 0x49 */ ["02", "0C"], ["02", "0D"], ["02", "0E"], ["02", "0F"], ["02", "10"], ["02", "11"], ["02", "12"], ["02", "13"],
    /* 0x51 */ ["02", "14"], ["02", "15"], ["02", "16"], ["02", "17"], ["02", "18"], ["02", "19"], ["02", "1A"], ["02", "1B"],
    /* 0x59 */ ["02", "1C"], ["02", "1D"], ["40", "2F"], ["40", "35"], ["40", "30"], ["02", "2F"], ["02", "38"], ["00", "2F"],
    /* 0x61 */ ["00", "04"], ["00", "05"], ["00", "06"], ["00", "07"], ["00", "08"], ["00", "09"], ["00", "0A"], ["00", "0B"],
    /* 0x69 */ ["00", "0C"], ["00", "0D"], ["00", "0E"], ["00", "0F"], ["00", "10"], ["00", "11"], ["00", "12"], ["00", "13"],
    /* 0x71 */ ["00", "14"], ["00", "15"], ["00", "16"], ["00", "17"], ["00", "18"], ["00", "19"], ["00", "1A"], ["00", "1B"],
    /* 0x79 */ ["00", "1C"], ["00", "1D"], ["40", "34"], ["40", "1E"], ["40", "31"], ["40", "21"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const DANISH: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2A"],
    /* 0x09 */ ["00", "2B"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "29"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2C"],
    /* 0x21 */ ["02", "1E"], ["02", "1F"], ["02", "20"], ["40", "21"], ["02", "22"], ["02", "23"], ["00", "31"], ["02", "25"],
    /* 0x29 */ ["02", "26"], ["02", "31"], ["00", "2D"], ["00", "36"], ["00", "38"], ["00", "37"], ["02", "24"], ["00", "27"],
    /* 0x31 */ ["00", "1E"], ["00", "1F"], ["00", "20"], ["00", "21"], ["00", "22"], ["00", "23"], ["00", "24"], ["00", "25"],
    /* 0x39 */ ["00", "26"], ["02", "37"], ["02", "36"], ["00", "64"], ["02", "27"], ["02", "64"], ["02", "2D"], ["40", "1F"],
    /* 0x41 */ ["02", "04"], ["02", "05"], ["02", "06"], ["02", "07"], ["02", "08"], ["02", "09"], ["02", "0A"], ["02", "0B"],
    /* 0x49 */ ["02", "0C"], ["02", "0D"], ["02", "0E"], ["02", "0F"], ["02", "10"], ["02", "11"], ["02", "12"], ["02", "13"],
    /* 0x51 */ ["02", "14"], ["02", "15"], ["02", "16"], ["02", "17"], ["02", "18"], ["02", "19"], ["02", "1A"], ["02", "1B"],
    /* 0x59 */ ["02", "1C"], ["02", "1D"], ["40", "25"], ["40", "64"], ["40", "26"], ["02", "30"], ["02", "38"], ["02", "2E"],
    /* 0x61 */ ["00", "04"], ["00", "05"], ["00", "06"], ["00", "07"], ["00", "08"], ["00", "09"], ["00", "0A"], ["00", "0B"],
    /* 0x69 */ ["00", "0C"], ["00", "0D"], ["00", "0E"], ["00", "0F"], ["00", "10"], ["00", "11"], ["00", "12"], ["00", "13"],
    /* 0x71 */ ["00", "14"], ["00", "15"], ["00", "16"], ["00", "17"], ["00", "18"], ["00", "19"], ["00", "1A"], ["00", "1B"],
    /* 0x79 */ ["00", "1C"], ["00", "1D"], ["40", "24"], ["40", "2E"], ["40", "27"], ["40", "30"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const FRENCH: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2A"],
    /* 0x09 */ ["00", "2B"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "29"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2C"],
    /* 0x21 */ ["00", "38"], ["00", "20"], ["40", "20"], ["00", "30"], ["02", "34"], ["00", "1E"], ["00", "21"], ["00", "22"],
    /* 0x29 */ ["00", "2D"], ["00", "31"], ["02", "2E"], ["00", "10"], ["00", "23"], ["02", "36"], ["02", "37"], ["02", "27"],
    /* 0x31 */ ["02", "1E"], ["02", "1F"], ["02", "20"], ["02", "21"], ["02", "22"], ["02", "23"], ["02", "24"], ["02", "25"],
    /* 0x39 */ ["02", "26"], ["00", "37"], ["00", "36"], ["00", "64"], ["00", "2E"], ["02", "64"], ["02", "10"], ["40", "27"],
    /* 0x41 */ ["02", "14"], ["02", "05"], ["02", "06"], ["02", "07"], ["02", "08"], ["02", "09"], ["02", "0A"], ["02", "0B"],
    /* 0x49 */ ["02", "0C"], ["02", "0D"], ["02", "0E"], ["02", "0F"], ["02", "33"], ["02", "11"], ["02", "12"], ["02", "13"],
    /* 0x51 */ ["02", "04"], ["02", "15"], ["02", "16"], ["02", "17"], ["02", "18"], ["02", "19"], ["02", "1D"], ["02", "1B"],
    /* 0x59 */ ["02", "1C"], ["02", "1A"], ["40", "22"], ["40", "25"], ["40", "2D"], ["00", "2F"], ["00", "25"], ["40", "24"],
    /* 0x61 */ ["00", "14"], ["00", "05"], ["00", "06"], ["00", "07"], ["00", "08"], ["00", "09"], ["00", "0A"], ["00", "0B"],
    /* 0x69 */ ["00", "0C"], ["00", "0D"], ["00", "0E"], ["00", "0F"], ["00", "33"], ["00", "11"], ["00", "12"], ["00", "13"],
    /* 0x71 */ ["00", "04"], ["00", "15"], ["00", "16"], ["00", "17"], ["00", "18"], ["00", "19"], ["00", "1D"], ["00", "1B"],
    /* 0x79 */ ["00", "1C"], ["00", "1A"], ["40", "21"], ["40", "23"], ["40", "2E"], ["40", "1F"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const GERMAN: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2A"],
    /* 0x09 */ ["00", "2B"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "29"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2C"],
    /* 0x21 */ ["02", "1E"], ["02", "1F"], ["00", "31"], ["02", "21"], ["02", "22"], ["02", "23"], ["02", "31"], ["02", "25"],
    /* 0x29 */ ["02", "26"], ["02", "30"], ["00", "30"], ["00", "36"], ["00", "38"], ["00", "37"], ["02", "24"], ["00", "27"],
    /* 0x31 */ ["00", "1E"], ["00", "1F"], ["00", "20"], ["00", "21"], ["00", "22"], ["00", "23"], ["00", "24"], ["00", "25"],
    /* 0x39 */ ["00", "26"], ["02", "37"], ["02", "36"], ["00", "64"], ["02", "27"], ["02", "64"], ["02", "2D"], ["40", "14"],
    /* 0x41 */ ["02", "04"], ["02", "05"], ["02", "06"], ["02", "07"], ["02", "08"], ["02", "09"], ["02", "0A"], ["02", "0B"],
    /* 0x49 */ ["02", "0C"], ["02", "0D"], ["02", "0E"], ["02", "0F"], ["02", "10"], ["02", "11"], ["02", "12"], ["02", "13"],
    /* 0x51 */ ["02", "14"], ["02", "15"], ["02", "16"], ["02", "17"], ["02", "18"], ["02", "19"], ["02", "1A"], ["02", "1B"],
    /* 0x59 */ ["02", "1D"], ["02", "1C"], ["40", "25"], ["40", "2D"], ["40", "26"], ["00", "35"], ["02", "38"], ["02", "2E"],
    /* 0x61 */ ["00", "04"], ["00", "05"], ["00", "06"], ["00", "07"], ["00", "08"], ["00", "09"], ["00", "0A"], ["00", "0B"],
    /* 0x69 */ ["00", "0C"], ["00", "0D"], ["00", "0E"], ["00", "0F"], ["00", "10"], ["00", "11"], ["00", "12"], ["00", "13"],
    /* 0x71 */ ["00", "14"], ["00", "15"], ["00", "16"], ["00", "17"], ["00", "18"], ["00", "19"], ["00", "1A"], ["00", "1B"],
    /* 0x79 */ ["00", "1D"], ["00", "1C"], ["40", "24"], ["40", "64"], ["40", "27"], ["40", "30"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const ITALIAN: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2A"],
    /* 0x09 */ ["00", "2B"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "29"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2C"],
    /* 0x21 */ ["02", "1E"], ["02", "1F"], ["40", "34"], ["02", "21"], ["02", "22"], ["02", "23"], ["00", "2D"], ["02", "25"],
    /* 0x29 */ ["02", "26"], ["02", "30"], ["00", "30"], ["00", "36"], ["00", "38"], ["00", "37"], ["02", "24"], ["00", "27"],
    /* 0x31 */ ["00", "1E"], ["00", "1F"], ["00", "20"], ["00", "21"], ["00", "22"], ["00", "23"], ["00", "24"], ["00", "25"],
    /* 0x39 */ ["00", "26"], ["02", "37"], ["02", "36"], ["00", "64"], ["02", "27"], ["02", "64"], ["02", "2D"], ["40", "33"],
    /* 0x41 */ ["02", "04"], ["02", "05"], ["02", "06"], ["02", "07"], ["02", "08"], ["02", "09"], ["02", "0A"], ["02", "0B"],
    /* 0x49 */ ["02", "0C"], ["02", "0D"], ["02", "0E"], ["02", "0F"], ["02", "10"], ["02", "11"], ["02", "12"], ["02", "13"],
    /* 0x51 */ ["02", "14"], ["02", "15"], ["02", "16"], ["02", "17"], ["02", "18"], ["02", "19"], ["02", "1A"], ["02", "1B"],
    /* 0x59 */ ["02", "1C"], ["02", "1D"], ["40", "2F"], ["00", "35"], ["40", "30"], ["02", "2E"], ["02", "38"], ["00", "00"],
    /* 0x61 */ ["00", "04"], ["00", "05"], ["00", "06"], ["00", "07"], ["00", "08"], ["00", "09"], ["00", "0A"], ["00", "0B"],
    /* 0x69 */ ["00", "0C"], ["00", "0D"], ["00", "0E"], ["00", "0F"], ["00", "10"], ["00", "11"], ["00", "12"], ["00", "13"],
    /* 0x71 */ ["00", "14"], ["00", "15"], ["00", "16"], ["00", "17"], ["00", "18"], ["00", "19"], ["00", "1A"], ["00", "1B"],
    /* 0x79 */ ["00", "1C"], ["00", "1D"], ["00", "00"], ["02", "35"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const NORWEGIAN: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2A"],
    /* 0x09 */ ["00", "2B"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "29"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2C"],
    /* 0x21 */ ["02", "1E"], ["02", "1F"], ["02", "20"], ["40", "21"], ["02", "22"], ["02", "23"], ["00", "31"], ["02", "25"],
    /* 0x29 */ ["02", "26"], ["02", "31"], ["00", "2D"], ["00", "36"], ["00", "38"], ["00", "37"], ["02", "24"], ["00", "27"],
    /* 0x31 */ ["00", "1E"], ["00", "1F"], ["00", "20"], ["00", "21"], ["00", "22"], ["00", "23"], ["00", "24"], ["00", "25"],
    /* 0x39 */ ["00", "26"], ["02", "37"], ["02", "36"], ["00", "64"], ["02", "27"], ["02", "64"], ["02", "2D"], ["40", "1F"],
    /* 0x41 */ ["02", "04"], ["02", "05"], ["02", "06"], ["02", "07"], ["02", "08"], ["02", "09"], ["02", "0A"], ["02", "0B"],
    /* 0x49 */ ["02", "0C"], ["02", "0D"], ["02", "0E"], ["02", "0F"], ["02", "10"], ["02", "11"], ["02", "12"], ["02", "13"],
    /* 0x51 */ ["02", "14"], ["02", "15"], ["02", "16"], ["02", "17"], ["02", "18"], ["02", "19"], ["02", "1A"], ["02", "1B"],
    /* 0x59 */ ["02", "1C"], ["02", "1D"], ["40", "25"], ["00", "2E"], ["40", "26"], ["02", "30"], ["02", "38"], ["02", "2E"],
    /* 0x61 */ ["00", "04"], ["00", "05"], ["00", "06"], ["00", "07"], ["00", "08"], ["00", "09"], ["00", "0A"], ["00", "0B"],
    /* 0x69 */ ["00", "0C"], ["00", "0D"], ["00", "0E"], ["00", "0F"], ["00", "10"], ["00", "11"], ["00", "12"], ["00", "13"],
    /* 0x71 */ ["00", "14"], ["00", "15"], ["00", "16"], ["00", "17"], ["00", "18"], ["00", "19"], ["00", "1A"], ["00", "1B"],
    /* 0x79 */ ["00", "1C"], ["00", "1D"], ["40", "24"], ["00", "35"], ["40", "27"], ["40", "30"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const SWEDISH: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2A"],
    /* 0x09 */ ["00", "2B"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "29"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2C"],
    /* 0x21 */ ["02", "1E"], ["02", "1F"], ["02", "20"], ["40", "21"], ["02", "22"], ["02", "23"], ["00", "31"], ["02", "25"],
    /* 0x29 */ ["02", "26"], ["02", "31"], ["00", "2D"], ["00", "36"], ["00", "38"], ["00", "37"], ["02", "24"], ["00", "27"],
    /* 0x31 */ ["00", "1E"], ["00", "1F"], ["00", "20"], ["00", "21"], ["00", "22"], ["00", "23"], ["00", "24"], ["00", "25"],
    /* 0x39 */ ["00", "26"], ["02", "37"], ["02", "36"], ["00", "64"], ["02", "27"], ["02", "64"], ["02", "2D"], ["40", "1F"],
    /* 0x41 */ ["02", "04"], ["02", "05"], ["02", "06"], ["02", "07"], ["02", "08"], ["02", "09"], ["02", "0A"], ["02", "0B"],
    /* 0x49 */ ["02", "0C"], ["02", "0D"], ["02", "0E"], ["02", "0F"], ["02", "10"], ["02", "11"], ["02", "12"], ["02", "13"],
    /* 0x51 */ ["02", "14"], ["02", "15"], ["02", "16"], ["02", "17"], ["02", "18"], ["02", "19"], ["02", "1A"], ["02", "1B"],
    /* 0x59 */ ["02", "1C"], ["02", "1D"], ["40", "25"], ["40", "2D"], ["40", "26"], ["02", "30"], ["02", "38"], ["02", "2E"],
    /* 0x61 */ ["00", "04"], ["00", "05"], ["00", "06"], ["00", "07"], ["00", "08"], ["00", "09"], ["00", "0A"], ["00", "0B"],
    /* 0x69 */ ["00", "0C"], ["00", "0D"], ["00", "0E"], ["00", "0F"], ["00", "10"], ["00", "11"], ["00", "12"], ["00", "13"],
    /* 0x71 */ ["00", "14"], ["00", "15"], ["00", "16"], ["00", "17"], ["00", "18"], ["00", "19"], ["00", "1A"], ["00", "1B"],
    /* 0x79 */ ["00", "1C"], ["00", "1D"], ["40", "24"], ["40", "64"], ["40", "27"], ["40", "30"], ["00", "00"], ["00", "00"],
];

#[rustfmt::skip]
const UK_ENGLISH: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2A"],
    /* 0x09 */ ["00", "2B"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "29"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2C"],
    /* 0x21 */ ["02", "1E"], ["02", "1F"], ["00", "31"], ["02", "21"], ["02", "22"], ["02", "24"], ["00", "34"], ["02", "26"],
    /* 0x29 */ ["02", "27"], ["02", "25"], ["02", "2E"], ["00", "36"], ["00", "2D"], ["00", "37"], ["00", "38"], ["00", "27"],
    /* 0x31 */ ["00", "1E"], ["00", "1F"], ["00", "20"], ["00", "21"], ["00", "22"], ["00", "23"], ["00", "24"], ["00", "25"],
    /* 0x39 */ ["00", "26"], ["02", "33"], ["00", "33"], ["02", "36"], ["00", "2E"], ["02", "37"], ["02", "38"], ["02", "34"],
    /* 0x41 */ ["02", "04"], ["02", "05"], ["02", "06"], ["02", "07"], ["02", "08"], ["02", "09"], ["02", "0A"], ["02", "0B"],
    /* 0x49 */ ["02", "0C"], ["02", "0D"], ["02", "0E"], ["02", "0F"], ["02", "10"], ["02", "11"], ["02", "12"], ["02", "13"],
    /* 0x51 */ ["02", "14"], ["02", "15"], ["02", "16"], ["02", "17"], ["02", "18"], ["02", "19"], ["02", "1A"], ["02", "1B"],
    /* 0x59 */ ["02", "1C"], ["02", "1D"], ["00", "2F"], ["00", "64"], ["00", "30"], ["02", "23"], ["02", "2D"], ["00", "35"],
    /* 0x61 */ ["00", "04"], ["00", "05"], ["00", "06"], ["00", "07"], ["00", "08"], ["00", "09"], ["00", "0A"], ["00", "0B"],
    /* 0x69 */ ["00", "0C"], ["00", "0D"], ["00", "0E"], ["00", "0F"], ["00", "10"], ["00", "11"], ["00", "12"], ["00", "13"],
    /* 0x71 */ ["00", "14"], ["00", "15"], ["00", "16"], ["00", "17"], ["00", "18"], ["00", "19"], ["00", "1A"], ["00", "1B"],
    /* 0x79 */ ["00", "1C"], ["00", "1D"], ["02", "2F"], ["02", "64"], ["02", "30"], ["02", "31"], ["00", "00"], ["00", "00"],
];

/// Latin layer of the Israeli layout matches the US layout.
const ISRAEL: KeyTable = USA_ENGLISH;

#[rustfmt::skip]
const TURKEY: KeyTable = [
    /* 0x01 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2A"],
    /* 0x09 */ ["00", "2B"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "28"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x11 */ ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"],
    /* 0x19 */ ["00", "00"], ["00", "00"], ["00", "29"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "00"], ["00", "2C"],
    /* 0x21 */ ["02", "1E"], ["00", "35"], ["40", "20"], ["40", "21"], ["02", "22"], ["02", "23"], ["02", "1F"], ["02", "25"],
    /* 0x29 */ ["02", "26"], ["00", "2D"], ["02", "21"], ["00", "31"], ["00", "2E"], ["00", "38"], ["02", "24"], ["00", "27"],
    /* 0x31 */ ["00", "1E"], ["00", "1F"], ["00", "20"], ["00", "21"], ["00", "22"], ["00", "23"], ["00", "24"], ["00", "25"],
    /* 0x39 */ ["00", "26"], ["02", "38"], ["02", "31"], ["00", "64"], ["02", "27"], ["02", "64"], ["02", "2D"], ["40", "14"],
    /* 0x41 */ ["02", "04"], ["02", "05"], ["02", "06"], ["02", "07"], ["02", "08"], ["02", "09"], ["02", "0A"], ["02", "0B"],
    /* 0x49 */ ["02", "0C"], ["02", "0D"], ["02", "0E"], ["02", "0F"], ["02", "10"], ["02", "11"], ["02", "12"], ["02", "13"],
    /* 0x51 */ ["02", "14"], ["02", "15"], ["02", "16"], ["02", "17"], ["02", "18"], ["02", "19"], ["02", "1A"], ["02", "1B"],
    /* 0x59 */ ["02", "1C"], ["02", "1D"], ["40", "25"], ["40", "2D"], ["40", "26"], ["02", "20"], ["02", "2E"], ["40", "31"],
    /* 0x61 */ ["00", "04"], ["00", "05"], ["00", "06"], ["00", "07"], ["00", "08"], ["00", "09"], ["00", "0A"], ["00", "0B"],
    /* 0x69 */ ["00", "34"], ["00", "0D"], ["00", "0E"], ["00", "0F"], ["00", "10"], ["00", "11"], ["00", "12"], ["00", "13"],
    /* 0x71 */ ["00", "14"], ["00", "15"], ["00", "16"], ["00", "17"], ["00", "18"], ["00", "19"], ["00", "1A"], ["00", "1B"],
    /* 0x79 */ ["00", "1C"], ["00", "1D"], ["40", "24"], ["40", "2E"], ["40", "27"], ["40", "30"], ["00", "00"], ["00", "00"],
];
