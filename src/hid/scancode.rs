//! ASCII character → USB HID keycode encoder.
//!
//! Only lowercase letters, digits, space and period have a table entry.
//! Uppercase letters reuse the lowercase entry with Left Shift held.
//! Anything else encodes to an all-zero report, which hosts treat as
//! "no key".

use super::keyboard::{KeyboardReport, MODIFIER_LEFT_SHIFT};

/// Keyboard/Keypad page usage for Return (Enter).
pub const KEY_ENTER: u8 = 0x28;

/// One entry of the character table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanCode {
    pub keycode: u8,
    pub character: char,
}

const fn sc(keycode: u8, character: char) -> ScanCode {
    ScanCode { keycode, character }
}

/// Fixed character table. Each character appears at most once.
pub static SCANCODE_TABLE: [ScanCode; 38] = [
    sc(0x04, 'a'),
    sc(0x05, 'b'),
    sc(0x06, 'c'),
    sc(0x07, 'd'),
    sc(0x08, 'e'),
    sc(0x09, 'f'),
    sc(0x0A, 'g'),
    sc(0x0B, 'h'),
    sc(0x0C, 'i'),
    sc(0x0D, 'j'),
    sc(0x0E, 'k'),
    sc(0x0F, 'l'),
    sc(0x10, 'm'),
    sc(0x11, 'n'),
    sc(0x12, 'o'),
    sc(0x13, 'p'),
    sc(0x14, 'q'),
    sc(0x15, 'r'),
    sc(0x16, 's'),
    sc(0x17, 't'),
    sc(0x18, 'u'),
    sc(0x19, 'v'),
    sc(0x1A, 'w'),
    sc(0x1B, 'x'),
    sc(0x1C, 'y'),
    sc(0x1D, 'z'),
    sc(0x1E, '1'),
    sc(0x1F, '2'),
    sc(0x20, '3'),
    sc(0x21, '4'),
    sc(0x22, '5'),
    sc(0x23, '6'),
    sc(0x24, '7'),
    sc(0x25, '8'),
    sc(0x26, '9'),
    sc(0x27, '0'),
    sc(0x2C, ' '),
    sc(0x37, '.'),
];

/// Look up the keycode for an (already case-folded) character.
pub fn keycode_for(ch: char) -> Option<u8> {
    SCANCODE_TABLE
        .iter()
        .find(|entry| entry.character == ch)
        .map(|entry| entry.keycode)
}

/// Build the key-down report for one character.
///
/// Unsupported characters yield an empty report rather than an error.
pub fn encode(ch: char) -> KeyboardReport {
    let (modifier, folded) = if ch.is_ascii_uppercase() {
        (MODIFIER_LEFT_SHIFT, ch.to_ascii_lowercase())
    } else {
        (0, ch)
    };

    match keycode_for(folded) {
        Some(keycode) => KeyboardReport::key(modifier, keycode),
        None => KeyboardReport::empty(),
    }
}

/// Returns `true` if `encode(ch)` presses a real key.
pub fn is_supported(ch: char) -> bool {
    keycode_for(ch.to_ascii_lowercase()).is_some()
}
