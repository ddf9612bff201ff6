//! USB HID keyboard report (boot protocol compatible).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes)
//! ```
//!
//! The typer only ever fills byte 0 (left shift) and byte 2.

use usbd_hid::descriptor::SerializedDescriptor;

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// Left Shift bit of the modifier byte.
pub const MODIFIER_LEFT_SHIFT: u8 = 1 << 1;

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (always 0x00 per HID spec).
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes.
    pub keycodes: [u8; 6],
}

impl KeyboardReport {
    /// Create an empty (all-keys-released) report.
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: [0; 6],
        }
    }

    /// A single key held down with the given modifiers.
    pub const fn key(modifier: u8, keycode: u8) -> Self {
        Self {
            modifier,
            reserved: 0,
            keycodes: [keycode, 0, 0, 0, 0, 0],
        }
    }

    /// Primary key code (byte 2 on the wire).
    pub const fn keycode(&self) -> u8 {
        self.keycodes[0]
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (8, or 0 if `buf` is too short).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < KEYBOARD_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.modifier;
        buf[1] = self.reserved;
        buf[2..8].copy_from_slice(&self.keycodes);
        KEYBOARD_REPORT_SIZE
    }

    /// Wire representation.
    pub fn to_bytes(&self) -> [u8; KEYBOARD_REPORT_SIZE] {
        let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
        self.serialize(&mut buf);
        buf
    }

    /// Returns `true` if no keys are pressed (release event).
    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes.iter().all(|&k| k == 0)
    }
}

impl SerializedDescriptor for KeyboardReport {
    fn desc() -> &'static [u8] {
        KEYBOARD_REPORT_DESCRIPTOR
    }
}

// USB HID report descriptor for a boot-protocol keyboard

/// USB HID Report Descriptor for the typer keyboard.
///
/// This descriptor tells the USB host that we are a keyboard with:
///   - 8 modifier key bits (input)
///   - 1 reserved byte
///   - 6 key code bytes, usages 0..=101 (input)
///   - 5 LED indicators + 3 padding bits (output, never read back)
pub const KEYBOARD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Modifier keys (8 bits) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Reserved byte (8 x 1 bit) -
    0x81, 0x01, //   Input (Constant) - padding
    //
    //   - Key codes (6 bytes) -
    0x19, 0x00, //   Usage Minimum (0)
    0x29, 0x65, //   Usage Maximum (101)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x65, //   Logical Maximum (101)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x06, //   Report Count (6)
    0x81, 0x00, //   Input (Data, Array)
    //
    //   - LED output (5 bits + 3 padding) -
    0x05, 0x08, //   Usage Page (LEDs)
    0x19, 0x01, //   Usage Minimum (Num Lock)
    0x29, 0x05, //   Usage Maximum (Kana)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x05, //   Report Count (5)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    0x95, 0x03, //   Report Count (3)
    0x91, 0x01, //   Output (Constant) - padding
    //
    0xC0, // End Collection
];
