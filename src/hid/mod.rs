//! HID keyboard report type, report descriptor and character encoder.

pub mod keyboard;
pub mod scancode;

#[cfg(test)]
mod tests;

pub use keyboard::{KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, KEYBOARD_REPORT_SIZE};
pub use scancode::{encode, keycode_for, KEY_ENTER};
