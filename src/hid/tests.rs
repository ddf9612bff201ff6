//! Unit tests for the keyboard report, descriptor and encoder.
//!
//! These tests run on the host (not embedded) and verify the pure
//! logic of report building and serialization.

use super::keyboard::{KeyboardReport, KEYBOARD_REPORT_DESCRIPTOR, MODIFIER_LEFT_SHIFT};
use super::scancode::{encode, is_supported, keycode_for, SCANCODE_TABLE};
use usbd_hid::descriptor::SerializedDescriptor;

// ═══════════════════════════════════════════════════════════════════════════
// Keyboard Report Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn keyboard_report_empty() {
    let report = KeyboardReport::empty();
    assert!(report.is_empty());
    assert_eq!(report.modifier, 0);
    assert_eq!(report.keycodes, [0; 6]);
    assert_eq!(report.to_bytes(), [0u8; 8]);
}

#[test]
fn keyboard_report_single_key_layout() {
    let report = KeyboardReport::key(MODIFIER_LEFT_SHIFT, 0x0B);
    assert_eq!(report.to_bytes(), [0x02, 0x00, 0x0B, 0x00, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(report.keycode(), 0x0B);
    assert!(!report.is_empty());
}

#[test]
fn keyboard_report_serialize_buffer_too_small() {
    let report = KeyboardReport::empty();
    let mut small_buf = [0u8; 4];
    let written = report.serialize(&mut small_buf);
    assert_eq!(written, 0); // Should fail gracefully
}

#[test]
fn keyboard_report_serialize_into_longer_buffer() {
    let report = KeyboardReport::key(0, 0x04);
    let mut buf = [0xAAu8; 10];
    let written = report.serialize(&mut buf);
    assert_eq!(written, 8);
    assert_eq!(&buf[..8], &[0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x00, 0x00]);
    assert_eq!(&buf[8..], &[0xAA, 0xAA]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Report Descriptor Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn descriptor_is_a_single_application_collection() {
    let desc = KEYBOARD_REPORT_DESCRIPTOR;
    assert_eq!(&desc[..6], &[0x05, 0x01, 0x09, 0x06, 0xA1, 0x01]);
    assert_eq!(desc.last(), Some(&0xC0));
    assert_eq!(desc.len(), 59);
}

#[test]
fn descriptor_is_exposed_through_usbd_hid() {
    assert_eq!(KeyboardReport::desc(), KEYBOARD_REPORT_DESCRIPTOR);
}

#[test]
fn descriptor_declares_six_keycode_bytes_up_to_101() {
    let desc = KEYBOARD_REPORT_DESCRIPTOR;
    let pos = desc
        .windows(4)
        .position(|w| w == [0x29, 0x65, 0x15, 0x00])
        .expect("keycode usage range");
    assert_eq!(&desc[pos + 4..pos + 12], &[0x25, 0x65, 0x75, 0x08, 0x95, 0x06, 0x81, 0x00]);
}

#[test]
fn descriptor_declares_five_led_outputs() {
    let desc = KEYBOARD_REPORT_DESCRIPTOR;
    let pos = desc
        .windows(2)
        .position(|w| w == [0x05, 0x08])
        .expect("LED usage page");
    assert_eq!(&desc[pos + 12..pos + 16], &[0x95, 0x05, 0x91, 0x02]);
    assert_eq!(&desc[pos + 16..pos + 20], &[0x95, 0x03, 0x91, 0x01]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Encoder Tests
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn encode_every_table_entry_without_modifier() {
    for entry in SCANCODE_TABLE.iter() {
        let report = encode(entry.character);
        assert_eq!(report.modifier, 0, "char {:?}", entry.character);
        assert_eq!(report.keycode(), entry.keycode, "char {:?}", entry.character);
        assert_eq!(report.keycodes[1..], [0u8; 5]);
    }
}

#[test]
fn encode_uppercase_sets_left_shift() {
    for upper in 'A'..='Z' {
        let lower = upper.to_ascii_lowercase();
        let report = encode(upper);
        assert_eq!(report.modifier, MODIFIER_LEFT_SHIFT, "char {upper}");
        assert_eq!(Some(report.keycode()), keycode_for(lower), "char {upper}");
    }
}

#[test]
fn encode_space_and_period() {
    assert_eq!(encode(' ').keycode(), 0x2C);
    assert_eq!(encode('.').keycode(), 0x37);
}

#[test]
fn encode_unsupported_characters_are_empty() {
    for ch in ['?', '\n', '!', ':', ',', '-', '\t', '\0'] {
        let report = encode(ch);
        assert!(report.is_empty(), "char {ch:?}");
        assert!(!is_supported(ch), "char {ch:?}");
    }
}

#[test]
fn encode_h_i_period() {
    let bytes: [[u8; 8]; 3] = [encode('H').to_bytes(), encode('i').to_bytes(), encode('.').to_bytes()];
    assert_eq!(bytes[0], [0x02, 0, 0x0B, 0, 0, 0, 0, 0]);
    assert_eq!(bytes[1], [0x00, 0, 0x0C, 0, 0, 0, 0, 0]);
    assert_eq!(bytes[2], [0x00, 0, 0x37, 0, 0, 0, 0, 0]);
}
