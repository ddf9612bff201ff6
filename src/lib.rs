//! Host-testable core of the hid-typer firmware.
//!
//! Everything that does not touch the nRF52840 lives here: the keyboard
//! report and its descriptor, the character encoder, the typing loop and
//! the wait/settle/type session. The embedded binary in `main.rs` plugs
//! the embassy-usb HID writer, the USB state tracker, a GPIO LED and
//! `embassy_time::Delay` into these pieces.
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and is only built with `--features embedded`.

#![cfg_attr(not(test), no_std)]

pub(crate) mod fmt;

pub mod config;
pub mod error;
pub mod hid;
pub mod session;
pub mod typer;

pub use error::Error;
pub use session::{DeviceState, LinkStatus, Session, SessionConfig, SessionState, StatusLed};
pub use typer::{ReportSink, TypeStats, Typer, TyperConfig};

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - shipped message list
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::config::MESSAGES;
    use super::hid::scancode::is_supported;

    #[test]
    fn shipped_messages_are_typed_in_order() {
        assert_eq!(MESSAGES.len(), 2);
        assert!(MESSAGES[0].starts_with("This sample"));
        assert!(MESSAGES[1].starts_with("For further"));
    }

    #[test]
    fn shipped_messages_only_drop_hyphen_and_colon() {
        let unsupported: Vec<char> = MESSAGES
            .iter()
            .flat_map(|m| m.chars())
            .filter(|&c| !is_supported(c))
            .collect();
        assert_eq!(unsupported, vec!['-', ':']);
    }

    #[test]
    fn poll_interval_is_eight_ms() {
        assert_eq!(super::config::USB_HID_POLL_MS, 8);
        assert_eq!(super::config::USB_HID_INTERVAL_MICROFRAMES, 64);
    }
}
