//! Application-wide constants and compile-time configuration.
//!
//! USB identity, timing parameters and the typed message list live here so
//! they can be tuned in one place.

// USB

/// USB VID/PID of the demo image.
/// Replace with your own allocated VID/PID before shipping anything.
pub const USB_VID: u16 = 0xFFFF;
pub const USB_PID: u16 = 0xFFFF;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "Vendor";
pub const USB_PRODUCT: &str = "HID keyboard sample";
pub const USB_SERIAL_NUMBER: &str = "12345678";

/// Interrupt IN polling interval in 125 µs microframes.
/// 64 microframes = 8 ms.
pub const USB_HID_INTERVAL_MICROFRAMES: u16 = 64;

/// USB HID polling interval (ms), as handed to the endpoint descriptor.
pub const USB_HID_POLL_MS: u8 = (USB_HID_INTERVAL_MICROFRAMES / 8) as u8;

// Typing

/// Pause after each key-down/key-up pair (ms).
///
/// Host drivers coalesce reports that arrive faster than the polling
/// interval, so this must stay well above `USB_HID_POLL_MS`.
pub const KEY_DELAY_MS: u32 = 50;

/// Send a Return key after every message.
pub const SEND_RETURN: bool = false;

/// Messages typed on every pass, in order.
pub const MESSAGES: &[&str] = &[
    "This sample is based on the SEGGER emUSB-Device software with an HID component. ",
    "For further information please visit: www.segger.com ",
];

// Session

/// Status LED blink period while waiting for the host (ms).
pub const CONFIG_POLL_MS: u32 = 50;

/// Hold time between the host configuring us and the first keystroke (ms).
pub const SETTLE_MS: u32 = 500;

// GPIO pin assignments (nRF52840 Dongle defaults)
//
// The actual `embassy_nrf::peripherals::*` type is picked in `main.rs`.
//
//   Status LED     → P0.06 (active low)

/// The status LED lights when its pin is driven low.
pub const STATUS_LED_ACTIVE_LOW: bool = true;
