//! USB Device subsystem - presents a HID keyboard to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb`.  The device has a single HID interface whose interrupt
//! IN endpoint is polled every 8 ms.
//!
//! The typing session writes reports through [`hid_device::KeyboardEndpoint`]
//! and watches [`hid_device::UsbLinkStatus`] for configuration changes.

pub mod hid_device;
