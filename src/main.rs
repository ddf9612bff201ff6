//! hid-typer firmware entry point (nRF52840).
//!
//! Brings up the USB HID keyboard, then loops forever: wait until the host
//! has configured the device, settle, type the message list.
//!
//! Build with `cargo run --release --features embedded --target thumbv7em-none-eabihf`.

#![no_std]
#![no_main]

mod usb;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive};
use embassy_nrf::pac;
use embassy_time::Delay;
use embassy_usb::UsbDevice;
use hid_typer::{config, Session, SessionConfig, StatusLed, Typer, TyperConfig};
use usb::hid_device::{self, UsbDriver};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::task]
async fn usb_task(device: UsbDevice<'static, UsbDriver>) -> ! {
    hid_device::run_usb_device(device).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("hid-typer starting");

    // The USB peripheral needs the external high-frequency oscillator.
    pac::CLOCK.tasks_hfclkstart().write_value(1);
    while pac::CLOCK.events_hfclkstarted().read() != 1 {}

    let usb = hid_device::init(p.USBD);
    unwrap!(spawner.spawn(usb_task(usb.device)));

    let led_off = if config::STATUS_LED_ACTIVE_LOW {
        Level::High
    } else {
        Level::Low
    };
    let led = StatusLed::new(
        Output::new(p.P0_06, led_off, OutputDrive::Standard),
        config::STATUS_LED_ACTIVE_LOW,
    );

    let typer = Typer::new(usb.keyboard, Delay, TyperConfig::default());
    let mut session = Session::new(usb.status, led, typer, SessionConfig::default());

    session.run(config::MESSAGES).await
}
