//! USB HID keyboard device.
//!
//! Initialises the Embassy USB stack on the nRF52840 hardware USB
//! peripheral, exposes one HID keyboard interface with an interrupt IN
//! endpoint, and mirrors the bus state into a [`DeviceState`] cell the
//! typing session polls.

use core::cell::Cell;

use defmt::info;
use embassy_nrf::usb::vbus_detect::HardwareVbusDetect;
use embassy_nrf::usb::Driver;
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_usb::class::hid::{Config as HidConfig, HidWriter, State};
use embassy_usb::driver::EndpointError;
use embassy_usb::{Builder, Config, UsbDevice};
use hid_typer::config;
use hid_typer::error::{Error, Result};
use hid_typer::hid::keyboard::{KeyboardReport, KEYBOARD_REPORT_SIZE};
use hid_typer::session::{DeviceState, LinkStatus};
use hid_typer::typer::ReportSink;
use static_cell::StaticCell;
use usbd_hid::descriptor::SerializedDescriptor;

bind_interrupts!(struct Irqs {
    USBD => embassy_nrf::usb::InterruptHandler<peripherals::USBD>;
    CLOCK_POWER => embassy_nrf::usb::vbus_detect::InterruptHandler;
});

/// The nRF52840 USB driver with hardware VBUS detection.
pub type UsbDriver = Driver<'static, peripherals::USBD, HardwareVbusDetect>;

static KB_STATE: StaticCell<State> = StaticCell::new();
static USB_CONFIG_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_BOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_MSOS_DESC: StaticCell<[u8; 256]> = StaticCell::new();
static USB_CTRL_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static USB_STATE_HANDLER: StaticCell<UsbStateHandler> = StaticCell::new();

static USB_STATE: Mutex<CriticalSectionRawMutex, Cell<DeviceState>> =
    Mutex::new(Cell::new(DeviceState {
        configured: false,
        suspended: false,
    }));

fn update_state(f: impl FnOnce(&mut DeviceState)) {
    USB_STATE.lock(|cell| {
        let mut state = cell.get();
        f(&mut state);
        cell.set(state);
    });
}

/// Records bus events for [`UsbLinkStatus`].
struct UsbStateHandler;

impl embassy_usb::Handler for UsbStateHandler {
    fn enabled(&mut self, enabled: bool) {
        update_state(|s| s.on_enabled(enabled));
        info!("USB enabled={}", enabled);
    }

    fn reset(&mut self) {
        update_state(|s| s.on_reset());
        info!("USB bus reset");
    }

    fn configured(&mut self, configured: bool) {
        update_state(|s| s.on_configured(configured));
        info!("USB configured={}", configured);
    }

    fn suspended(&mut self, suspended: bool) {
        update_state(|s| s.on_suspended(suspended));
        info!("USB suspended={}", suspended);
    }
}

/// Reads the state recorded by the USB event handler.
#[derive(Clone, Copy)]
pub struct UsbLinkStatus;

impl LinkStatus for UsbLinkStatus {
    fn state(&self) -> DeviceState {
        USB_STATE.lock(|cell| cell.get())
    }
}

/// The keyboard IN endpoint as a report sink.
pub struct KeyboardEndpoint(HidWriter<'static, UsbDriver, KEYBOARD_REPORT_SIZE>);

impl ReportSink for KeyboardEndpoint {
    async fn write_report(&mut self, report: &[u8; KEYBOARD_REPORT_SIZE]) -> Result<()> {
        self.0.write(report).await.map_err(endpoint_error)
    }
}

fn endpoint_error(e: EndpointError) -> Error {
    match e {
        EndpointError::Disabled => Error::Disabled,
        EndpointError::BufferOverflow => Error::BufferOverflow,
    }
}

/// Build result containing the USB device runner and the keyboard endpoint.
pub struct UsbKeyboard {
    pub device: UsbDevice<'static, UsbDriver>,
    pub keyboard: KeyboardEndpoint,
    pub status: UsbLinkStatus,
}

/// Initialise the USB stack and register the HID keyboard function.
///
/// Must be called exactly once.  All static buffers are consumed here.
pub fn init(usbd: peripherals::USBD) -> UsbKeyboard {
    // Create the low-level USB driver with hardware VBUS detection.
    let driver = Driver::new(usbd, Irqs, HardwareVbusDetect::new(Irqs));

    // USB device-level configuration.
    let mut usb_config = Config::new(config::USB_VID, config::USB_PID);
    usb_config.manufacturer = Some(config::USB_MANUFACTURER);
    usb_config.product = Some(config::USB_PRODUCT);
    usb_config.serial_number = Some(config::USB_SERIAL_NUMBER);
    usb_config.max_power = 100; // mA
    usb_config.max_packet_size_0 = 64;

    // Allocate static descriptor buffers.
    let config_desc = USB_CONFIG_DESC.init([0u8; 256]);
    let bos_desc = USB_BOS_DESC.init([0u8; 256]);
    let msos_desc = USB_MSOS_DESC.init([0u8; 256]);
    let ctrl_buf = USB_CTRL_BUF.init([0u8; 64]);

    let mut builder = Builder::new(
        driver,
        usb_config,
        config_desc,
        bos_desc,
        msos_desc,
        ctrl_buf,
    );

    builder.handler(USB_STATE_HANDLER.init(UsbStateHandler));

    // Output (LED) reports are declared by the descriptor but never read,
    // so no request handler is installed.
    let kb_state = KB_STATE.init(State::new());
    let kb_config = HidConfig {
        report_descriptor: KeyboardReport::desc(),
        request_handler: None,
        poll_ms: config::USB_HID_POLL_MS,
        max_packet_size: KEYBOARD_REPORT_SIZE as u16,
    };
    let writer = HidWriter::new(&mut builder, kb_state, kb_config);

    let device = builder.build();

    info!(
        "USB HID keyboard initialised ({=u16:#x}:{=u16:#x}, poll {} ms)",
        config::USB_VID,
        config::USB_PID,
        config::USB_HID_POLL_MS
    );

    UsbKeyboard {
        device,
        keyboard: KeyboardEndpoint(writer),
        status: UsbLinkStatus,
    }
}

/// Run the USB device stack - must be spawned as a dedicated Embassy task.
///
/// This handles USB enumeration, suspend/resume, and endpoint servicing.
pub async fn run_usb_device(mut device: UsbDevice<'static, UsbDriver>) -> ! {
    info!("USB device task started");
    device.run().await
}
