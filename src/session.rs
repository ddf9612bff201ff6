//! Top-level typing session: wait for the host, settle, type, repeat.
//!
//! ```text
//!   WaitConfigured ──ready──▶ SettleDelay ──500 ms──▶ Transmitting
//!         ▲                                               │
//!         └──────────────── batch finished ───────────────┘
//! ```
//!
//! While waiting, the status LED blinks every poll interval. There is no
//! timeout: with no host attached the session waits forever. A detach in
//! the middle of a batch is only noticed once the batch has finished.

use embedded_hal::digital::StatefulOutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config;
use crate::fmt::info;
use crate::typer::{ReportSink, TypeStats, Typer};

/// Snapshot of the USB device state as seen by the stack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    /// The host selected a configuration.
    pub configured: bool,
    /// The bus is suspended.
    pub suspended: bool,
}

impl DeviceState {
    /// Configured and not suspended: reports will reach the host.
    pub fn is_ready(&self) -> bool {
        self.configured && !self.suspended
    }

    // Bus event folding, driven by the USB stack's event handler.

    /// Peripheral enabled or disabled (VBUS). Disabling forgets everything.
    pub fn on_enabled(&mut self, enabled: bool) {
        if !enabled {
            *self = Self::default();
        }
    }

    /// Bus reset. The stack leaves suspend on reset without reporting a
    /// separate resume, so both flags clear here.
    pub fn on_reset(&mut self) {
        *self = Self::default();
    }

    pub fn on_configured(&mut self, configured: bool) {
        self.configured = configured;
    }

    pub fn on_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
    }
}

/// Source of the current [`DeviceState`].
pub trait LinkStatus {
    fn state(&self) -> DeviceState;
}

impl<T: LinkStatus + ?Sized> LinkStatus for &T {
    fn state(&self) -> DeviceState {
        (**self).state()
    }
}

/// Session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Polling the stack until the host has configured us.
    WaitConfigured,
    /// Configured; holding off so the host driver can attach.
    SettleDelay,
    /// Typing the message batch.
    Transmitting,
}

/// Session timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionConfig {
    /// Status poll / LED blink period while waiting (ms).
    pub poll_interval_ms: u32,
    /// Hold time before the first keystroke (ms).
    pub settle_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: config::CONFIG_POLL_MS,
            settle_ms: config::SETTLE_MS,
        }
    }
}

/// Status LED on a GPIO pin.
///
/// Writes ignore pin errors: the LED is a liveness hint and there is nothing
/// useful to do if it fails. On the nRF52840 they are `Infallible` anyway.
pub struct StatusLed<P> {
    pin: P,
    active_low: bool,
}

impl<P: StatefulOutputPin> StatusLed<P> {
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    pub fn on(&mut self) {
        let _ = if self.active_low {
            self.pin.set_low()
        } else {
            self.pin.set_high()
        };
    }

    #[cfg(test)]
    pub fn off(&mut self) {
        let _ = if self.active_low {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
    }

    pub fn toggle(&mut self) {
        let _ = self.pin.toggle();
    }

    #[cfg(test)]
    pub fn is_on(&mut self) -> Result<bool, P::Error> {
        let high = self.pin.is_set_high()?;
        Ok(high != self.active_low)
    }

    pub fn release(self) -> P {
        self.pin
    }
}

/// Drives a [`Typer`] from the USB device state.
pub struct Session<S, P, W, D> {
    link: S,
    led: StatusLed<P>,
    typer: Typer<W, D>,
    config: SessionConfig,
    state: SessionState,
}

impl<S, P, W, D> Session<S, P, W, D>
where
    S: LinkStatus,
    P: StatefulOutputPin,
    W: ReportSink,
    D: DelayNs,
{
    pub fn new(link: S, led: StatusLed<P>, typer: Typer<W, D>, config: SessionConfig) -> Self {
        Self {
            link,
            led,
            typer,
            config,
            state: SessionState::WaitConfigured,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn release(self) -> (S, StatusLed<P>, Typer<W, D>) {
        (self.link, self.led, self.typer)
    }

    fn enter(&mut self, next: SessionState) {
        if next != self.state {
            info!("Session: {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Block until the host has configured us and the bus is awake.
    ///
    /// Returns the number of poll intervals spent waiting.
    pub async fn wait_configured(&mut self) -> u32 {
        self.enter(SessionState::WaitConfigured);
        let mut polls = 0;
        while !self.link.state().is_ready() {
            self.led.toggle();
            self.typer
                .delay_mut()
                .delay_ms(self.config.poll_interval_ms)
                .await;
            polls += 1;
        }
        polls
    }

    /// Give the host driver time to attach, then light the LED.
    pub async fn settle(&mut self) {
        self.enter(SessionState::SettleDelay);
        self.typer.delay_mut().delay_ms(self.config.settle_ms).await;
        self.led.on();
    }

    /// One full pass: wait, settle, type every message once.
    pub async fn run_once(&mut self, messages: &[&str]) -> TypeStats {
        self.wait_configured().await;
        self.settle().await;
        self.enter(SessionState::Transmitting);
        self.typer.type_batch(messages).await
    }

    /// Repeat [`Session::run_once`] forever.
    pub async fn run(&mut self, messages: &[&str]) -> ! {
        loop {
            self.run_once(messages).await;
        }
    }
}
