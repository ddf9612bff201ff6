//! Text → keystroke transmission loop.
//!
//! Every character becomes two input reports: the encoded key-down report
//! followed by an all-zero key-up report, then a fixed pause so the host
//! sees a distinct press and release for each one.
//!
//! The typer owns its report sink and delay source; nothing here touches
//! global state.

use embedded_hal_async::delay::DelayNs;

use crate::config;
use crate::error::Result;
use crate::fmt::{debug, warn};
use crate::hid::keyboard::{KeyboardReport, KEYBOARD_REPORT_SIZE};
use crate::hid::scancode::{self, KEY_ENTER};

/// Destination for keyboard input reports (the HID IN endpoint on target).
#[allow(async_fn_in_trait)]
pub trait ReportSink {
    /// Submit one report. Returns once the report has been handed to the
    /// transport.
    async fn write_report(&mut self, report: &[u8; KEYBOARD_REPORT_SIZE]) -> Result<()>;
}

impl<T: ReportSink + ?Sized> ReportSink for &mut T {
    async fn write_report(&mut self, report: &[u8; KEYBOARD_REPORT_SIZE]) -> Result<()> {
        (**self).write_report(report).await
    }
}

/// Runtime typing settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TyperConfig {
    /// Pause after each press/release pair (ms).
    pub key_delay_ms: u32,
    /// Tap Return after every message of a batch.
    pub send_return: bool,
}

impl Default for TyperConfig {
    fn default() -> Self {
        Self {
            key_delay_ms: config::KEY_DELAY_MS,
            send_return: config::SEND_RETURN,
        }
    }
}

/// Counters for one typing run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TypeStats {
    /// Press/release pairs sent, including empty ones for dropped characters.
    pub keys_sent: u32,
    /// Characters with no table entry (sent as an empty report).
    pub dropped: u32,
    /// Reports the sink refused.
    pub write_errors: u32,
}

impl TypeStats {
    fn merge(&mut self, other: TypeStats) {
        self.keys_sent += other.keys_sent;
        self.dropped += other.dropped;
        self.write_errors += other.write_errors;
    }
}

/// Types strings through a [`ReportSink`].
pub struct Typer<W, D> {
    sink: W,
    delay: D,
    config: TyperConfig,
}

impl<W: ReportSink, D: DelayNs> Typer<W, D> {
    pub fn new(sink: W, delay: D, config: TyperConfig) -> Self {
        Self {
            sink,
            delay,
            config,
        }
    }

    /// The delay source, shared with whoever drives the typer.
    pub fn delay_mut(&mut self) -> &mut D {
        &mut self.delay
    }

    /// Give back the sink and delay.
    pub fn release(self) -> (W, D) {
        (self.sink, self.delay)
    }

    /// Type one character: key-down, key-up, pause.
    pub async fn type_char(&mut self, ch: char) -> TypeStats {
        let mut stats = TypeStats::default();
        if !scancode::is_supported(ch) {
            debug!("typer: no keycode for {:?}, sending empty report", ch);
            stats.dropped += 1;
        }
        self.tap(scancode::encode(ch), &mut stats).await;
        stats
    }

    /// Type every character of `text` in order.
    pub async fn type_str(&mut self, text: &str) -> TypeStats {
        let mut stats = TypeStats::default();
        for ch in text.chars() {
            let s = self.type_char(ch).await;
            stats.merge(s);
        }
        stats
    }

    /// Tap the Return key once.
    pub async fn send_return(&mut self) -> TypeStats {
        let mut stats = TypeStats::default();
        self.tap(KeyboardReport::key(0, KEY_ENTER), &mut stats).await;
        stats
    }

    /// Type each message in order, with an optional Return after each one.
    pub async fn type_batch(&mut self, messages: &[&str]) -> TypeStats {
        let mut stats = TypeStats::default();
        for message in messages {
            let s = self.type_str(message).await;
            stats.merge(s);
            if self.config.send_return {
                let s = self.send_return().await;
                stats.merge(s);
            }
        }
        if stats.dropped > 0 || stats.write_errors > 0 {
            warn!(
                "typer: batch done, {} keys, {} dropped, {} write errors",
                stats.keys_sent, stats.dropped, stats.write_errors
            );
        }
        stats
    }

    async fn tap(&mut self, down: KeyboardReport, stats: &mut TypeStats) {
        self.write(&down.to_bytes(), stats).await;
        // The release goes out even if the press failed.
        self.write(&KeyboardReport::empty().to_bytes(), stats).await;
        stats.keys_sent += 1;
        self.delay.delay_ms(self.config.key_delay_ms).await;
    }

    async fn write(&mut self, report: &[u8; KEYBOARD_REPORT_SIZE], stats: &mut TypeStats) {
        if let Err(e) = self.sink.write_report(report).await {
            warn!("typer: report write failed: {}", e);
            stats.write_errors += 1;
        }
    }
}
