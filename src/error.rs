//! Unified error type for hid-typer.
//!
//! We avoid `alloc` - all error variants are fieldless.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // USB
    /// The IN endpoint is disabled: the host has not configured us yet,
    /// or the cable was pulled.
    Disabled,

    // Generic
    /// Buffer too small for the requested operation.
    BufferOverflow,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Disabled => f.write_str("endpoint disabled"),
            Error::BufferOverflow => f.write_str("buffer overflow"),
        }
    }
}

/// Convenience alias used by the report sink seam.
pub type Result<T> = core::result::Result<T, Error>;
