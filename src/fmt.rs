//! Logging shim: `defmt` on target, `log` everywhere else.
//!
//! Library modules log through `crate::fmt::{debug, info, warn}` so the host
//! test build does not need a defmt global logger. Arguments must therefore
//! implement both `defmt::Format` and `core::fmt::Display`/`Debug`.

#[allow(unused_imports)]
#[cfg(not(feature = "defmt"))]
pub(crate) use log::{debug, info, warn};

#[allow(unused_imports)]
#[cfg(feature = "defmt")]
pub(crate) use defmt::{debug, info, warn};
