//! Conditional logging for the path engine and the anchor resolver.
//!
//! `debug!` traces curve selection, drawn arrows and resolver outcomes;
//! `warn!` reports dash patterns the engine had to sidestep. With the
//! `tracing` feature these are the `tracing` macros, otherwise no-ops.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
#[doc(hidden)]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
