//! Logging shims over the `log` facade.
//!
//! With the `logging` feature disabled the arguments are still type-checked but
//! nothing is emitted.

macro_rules! trace_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::trace!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)*);
    }};
}

macro_rules! warn_log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::warn!($($arg)*);
        #[cfg(not(feature = "logging"))]
        let _ = format_args!($($arg)*);
    }};
}
