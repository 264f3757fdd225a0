//! Logging shim.
//!
//! With the `log` feature these forward to the `log` crate; otherwise the
//! arguments are only borrowed by an unused `format_args!`, which keeps
//! variables used without formatting anything.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => { ::log::trace!($($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)+) => { ::log::debug!($($arg)+) };
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)+) => {{
        let _ = format_args!($($arg)+);
    }};
}

pub(crate) use {debug, trace};
