//! Logging macros which work with `defmt`, `log` or nothing.
//!
//! `defmt` wins when both features are enabled. Without either feature the
//! arguments are still evaluated by reference so that variables used only for
//! logging don't trigger warnings.
#![allow(unused_macros)]

#[cfg(feature = "defmt")]
#[macro_use]
mod inner {
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::debug!($s $(, $x)*)
        };
    }

    macro_rules! info {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::info!($s $(, $x)*)
        };
    }

    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::warn!($s $(, $x)*)
        };
    }

    macro_rules! error {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::defmt::error!($s $(, $x)*)
        };
    }
}

#[cfg(all(feature = "log", not(feature = "defmt")))]
#[macro_use]
mod inner {
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::log::debug!($s $(, $x)*)
        };
    }

    macro_rules! info {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::log::info!($s $(, $x)*)
        };
    }

    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::log::warn!($s $(, $x)*)
        };
    }

    macro_rules! error {
        ($s:literal $(, $x:expr)* $(,)?) => {
            ::log::error!($s $(, $x)*)
        };
    }
}

#[cfg(not(any(feature = "log", feature = "defmt")))]
#[macro_use]
mod inner {
    macro_rules! debug {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            $( let _ = &$x; )*
        }};
    }

    macro_rules! info {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            $( let _ = &$x; )*
        }};
    }

    macro_rules! warn {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            $( let _ = &$x; )*
        }};
    }

    macro_rules! error {
        ($s:literal $(, $x:expr)* $(,)?) => {{
            $( let _ = &$x; )*
        }};
    }
}
