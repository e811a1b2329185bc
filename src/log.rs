//! Logging facade.
//!
//! Statements compile down to nothing unless the `log` feature is enabled,
//! while still consuming their format arguments.

macro_rules! debug {
    ($($tt:tt)*) => {
        match format_args!($($tt)*) {
            _args => {
                #[cfg(feature = "log")]
                ::log::debug!("{_args}");
            }
        }
    };
}

macro_rules! info {
    ($($tt:tt)*) => {
        match format_args!($($tt)*) {
            _args => {
                #[cfg(feature = "log")]
                ::log::info!("{_args}");
            }
        }
    };
}

macro_rules! warning {
    ($($tt:tt)*) => {
        match format_args!($($tt)*) {
            _args => {
                #[cfg(feature = "log")]
                ::log::warn!("{_args}");
            }
        }
    };
}

macro_rules! error {
    ($($tt:tt)*) => {
        match format_args!($($tt)*) {
            _args => {
                #[cfg(feature = "log")]
                ::log::error!("{_args}");
            }
        }
    };
}

pub(crate) use {debug, error, info, warning};
