//! Macros for generating log messages. Every macro accepts an optional leading threshold expression.
//! Always give the threshold when the format string has arguments, since a bare format string followed by
//! arguments would otherwise be read as a threshold.

#[doc(hidden)]
#[macro_export]
macro_rules! __log_event {
    ($level:ident, critical, $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            $crate::log::__tracing::event!(
                $crate::log::__tracing::Level::$level,
                critical = true,
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
    ($level:ident, plain, $threshold:expr, $($arg:tt)+) => {
        {
            $crate::log::init_logger();
            $crate::log::__tracing::event!(
                $crate::log::__tracing::Level::$level,
                threshold = $threshold,
                message = format_args!($($arg)+)
            );
        }
    };
}

#[macro_export]
macro_rules! critical {
    ($threshold:expr, $($arg:tt)+) => { $crate::__log_event!(ERROR, critical, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_event!(ERROR, critical, 0, $($arg)+) };
}

#[macro_export]
macro_rules! error {
    ($threshold:expr, $($arg:tt)+) => { $crate::__log_event!(ERROR, plain, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_event!(ERROR, plain, 0, $($arg)+) };
}

#[macro_export]
macro_rules! warning {
    ($threshold:expr, $($arg:tt)+) => { $crate::__log_event!(WARN, plain, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_event!(WARN, plain, 0, $($arg)+) };
}

#[macro_export]
macro_rules! info {
    ($threshold:expr, $($arg:tt)+) => { $crate::__log_event!(INFO, plain, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_event!(INFO, plain, 0, $($arg)+) };
}

#[macro_export]
macro_rules! debug {
    ($threshold:expr, $($arg:tt)+) => { $crate::__log_event!(DEBUG, plain, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_event!(DEBUG, plain, 0, $($arg)+) };
}

#[macro_export]
macro_rules! trace {
    ($threshold:expr, $($arg:tt)+) => { $crate::__log_event!(TRACE, plain, $threshold, $($arg)+) };
    ($($arg:tt)+) => { $crate::__log_event!(TRACE, plain, 0, $($arg)+) };
}


// The following makes the macros importable directly from the `log` module.
pub use {critical, error, warning, info, debug, trace};
