//! `format!`-style front ends. The arguments are formatted only when the level passes the
//! threshold; the resulting text is what `&msg` places.

/// Logs at an explicit level: `plog!(logger, Level::Info, "took {} ms", ms)`.
#[macro_export]
macro_rules! plog {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_fmt($level, ::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::plog!($logger, $crate::Level::Emergency, $($arg)+)
    };
}

#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::plog!($logger, $crate::Level::Alert, $($arg)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::plog!($logger, $crate::Level::Critical, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::plog!($logger, $crate::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::plog!($logger, $crate::Level::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::plog!($logger, $crate::Level::Notice, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::plog!($logger, $crate::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::plog!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Ignores the threshold.
#[macro_export]
macro_rules! always {
    ($logger:expr, $($arg:tt)+) => {
        $crate::plog!($logger, $crate::Level::Always, $($arg)+)
    };
}
