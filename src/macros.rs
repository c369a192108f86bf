//! Logging macros for ergonomic log message formatting.
//!
//! The level macros go through the `*_fmt` entry points, so arguments are
//! only formatted once the entry pre-filter has passed.
//!
//! # Examples
//!
//! ```
//! use tinted_logger::prelude::*;
//! use tinted_logger::{info, warn};
//!
//! let logger = Logger::builder("server").sink(MemorySink::new()).build();
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warn!(logger, "{} connections pending", 3);
//! ```

/// Log at an explicit level, skipping the entry pre-filter.
///
/// # Examples
///
/// ```
/// # use tinted_logger::prelude::*;
/// # let logger = Logger::builder("x").sink(MemorySink::new()).build();
/// use tinted_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_text($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug_fmt(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info_fmt(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn_fmt(format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use tinted_logger::prelude::*;
/// # let logger = Logger::builder("x").sink(MemorySink::new()).build();
/// use tinted_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error_fmt(format_args!($($arg)+))
    };
}

/// Log a fatal-level message and exit the process.
///
/// # Examples
///
/// ```no_run
/// # use tinted_logger::prelude::*;
/// # let logger = Logger::new("x");
/// use tinted_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal_fmt(format_args!($($arg)+))
    };
}

/// Create a logger whose package name is the calling module path.
///
/// # Examples
///
/// ```
/// let logger = tinted_logger::new_logger!("worker");
/// assert_eq!(logger.name(), "worker");
/// assert!(!logger.pkg_name().is_empty());
/// ```
#[macro_export]
macro_rules! new_logger {
    ($name:expr) => {
        $crate::Logger::builder($name)
            .pkg_name(module_path!())
            .build()
    };
}
