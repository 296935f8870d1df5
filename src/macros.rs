//! Logging macros for formatted log messages.
//!
//! Each macro takes a logger followed by `format!`-style arguments and
//! forwards a `format_args!` value to the matching logger method, so no
//! intermediate `String` is built before rendering.
//!
//! # Examples
//!
//! ```
//! use kage::{info, Logger};
//!
//! let logger = Logger::new().with_prefix("Main Process");
//!
//! let port = 3000;
//! info!(logger, "Attempting to start server on Port {}...", port);
//! ```

/// Log a formatted message at an explicit level.
///
/// # Examples
///
/// ```
/// # use kage::{Logger, LogLevel};
/// # let logger = Logger::new();
/// use kage::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # let logger = kage::Logger::new();
/// use kage::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

/// Log a success-level message.
///
/// # Examples
///
/// ```
/// # let logger = kage::Logger::new();
/// use kage::success;
/// success!(logger, "Server started on port {}", 3000);
/// ```
#[macro_export]
macro_rules! success {
    ($logger:expr, $($arg:tt)+) => {
        $logger.success(format_args!($($arg)+))
    };
}

/// Log an error-level message and exit the process with status 1.
///
/// # Examples
///
/// ```no_run
/// # let logger = kage::Logger::new();
/// use kage::fatal;
/// fatal!(logger, "Failed to start server on port {}: {}", 3000, "address in use");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::{LogLevel, Logger, MemorySink};

    fn capture() -> (Logger, MemorySink, MemorySink) {
        let out = MemorySink::new();
        let err = MemorySink::new();
        let logger = Logger::new()
            .without_colors()
            .with_stdout(out.clone())
            .with_stderr(err.clone());
        (logger, out, err)
    }

    #[test]
    fn test_formatted_macros() {
        let (logger, out, err) = capture();

        debug!(logger, "value {}", 1);
        info!(logger, "value {}", 2);
        success!(logger, "value {}", 3);
        warn!(logger, "value {}", 4);
        error!(logger, "value {}", 5);

        assert_eq!(
            out.lines(),
            vec!["DEBUG   value 1", "INFO    value 2", "SUCCESS value 3"]
        );
        assert_eq!(err.lines(), vec!["WARN    value 4", "ERROR   value 5"]);
    }

    #[test]
    fn test_log_macro_with_level() {
        let (logger, out, _err) = capture();

        log!(logger, LogLevel::Info, "port {:>5}", 80);

        assert_eq!(out.lines(), vec!["INFO    port    80"]);
    }
}
