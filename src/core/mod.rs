//! Core logger types and traits

pub mod error;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod style;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerConfig, LoggerOption};
pub use sink::Sink;
pub use timestamp::{TimestampFormat, DEBUG_TIME_FORMAT};
