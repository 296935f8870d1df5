//! # Kage
//!
//! A minimal HTTP server bootstrap built around a small console logger.
//!
//! ## Features
//!
//! - **Leveled Output**: Debug, Info, Warning, Error and Success, with Warning
//!   and Error routed to stderr
//! - **Readable Lines**: Optional timestamps, ANSI colors and hierarchical
//!   subsystem prefixes
//! - **Thread Safe**: Lines from concurrent callers never interleave
//! - **Server Glue**: Environment configuration, CORS and security headers

pub mod config;
pub mod core;
pub mod error;
pub mod macros;
pub mod server;
pub mod sinks;

pub mod prelude {
    pub use crate::config::ServerConfig;
    pub use crate::core::{
        LogLevel, Logger, LoggerConfig, LoggerError, LoggerOption, Sink, TimestampFormat,
        DEBUG_TIME_FORMAT,
    };
    pub use crate::error::KageError;
    pub use crate::sinks::{ConsoleSink, MemorySink};
}

pub use config::ServerConfig;
pub use crate::core::{
    LogLevel, Logger, LoggerConfig, LoggerError, LoggerOption, Sink, TimestampFormat,
    DEBUG_TIME_FORMAT,
};
pub use error::KageError;
pub use sinks::{ConsoleSink, MemorySink};
