//! Log level definitions

use super::style::{pad_right, LEVEL_WIDTH};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Success,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Success,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Success => "SUCCESS",
        }
    }

    /// Label padded to the level column width
    pub fn padded_label(&self) -> String {
        pad_right(self.to_str(), LEVEL_WIDTH)
    }

    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Debug => BrightBlack,
            LogLevel::Info => BrightWhite,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Success => Green,
        }
    }

    /// Whether lines at this level belong on the error stream
    pub fn is_error_stream(&self) -> bool {
        matches!(self, LogLevel::Warning | LogLevel::Error)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}
