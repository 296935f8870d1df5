//! Main logger implementation

use super::{
    log_level::LogLevel,
    sink::Sink,
    style::{escape, pad_right, PREFIX_COLOR, PREFIX_WIDTH, RESET, TIMESTAMP_COLOR},
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use chrono::{DateTime, Local};
use parking_lot::{const_mutex, Mutex};
use std::fmt::{self, Write as _};
use std::process;

/// Held for every write so lines from different loggers never interleave
/// on the shared process streams.
static CONSOLE_LOCK: Mutex<()> = const_mutex(());

/// Rendering settings of a [`Logger`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    /// Subsystem label, rendered as `[prefix]`
    pub prefix: Option<String>,
    /// Prefix each line with the current local time
    pub timestamp: bool,
    pub time_format: TimestampFormat,
    /// Embed ANSI color escapes
    pub colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            timestamp: false,
            time_format: TimestampFormat::default(),
            colors: true,
        }
    }
}

/// A single configuration override, applied by [`Logger::with_options`]
pub enum LoggerOption {
    Prefix(String),
    SubPrefix(String),
    Timestamp(bool),
    TimeFormat(TimestampFormat),
    Colors(bool),
    Stdout(Box<dyn Sink>),
    Stderr(Box<dyn Sink>),
}

impl LoggerOption {
    fn apply(self, logger: Logger) -> Logger {
        match self {
            LoggerOption::Prefix(prefix) => logger.with_prefix(prefix),
            LoggerOption::SubPrefix(sub_prefix) => logger.with_sub_prefix(sub_prefix),
            LoggerOption::Timestamp(true) => logger.with_timestamp(),
            LoggerOption::Timestamp(false) => logger.without_timestamp(),
            LoggerOption::TimeFormat(format) => logger.with_time_format(format),
            LoggerOption::Colors(true) => logger.with_colors(),
            LoggerOption::Colors(false) => logger.without_colors(),
            LoggerOption::Stdout(sink) => logger.replace_sink(false, sink),
            LoggerOption::Stderr(sink) => logger.replace_sink(true, sink),
        }
    }
}

struct Sinks {
    stdout: Box<dyn Sink>,
    stderr: Box<dyn Sink>,
}

impl Sinks {
    fn write(&mut self, level: LogLevel, line: &[u8]) {
        let sink = if level.is_error_stream() {
            &mut self.stderr
        } else {
            &mut self.stdout
        };
        // Delivery is best effort; a broken stream must not reach the caller.
        let _ = sink.write(line);
    }

    fn flush(&mut self) {
        let _ = self.stdout.flush();
        let _ = self.stderr.flush();
    }
}

/// Synchronous console logger
///
/// Configuration happens through consuming `with_*` calls while the logger
/// is still owned; once it is shared it can only emit.
///
/// # Example
///
/// ```
/// use kage::Logger;
///
/// let log = Logger::new()
///     .with_prefix("Config")
///     .with_sub_prefix("Validator")
///     .without_colors();
///
/// assert_eq!(log.prefix(), Some("Config:Validator"));
/// log.info("validated 3 keys");
/// ```
pub struct Logger {
    config: LoggerConfig,
    sinks: Mutex<Sinks>,
}

impl Logger {
    /// Colors on, timestamps off, writing to the process stdout and stderr
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    #[must_use]
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            sinks: Mutex::new(Sinks {
                stdout: Box::new(ConsoleSink::stdout()),
                stderr: Box::new(ConsoleSink::stderr()),
            }),
        }
    }

    /// Build a logger from defaults plus `options`, applied in order
    ///
    /// ```
    /// use kage::{Logger, LoggerOption};
    ///
    /// let log = Logger::with_options([
    ///     LoggerOption::Prefix("Main Process".into()),
    ///     LoggerOption::Colors(false),
    ///     LoggerOption::Colors(true),
    /// ]);
    /// assert!(log.config().colors);
    /// ```
    #[must_use]
    pub fn with_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = LoggerOption>,
    {
        options
            .into_iter()
            .fold(Self::new(), |logger, option| option.apply(logger))
    }

    /// Set or replace the prefix; an empty name clears it
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = non_empty(prefix.into());
        self
    }

    /// Append `:sub_prefix` to the current prefix, or set it if there is none
    ///
    /// An empty name on a logger without a prefix leaves it without one.
    #[must_use]
    pub fn with_sub_prefix(mut self, sub_prefix: impl Into<String>) -> Self {
        let sub_prefix = sub_prefix.into();
        self.config.prefix = match self.config.prefix.take() {
            Some(prefix) => Some(format!("{}:{}", prefix, sub_prefix)),
            None => non_empty(sub_prefix),
        };
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self) -> Self {
        self.config.timestamp = true;
        self
    }

    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.config.timestamp = false;
        self
    }

    /// Set the timestamp pattern; only rendered while timestamps are enabled
    #[must_use]
    pub fn with_time_format(mut self, format: impl Into<TimestampFormat>) -> Self {
        self.config.time_format = format.into();
        self
    }

    #[must_use]
    pub fn with_colors(mut self) -> Self {
        self.config.colors = true;
        self
    }

    #[must_use]
    pub fn without_colors(mut self) -> Self {
        self.config.colors = false;
        self
    }

    /// Redirect Debug, Info and Success lines
    #[must_use]
    pub fn with_stdout<S: Sink + 'static>(self, sink: S) -> Self {
        self.replace_sink(false, Box::new(sink))
    }

    /// Redirect Warning and Error lines
    #[must_use]
    pub fn with_stderr<S: Sink + 'static>(self, sink: S) -> Self {
        self.replace_sink(true, Box::new(sink))
    }

    fn replace_sink(mut self, error_stream: bool, sink: Box<dyn Sink>) -> Self {
        let sinks = self.sinks.get_mut();
        if error_stream {
            sinks.stderr = sink;
        } else {
            sinks.stdout = sink;
        }
        self
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn prefix(&self) -> Option<&str> {
        self.config.prefix.as_deref()
    }

    /// Render one line, trailing newline included
    pub fn render(
        &self,
        level: LogLevel,
        message: &dyn fmt::Display,
        now: &DateTime<Local>,
    ) -> String {
        let colors = self.config.colors;
        let mut line = String::with_capacity(64);

        if self.config.timestamp {
            if colors {
                line.push_str(&escape(TIMESTAMP_COLOR));
            }
            line.push_str(&self.config.time_format.format(now));
            if colors {
                line.push_str(RESET);
            }
            line.push(' ');
        }

        let level_color = escape(level.color());
        if colors {
            line.push_str(&level_color);
            line.push_str(&level.padded_label());
            line.push_str(RESET);
        } else {
            line.push_str(&level.padded_label());
        }
        line.push(' ');

        if let Some(prefix) = &self.config.prefix {
            if colors {
                line.push_str(&escape(PREFIX_COLOR));
            }
            line.push_str(&pad_right(&format!("[{}]", prefix), PREFIX_WIDTH));
            if colors {
                line.push_str(RESET);
            }
            line.push(' ');
        }

        if colors {
            line.push_str(&level_color);
        }
        // A Display impl that errors leaves the body truncated.
        let _ = write!(line, "{}", message);
        if colors {
            line.push_str(RESET);
        }
        line.push('\n');

        line
    }

    pub fn log(&self, level: LogLevel, message: impl fmt::Display) {
        let line = self.render(level, &message, &Local::now());

        let _console = CONSOLE_LOCK.lock();
        self.sinks.lock().write(level, line.as_bytes());
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn success(&self, message: impl fmt::Display) {
        self.log(LogLevel::Success, message);
    }

    /// Log at Error level, then exit the process with status 1
    ///
    /// The line is written and both sinks flushed before exiting. The
    /// locks stay held until the process is gone, so no other line can
    /// follow it.
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        let line = self.render(LogLevel::Error, &message, &Local::now());

        let _console = CONSOLE_LOCK.lock();
        let mut sinks = self.sinks.lock();
        sinks.write(LogLevel::Error, line.as_bytes());
        sinks.flush();
        process::exit(1)
    }
}

fn non_empty(prefix: String) -> Option<String> {
    (!prefix.is_empty()).then_some(prefix)
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
