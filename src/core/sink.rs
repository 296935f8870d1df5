//! Sink trait for log output destinations

use super::error::Result;

/// A byte destination receiving fully rendered log lines.
pub trait Sink: Send {
    fn write(&mut self, line: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
