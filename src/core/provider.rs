//! Terminal provider trait for diagnostic output destinations

use super::{error::Result, severity::Severity};
use std::sync::Arc;

/// Destination for rendered diagnostic lines.
///
/// One provider is typically shared by many loggers at once, so writes take
/// `&self`; implementations that accumulate state use interior mutability.
pub trait TerminalProvider: Send + Sync {
    /// Write a single line. The provider supplies the line terminator.
    fn write_line(&self, message: &str, severity: Severity) -> Result<()>;

    /// Whether the provider renders color escape sequences.
    fn supports_color(&self) -> bool {
        false
    }
}

pub type SharedTerminalProvider = Arc<dyn TerminalProvider>;
