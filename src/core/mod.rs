//! Core facade types and traits

pub mod diagnostic;
pub mod error;
pub mod named_logger;
pub mod provider;
pub mod severity;
pub mod terminal;

pub use diagnostic::Diagnostic;
pub use error::{LoggerError, Result};
pub use named_logger::{NamedLogger, NamedLoggerOptions, PluginHandle, VerbosityQuery};
pub use provider::{SharedTerminalProvider, TerminalProvider};
pub use severity::Severity;
pub use terminal::Terminal;
