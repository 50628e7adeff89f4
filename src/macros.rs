//! Emission macros for ergonomic diagnostic formatting.
//!
//! These macros build a [`Diagnostic`](crate::Diagnostic) from `format!`
//! arguments and emit it through the given logger, similar to `println!`.
//!
//! # Examples
//!
//! ```
//! use plugin_diagnostics::prelude::*;
//! use plugin_diagnostics::{emit_error, emit_warning};
//! use std::sync::Arc;
//!
//! let memory = MemoryTerminalProvider::new();
//! let mut logger = NamedLogger::new(NamedLoggerOptions {
//!     requesting_plugin: Arc::new(PluginHandle::new("example")),
//!     logger_name: "Example".to_string(),
//!     terminal_provider: Arc::new(memory),
//!     get_verbose_enabled: Arc::new(|| false),
//! })?;
//!
//! emit_warning!(logger, "option {} is deprecated", "emitLegacy")?;
//! emit_error!(logger, "step failed with code {}", 2)?;
//! # Ok::<(), plugin_diagnostics::LoggerError>(())
//! ```

/// Emit a formatted error diagnostic.
#[macro_export]
macro_rules! emit_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit_error($crate::Diagnostic::new(format!($($arg)+)))
    };
}

/// Emit a formatted warning diagnostic.
#[macro_export]
macro_rules! emit_warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit_warning($crate::Diagnostic::new(format!($($arg)+)))
    };
}
