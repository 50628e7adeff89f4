//! # Plugin Diagnostics
//!
//! A per-plugin diagnostic logging facade for build-orchestration hosts.
//!
//! Each plugin registered with a host gets its own [`NamedLogger`]. The
//! logger aggregates emitted errors and warnings in memory so the host can
//! attribute diagnostics to their origin after the build, and it routes all
//! output through a prefixing proxy so every line is tagged with the logger
//! name.
//!
//! ## Features
//!
//! - **Attribution**: Errors and warnings are recorded per logger, in
//!   emission order, and exposed as read-only copies
//! - **Prefixed Output**: Many loggers share one terminal provider without
//!   interleaving confusion
//! - **Dynamic Verbosity**: Extended detail is shown or hidden based on a
//!   capability polled at emission time, not snapshotted at construction

pub mod core;
pub mod macros;
pub mod providers;

pub mod prelude {
    pub use crate::core::{
        Diagnostic, LoggerError, NamedLogger, NamedLoggerOptions, PluginHandle, Result, Severity,
        SharedTerminalProvider, Terminal, TerminalProvider, VerbosityQuery,
    };
    #[cfg(feature = "console")]
    pub use crate::providers::ConsoleTerminalProvider;
    pub use crate::providers::{MemoryTerminalProvider, PrefixProxyTerminalProvider};
}

pub use crate::core::{
    Diagnostic, LoggerError, NamedLogger, NamedLoggerOptions, PluginHandle, Result, Severity,
    SharedTerminalProvider, Terminal, TerminalProvider, VerbosityQuery,
};
#[cfg(feature = "console")]
pub use crate::providers::ConsoleTerminalProvider;
pub use crate::providers::{MemoryTerminalProvider, PrefixProxyTerminalProvider};
