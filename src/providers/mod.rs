//! Terminal provider implementations

pub mod memory;
pub mod prefix_proxy;

#[cfg(feature = "console")]
pub mod console;

pub use memory::MemoryTerminalProvider;
pub use prefix_proxy::PrefixProxyTerminalProvider;

#[cfg(feature = "console")]
pub use console::ConsoleTerminalProvider;

// Re-export the trait for convenience
pub use crate::core::TerminalProvider;
