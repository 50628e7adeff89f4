//! Formatted writer over a terminal provider

use super::{error::Result, provider::SharedTerminalProvider, severity::Severity};
use std::sync::Arc;

/// Severity-classified line writer bound to one provider.
///
/// Holds no state beyond the provider handle; cloning a `Terminal` yields
/// another writer over the same provider.
#[derive(Clone)]
pub struct Terminal {
    provider: SharedTerminalProvider,
}

impl Terminal {
    pub fn new(provider: SharedTerminalProvider) -> Self {
        Self { provider }
    }

    /// Get a handle to the underlying provider
    pub fn provider(&self) -> SharedTerminalProvider {
        Arc::clone(&self.provider)
    }

    pub fn write_line(&self, message: &str) -> Result<()> {
        self.provider.write_line(message, Severity::Log)
    }

    pub fn write_warning_line(&self, message: &str) -> Result<()> {
        self.provider.write_line(message, Severity::Warning)
    }

    pub fn write_error_line(&self, message: &str) -> Result<()> {
        self.provider.write_line(message, Severity::Error)
    }

    pub fn write_verbose_line(&self, message: &str) -> Result<()> {
        self.provider.write_line(message, Severity::Verbose)
    }
}
