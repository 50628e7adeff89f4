//! Per-plugin named logger facade

use super::diagnostic::Diagnostic;
use super::error::{LoggerError, Result};
use super::provider::SharedTerminalProvider;
use super::terminal::Terminal;
use crate::providers::PrefixProxyTerminalProvider;
use std::sync::{Arc, Weak};

/// Identity of a plugin registered with the host.
///
/// The host owns the handle in an `Arc`; loggers only hold a weak
/// back-reference for attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginHandle {
    pub plugin_name: String,
}

impl PluginHandle {
    pub fn new(plugin_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
        }
    }
}

/// Capability polled at emission time to decide whether extended detail is
/// written. The result is never cached, so a verbosity toggle mid-build
/// takes effect on the next emission.
pub type VerbosityQuery = Arc<dyn Fn() -> bool + Send + Sync>;

/// Construction options for [`NamedLogger`].
pub struct NamedLoggerOptions {
    pub requesting_plugin: Arc<PluginHandle>,
    pub logger_name: String,
    pub terminal_provider: SharedTerminalProvider,
    pub get_verbose_enabled: VerbosityQuery,
}

/// Per-plugin diagnostic logging handle.
///
/// Aggregates emitted errors and warnings in emission order and writes each
/// one through a terminal whose provider prefixes every line with
/// `"[name] "`. Aggregation state is only reachable through `&mut self`, so
/// the single-writer assumption is enforced by the compiler; sharing a
/// logger across threads is the host's concern.
pub struct NamedLogger {
    requesting_plugin: Weak<PluginHandle>,
    logger_name: String,
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    terminal_provider: Arc<PrefixProxyTerminalProvider>,
    terminal: Terminal,
    get_verbose_enabled: VerbosityQuery,
}

impl NamedLogger {
    /// Create a logger writing under the `"[name] "` prefix.
    ///
    /// Wraps the shared provider in a [`PrefixProxyTerminalProvider`] and
    /// builds a [`Terminal`] on top of it. Writes nothing.
    pub fn new(options: NamedLoggerOptions) -> Result<Self> {
        if options.logger_name.is_empty() {
            return Err(LoggerError::config(
                "NamedLogger",
                "logger name must not be empty",
            ));
        }

        let proxy = Arc::new(PrefixProxyTerminalProvider::new(
            options.terminal_provider,
            format!("[{}] ", options.logger_name),
        ));
        let terminal_provider: SharedTerminalProvider = proxy.clone();

        Ok(Self {
            requesting_plugin: Arc::downgrade(&options.requesting_plugin),
            logger_name: options.logger_name,
            errors: Vec::new(),
            warnings: Vec::new(),
            terminal_provider: proxy,
            terminal: Terminal::new(terminal_provider),
            get_verbose_enabled: options.get_verbose_enabled,
        })
    }

    fn verbose_enabled(&self) -> bool {
        (self.get_verbose_enabled)()
    }

    /// Record an error and write it as an error-classified line.
    ///
    /// Under elevated verbosity the extended detail, when present, is
    /// written as a second error line immediately after the message.
    /// Provider failures propagate; the diagnostic is recorded either way.
    pub fn emit_error(&mut self, error: Diagnostic) -> Result<()> {
        let message = error.message.clone();
        let detail = error.detail.clone();
        self.errors.push(error);

        self.terminal.write_error_line(&message)?;
        if self.verbose_enabled() {
            if let Some(detail) = detail {
                self.terminal.write_error_line(&detail)?;
            }
        }
        Ok(())
    }

    /// Record a warning and write it as a warning-classified line.
    ///
    /// Symmetric to [`emit_error`](Self::emit_error).
    pub fn emit_warning(&mut self, warning: Diagnostic) -> Result<()> {
        let message = warning.message.clone();
        let detail = warning.detail.clone();
        self.warnings.push(warning);

        self.terminal.write_warning_line(&message)?;
        if self.verbose_enabled() {
            if let Some(detail) = detail {
                self.terminal.write_warning_line(&detail)?;
            }
        }
        Ok(())
    }

    /// Errors emitted so far, in emission order.
    ///
    /// Returns a fresh copy on every call; mutating it never affects the
    /// logger's own record.
    pub fn errors(&self) -> Vec<Diagnostic> {
        self.errors.clone()
    }

    /// Warnings emitted so far, in emission order. Fresh copy per call.
    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.warnings.clone()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn logger_name(&self) -> &str {
        &self.logger_name
    }

    /// The terminal writing under this logger's prefix.
    ///
    /// Other components can use it to write additional lines that carry the
    /// same attribution tag.
    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    /// The prefixing proxy wrapped around the shared provider.
    pub fn terminal_provider(&self) -> SharedTerminalProvider {
        let provider: SharedTerminalProvider = self.terminal_provider.clone();
        provider
    }

    /// The plugin this logger was created for, if it is still alive.
    pub fn requesting_plugin(&self) -> Option<Arc<PluginHandle>> {
        self.requesting_plugin.upgrade()
    }
}
