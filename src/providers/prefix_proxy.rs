//! Prefixing proxy over a shared terminal provider

use crate::core::{Result, Severity, SharedTerminalProvider, TerminalProvider};

/// Transparent wrapper that prepends a fixed tag to every line before
/// forwarding it to the wrapped provider.
///
/// The proxy holds no aggregation state and never buffers or reorders
/// lines. The prefix is applied per proxy, so any number of proxies can
/// share one underlying provider without interfering with each other.
pub struct PrefixProxyTerminalProvider {
    inner: SharedTerminalProvider,
    prefix: String,
}

impl PrefixProxyTerminalProvider {
    pub fn new(inner: SharedTerminalProvider, prefix: impl Into<String>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    // The prefix is also inserted after embedded newlines so multi-line
    // detail (source chains) stays attributable on every physical line.
    fn apply_prefix(&self, message: &str) -> String {
        let mut prefixed = String::with_capacity(self.prefix.len() + message.len());
        prefixed.push_str(&self.prefix);

        let mut parts = message.split('\n');
        if let Some(first) = parts.next() {
            prefixed.push_str(first);
        }
        for part in parts {
            prefixed.push('\n');
            prefixed.push_str(&self.prefix);
            prefixed.push_str(part);
        }

        prefixed
    }
}

impl TerminalProvider for PrefixProxyTerminalProvider {
    fn write_line(&self, message: &str, severity: Severity) -> Result<()> {
        self.inner.write_line(&self.apply_prefix(message), severity)
    }

    fn supports_color(&self) -> bool {
        self.inner.supports_color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MemoryTerminalProvider;
    use std::sync::Arc;

    #[test]
    fn test_prefix_prepended() {
        let memory = MemoryTerminalProvider::new();
        let proxy = PrefixProxyTerminalProvider::new(Arc::new(memory.clone()), "[Build] ");

        proxy.write_line("compiling", Severity::Log).unwrap();

        assert_eq!(memory.lines(), vec!["[Build] compiling"]);
    }

    #[test]
    fn test_severity_forwarded_unchanged() {
        let memory = MemoryTerminalProvider::new();
        let proxy = PrefixProxyTerminalProvider::new(Arc::new(memory.clone()), "[Build] ");

        proxy.write_line("broken", Severity::Error).unwrap();
        proxy.write_line("careful", Severity::Warning).unwrap();

        let records = memory.records();
        assert_eq!(records[0].0, Severity::Error);
        assert_eq!(records[1].0, Severity::Warning);
    }

    #[test]
    fn test_embedded_newlines_get_prefixed() {
        let memory = MemoryTerminalProvider::new();
        let proxy = PrefixProxyTerminalProvider::new(Arc::new(memory.clone()), "[Build] ");

        proxy
            .write_line("fail\ncaused by: io error", Severity::Error)
            .unwrap();

        assert_eq!(
            memory.lines(),
            vec!["[Build] fail\n[Build] caused by: io error"]
        );
    }

    #[test]
    fn test_empty_line_still_prefixed() {
        let memory = MemoryTerminalProvider::new();
        let proxy = PrefixProxyTerminalProvider::new(Arc::new(memory.clone()), "[Build] ");

        proxy.write_line("", Severity::Log).unwrap();

        assert_eq!(memory.lines(), vec!["[Build] "]);
    }

    #[test]
    fn test_two_proxies_do_not_interfere() {
        let memory = MemoryTerminalProvider::new();
        let shared: SharedTerminalProvider = Arc::new(memory.clone());
        let proxy_a = PrefixProxyTerminalProvider::new(Arc::clone(&shared), "[A] ");
        let proxy_b = PrefixProxyTerminalProvider::new(Arc::clone(&shared), "[B] ");

        proxy_a.write_line("one", Severity::Log).unwrap();
        proxy_b.write_line("two", Severity::Log).unwrap();
        proxy_a.write_line("three", Severity::Log).unwrap();

        assert_eq!(memory.lines(), vec!["[A] one", "[B] two", "[A] three"]);
    }

    #[test]
    fn test_supports_color_delegates() {
        struct ColorProvider;
        impl TerminalProvider for ColorProvider {
            fn write_line(&self, _message: &str, _severity: Severity) -> Result<()> {
                Ok(())
            }
            fn supports_color(&self) -> bool {
                true
            }
        }

        let proxy = PrefixProxyTerminalProvider::new(Arc::new(ColorProvider), "[X] ");
        assert!(proxy.supports_color());
    }
}
