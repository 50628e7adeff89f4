//! In-memory capture provider

use crate::core::{Result, Severity, TerminalProvider};
use parking_lot::Mutex;
use std::sync::Arc;

/// Captured line paired with its severity classification.
pub type CapturedLine = (Severity, String);

/// Provider that records every line instead of rendering it.
///
/// Used as the sink in tests and wherever a host wants to collect output
/// for a build summary. Clones share the same buffer, so a test can keep
/// one handle while loggers write through another.
#[derive(Clone, Default)]
pub struct MemoryTerminalProvider {
    lines: Arc<Mutex<Vec<CapturedLine>>>,
}

impl MemoryTerminalProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured line text, in write order. Fresh copy per call.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().iter().map(|(_, text)| text.clone()).collect()
    }

    /// Captured lines with their severities, in write order. Fresh copy per call.
    pub fn records(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl TerminalProvider for MemoryTerminalProvider {
    fn write_line(&self, message: &str, severity: Severity) -> Result<()> {
        self.lines.lock().push((severity, message.to_string()));
        Ok(())
    }
}
