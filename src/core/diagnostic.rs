//! Diagnostic record structure

use serde::{Deserialize, Serialize};
use std::fmt;

/// An error or warning emitted by a plugin.
///
/// Carries a human-readable message and optional extended detail (a source
/// chain or stack trace equivalent) that is only written under elevated
/// verbosity. The record is opaque to the logger: the message is never
/// validated, transformed, or deduplicated, and an empty message passes
/// through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Capture an error together with its source chain.
    ///
    /// Each `source()` link becomes one `caused by:` line in the extended
    /// detail, so the chain is only rendered under elevated verbosity.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut diagnostic = Self::new(error.to_string());

        let mut lines = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            lines.push(format!("caused by: {}", cause));
            source = cause.source();
        }
        if !lines.is_empty() {
            diagnostic.detail = Some(lines.join("\n"));
        }

        diagnostic
    }

    pub fn has_detail(&self) -> bool {
        self.detail.is_some()
    }
}

impl From<&str> for Diagnostic {
    fn from(message: &str) -> Self {
        Diagnostic::new(message)
    }
}

impl From<String> for Diagnostic {
    fn from(message: String) -> Self {
        Diagnostic::new(message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
