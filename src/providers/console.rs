//! Console provider implementation

use crate::core::{Result, Severity, TerminalProvider};
use colored::Colorize;
use std::io::Write;

/// Writes diagnostic lines to the process's standard streams.
///
/// Error and warning lines go to stderr, everything else to stdout.
pub struct ConsoleTerminalProvider {
    use_colors: bool,
}

impl ConsoleTerminalProvider {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn render(&self, message: &str, severity: Severity) -> String {
        if !self.use_colors || severity == Severity::Log {
            return message.to_string();
        }
        message.color(severity.color_code()).to_string()
    }
}

impl Default for ConsoleTerminalProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalProvider for ConsoleTerminalProvider {
    fn write_line(&self, message: &str, severity: Severity) -> Result<()> {
        let output = self.render(message, severity);
        match severity {
            Severity::Error | Severity::Warning => {
                let mut stderr = std::io::stderr().lock();
                writeln!(stderr, "{}", output)?;
            }
            Severity::Log | Severity::Verbose => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", output)?;
            }
        }
        Ok(())
    }

    fn supports_color(&self) -> bool {
        self.use_colors
    }
}
