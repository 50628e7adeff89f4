//! Line severity classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of a single output line.
///
/// Unlike a conventional log level, severity is never used for filtering.
/// It only tells the provider how to render a line, so a prefixing proxy
/// must forward it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    #[default]
    Log,
    Warning,
    Error,
    Verbose,
}

impl Severity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Log => "LOG",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Verbose => "VERBOSE",
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Severity::Log => White,
            Severity::Warning => Yellow,
            Severity::Error => Red,
            Severity::Verbose => BrightBlack,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOG" => Ok(Severity::Log),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "VERBOSE" => Ok(Severity::Verbose),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_to_str() {
        assert_eq!(Severity::Log.to_str(), "LOG");
        assert_eq!(Severity::Warning.to_str(), "WARNING");
        assert_eq!(Severity::Error.to_str(), "ERROR");
        assert_eq!(Severity::Verbose.to_str(), "VERBOSE");
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("WARN".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("Warning".parse::<Severity>(), Ok(Severity::Warning));
        assert!("critical".parse::<Severity>().is_err());
    }

    #[test]
    fn test_severity_display_matches_to_str() {
        for severity in [
            Severity::Log,
            Severity::Warning,
            Severity::Error,
            Severity::Verbose,
        ] {
            assert_eq!(format!("{}", severity), severity.to_str());
        }
    }

    #[test]
    fn test_severity_default_is_log() {
        assert_eq!(Severity::default(), Severity::Log);
    }
}
