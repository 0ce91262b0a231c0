use serde::{Deserialize, Serialize};

use crate::utils::error::{FormatError, Result};

/// Locale-provided number settings. Passed explicitly so formatting never
/// depends on the ambient environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFormat {
    decimal_separator: String,
}

impl NumberFormat {
    pub fn new(decimal_separator: impl Into<String>) -> Result<Self> {
        let decimal_separator = decimal_separator.into();
        if decimal_separator.is_empty() {
            return Err(FormatError::InvalidConfigValueError {
                field: "locale.decimal_separator".to_string(),
                value: decimal_separator,
                reason: "Decimal separator cannot be empty".to_string(),
            });
        }
        Ok(Self { decimal_separator })
    }

    pub fn decimal_separator(&self) -> &str {
        &self.decimal_separator
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: ".".to_string(),
        }
    }
}

/// Outcome of splitting a `host:port` string. A failed parse always carries
/// an empty host and port 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedHostPort {
    pub host: String,
    pub port: i32,
    pub ok: bool,
}

impl ParsedHostPort {
    pub fn parsed(host: String, port: i32) -> Self {
        Self {
            host,
            port,
            ok: true,
        }
    }

    pub fn failed() -> Self {
        Self::default()
    }

    pub fn into_option(self) -> Option<(String, i32)> {
        self.ok.then_some((self.host, self.port))
    }
}

/// Result of the uncached domain heuristic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainDerivation {
    /// The input parsed as a URL with a host; the label was derived from it.
    Parsed(String),
    /// The input could not be used as a URL; the label is the trimmed input.
    Fallback { label: String, reason: String },
}

impl DomainDerivation {
    pub fn label(&self) -> &str {
        match self {
            DomainDerivation::Parsed(label) => label,
            DomainDerivation::Fallback { label, .. } => label,
        }
    }

    pub fn into_label(self) -> String {
        match self {
            DomainDerivation::Parsed(label) => label,
            DomainDerivation::Fallback { label, .. } => label,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, DomainDerivation::Fallback { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_format_rejects_empty_separator() {
        assert!(NumberFormat::new("").is_err());
        assert_eq!(NumberFormat::new(",").unwrap().decimal_separator(), ",");
        assert_eq!(NumberFormat::default().decimal_separator(), ".");
    }

    #[test]
    fn test_failed_host_port_is_empty() {
        let failed = ParsedHostPort::failed();
        assert_eq!(failed.host, "");
        assert_eq!(failed.port, 0);
        assert!(!failed.ok);
        assert_eq!(failed.into_option(), None);
    }
}
