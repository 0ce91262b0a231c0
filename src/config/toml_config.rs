use crate::domain::model::NumberFormat;
use crate::utils::error::{FormatError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ELLIPSIS: &str = "...";
const MAX_CURRENCY_WIDTH: usize = 64;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub display: ColumnConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleConfig {
    pub decimal_separator: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnConfig {
    pub ellipsis: Option<String>,
    pub currency_width: Option<usize>,
}

impl DisplayConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormatError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FormatError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FormatError::ConfigParseError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn number_format(&self) -> Result<NumberFormat> {
        match &self.locale.decimal_separator {
            Some(separator) => NumberFormat::new(separator.clone()),
            None => Ok(NumberFormat::default()),
        }
    }

    pub fn ellipsis(&self) -> &str {
        self.display.ellipsis.as_deref().unwrap_or(DEFAULT_ELLIPSIS)
    }

    pub fn currency_width(&self) -> Option<usize> {
        self.display.currency_width
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<()> {
        if let Some(separator) = &self.locale.decimal_separator {
            validation::validate_non_empty_string("locale.decimal_separator", separator)?;
            validation::validate_no_digits("locale.decimal_separator", separator)?;
        }

        if let Some(width) = self.display.currency_width {
            validation::validate_range("display.currency_width", width, 1, MAX_CURRENCY_WIDTH)?;
        }

        Ok(())
    }
}
