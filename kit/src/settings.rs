// Formatting settings, loaded from a JSON file or left at the pt-BR defaults
use crate::error::Result;
use crate::formatters::currency::{BRL_SYMBOL, DEFAULT_CURRENCY_CODE, DEFAULT_LOCALE};
use crate::formatters::date::DEFAULT_DATE_PATTERN;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FormatSettings {
    pub locale: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub date_pattern: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        FormatSettings {
            locale: DEFAULT_LOCALE.to_string(),
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            currency_symbol: BRL_SYMBOL.to_string(),
            date_pattern: DEFAULT_DATE_PATTERN.to_string(),
        }
    }
}

impl FormatSettings {
    /// Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading format settings");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KitError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings_are_brazilian() {
        let settings = FormatSettings::default();
        assert_eq!(settings.locale, "pt-BR");
        assert_eq!(settings.currency_code, "BRL");
        assert_eq!(settings.currency_symbol, "R$");
        assert_eq!(settings.date_pattern, "DD/MM/YYYY");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = FormatSettings::from_json_str(r#"{ "locale": "en-US", "currency_code": "USD" }"#).unwrap();
        assert_eq!(settings.locale, "en-US");
        assert_eq!(settings.currency_code, "USD");
        assert_eq!(settings.currency_symbol, "R$");
    }

    #[test]
    fn test_invalid_json_is_settings_error() {
        let result = FormatSettings::from_json_str("{ not json");
        assert!(matches!(result, Err(KitError::Settings { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "date_pattern": "YYYY-MM-DD" }}"#).unwrap();
        let settings = FormatSettings::load(file.path()).unwrap();
        assert_eq!(settings.date_pattern, "YYYY-MM-DD");
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = FormatSettings::load("/definitely/not/here.json");
        assert!(matches!(result, Err(KitError::Io { .. })));
    }
}
