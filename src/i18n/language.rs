//! Language type: the closed set of languages the landing page ships copy for.
//!
//! Unlike a free-form string, a `LanguageCode` can only ever name a language
//! that has a fully populated catalog, so catalog lookup is total.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string does not name a supported language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown language code: '{0}'")]
pub struct UnknownLanguageError(pub String);

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LanguageCode {
    /// Spanish, the language served when no preference exists
    #[default]
    #[serde(rename = "es")]
    Es,
    /// English
    #[serde(rename = "en")]
    En,
}

impl LanguageCode {
    /// Every supported language, in menu order.
    pub const ALL: [LanguageCode; 2] = [LanguageCode::Es, LanguageCode::En];

    /// Parse a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "en", "es")
    ///
    /// # Returns
    /// * `Ok(LanguageCode)` if the code names a supported language
    /// * `Err(UnknownLanguageError)` otherwise
    ///
    /// # Example
    /// ```ignore
    /// let spanish = LanguageCode::from_code("es")?;
    /// ```
    pub fn from_code(code: &str) -> Result<LanguageCode, UnknownLanguageError> {
        match code {
            "es" => Ok(LanguageCode::Es),
            "en" => Ok(LanguageCode::En),
            other => Err(UnknownLanguageError(other.to_string())),
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        match self {
            LanguageCode::Es => "es",
            LanguageCode::En => "en",
        }
    }

    /// The other language. With two languages the switcher is a toggle.
    pub fn other(&self) -> LanguageCode {
        match self {
            LanguageCode::Es => LanguageCode::En,
            LanguageCode::En => LanguageCode::Es,
        }
    }

    /// Get the registry entry for this language.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get().config_for(*self)
    }

    /// Get the English name of the language (e.g., "Spanish").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LanguageCode {
    type Err = UnknownLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LanguageCode::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_spanish() {
        let language = LanguageCode::from_code("es").expect("Should succeed");
        assert_eq!(language, LanguageCode::Es);
        assert_eq!(language.code(), "es");
    }

    #[test]
    fn test_from_code_english() {
        let language = LanguageCode::from_code("en").expect("Should succeed");
        assert_eq!(language, LanguageCode::En);
        assert_eq!(language.name(), "English");
    }

    #[test]
    fn test_from_code_invalid() {
        let result = LanguageCode::from_code("fr");
        assert_eq!(result, Err(UnknownLanguageError("fr".to_string())));
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert!(LanguageCode::from_code("EN").is_err());
        assert!(LanguageCode::from_code("").is_err());
    }

    #[test]
    fn test_parse_via_from_str() {
        let parsed: LanguageCode = "en".parse().unwrap();
        assert_eq!(parsed, LanguageCode::En);
    }

    // ==================== Behaviour Tests ====================

    #[test]
    fn test_default_is_spanish() {
        assert_eq!(LanguageCode::default(), LanguageCode::Es);
    }

    #[test]
    fn test_other_toggles() {
        assert_eq!(LanguageCode::Es.other(), LanguageCode::En);
        assert_eq!(LanguageCode::En.other(), LanguageCode::Es);
    }

    #[test]
    fn test_display_matches_code() {
        assert_eq!(LanguageCode::Es.to_string(), "es");
        assert_eq!(format!("{}", LanguageCode::En), "en");
    }

    #[test]
    fn test_native_name() {
        assert_eq!(LanguageCode::Es.native_name(), "Español");
        assert_eq!(LanguageCode::En.native_name(), "English");
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        assert_eq!(serde_json::to_string(&LanguageCode::En).unwrap(), "\"en\"");
        let parsed: LanguageCode = serde_json::from_str("\"es\"").unwrap();
        assert_eq!(parsed, LanguageCode::Es);
    }
}
