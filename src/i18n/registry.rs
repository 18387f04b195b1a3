//! Language registry: display metadata for every supported language.
//!
//! The language switcher renders one entry per registered language. The
//! registry is a lazily initialized singleton built on `OnceLock`, so the
//! metadata is shared by every context and every request.

use crate::i18n::LanguageCode;
use serde::Serialize;
use std::sync::OnceLock;

/// Display metadata for a supported language.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    /// The language this entry describes
    pub code: LanguageCode,

    /// English name of the language (e.g., "English", "Spanish")
    pub name: &'static str,

    /// Native name of the language, as shown in the switcher menu
    #[serde(rename = "nativeName")]
    pub native_name: &'static str,

    /// Flag emoji shown next to the native name
    pub flag: &'static str,

    /// Whether this is the language used when no preference exists
    #[serde(rename = "isDefault")]
    pub is_default: bool,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    /// One entry per `LanguageCode::ALL`, in the same order
    languages: [LanguageConfig; 2],
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: LanguageCode::ALL.map(config_for),
        })
    }

    /// Get a language configuration by its code string.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code.code() == code)
    }

    /// Get the configuration for a typed language code. Total, since every
    /// `LanguageCode` variant is registered.
    pub fn config_for(&self, code: LanguageCode) -> &LanguageConfig {
        let [es, en] = &self.languages;
        match code {
            LanguageCode::Es => es,
            LanguageCode::En => en,
        }
    }

    /// Get all languages in switcher order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    pub fn default_language(&self) -> &LanguageConfig {
        self.config_for(LanguageCode::default())
    }
}

fn config_for(code: LanguageCode) -> LanguageConfig {
    match code {
        LanguageCode::Es => LanguageConfig {
            code,
            name: "Spanish",
            native_name: "Español",
            flag: "🇪🇸",
            is_default: true,
        },
        LanguageCode::En => LanguageConfig {
            code,
            name: "English",
            native_name: "English",
            flag: "🇺🇸",
            is_default: false,
        },
    }
}
