//! Internationalization (i18n) for the landing page copy.
//!
//! # Architecture
//!
//! - `language`: the closed `LanguageCode` set
//! - `registry`: display metadata for the language switcher
//! - `catalog`: the typed shape of all copy, plus `lookup`
//! - `strings`: the Spanish and English catalogs
//! - `context`: the shared, persisted active-language handle
//!
//! # Example
//!
//! ```rust,ignore
//! use newcode_landing::i18n::{LanguageCode, LanguageContext};
//!
//! let context = LanguageContext::new(None);
//! context.set(LanguageCode::En);
//! assert_eq!(context.catalog().header.services, "Services");
//! ```

pub mod catalog;
mod context;
mod language;
mod registry;
mod strings;

pub use catalog::{lookup, Catalog};
pub use context::{LanguageContext, LanguageState, LANGUAGE_KEY};
pub use language::{LanguageCode, UnknownLanguageError};
pub use registry::{LanguageConfig, LanguageRegistry};
