//! Language context: the active language shared by everything that renders text.
//!
//! A `LanguageContext` is constructed once per application instance and
//! handed out by clone. Reads go through `current()`, dependents can
//! `subscribe()` to changes, and the only mutation path is `set()` (or
//! `set_language()` for untyped input). The chosen code is persisted to a
//! `PreferenceStore` under [`LANGUAGE_KEY`]; persistence failures are logged
//! and never reach the caller.

use crate::i18n::catalog::{lookup, Catalog};
use crate::i18n::LanguageCode;
use crate::storage::PreferenceStore;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Key under which the language preference is persisted.
pub const LANGUAGE_KEY: &str = "language";

/// Snapshot of the active language and its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageState {
    pub code: LanguageCode,
    pub catalog: &'static Catalog,
}

impl LanguageState {
    pub fn new(code: LanguageCode) -> Self {
        Self {
            code,
            catalog: lookup(code),
        }
    }
}

impl Default for LanguageState {
    fn default() -> Self {
        Self::new(LanguageCode::default())
    }
}

/// Shared handle to the active language. Clones observe the same state.
#[derive(Clone)]
pub struct LanguageContext {
    inner: Arc<Inner>,
}

struct Inner {
    state: watch::Sender<LanguageState>,
    store: Option<Arc<dyn PreferenceStore>>,
}

impl LanguageContext {
    /// Create a context, restoring the persisted preference when a store is
    /// available.
    ///
    /// Pass `None` where no durable storage exists (e.g. non-interactive
    /// rendering); the default language is used and no read is attempted.
    pub fn new(store: Option<Arc<dyn PreferenceStore>>) -> Self {
        let code = match &store {
            Some(store) => restore_preference(store.as_ref()),
            None => LanguageCode::default(),
        };

        let (state, _) = watch::channel(LanguageState::new(code));
        Self {
            inner: Arc::new(Inner { state, store }),
        }
    }

    /// Current language and catalog.
    pub fn current(&self) -> LanguageState {
        *self.inner.state.borrow()
    }

    /// Shorthand for `current().code`.
    pub fn code(&self) -> LanguageCode {
        self.current().code
    }

    /// Shorthand for `current().catalog`.
    pub fn catalog(&self) -> &'static Catalog {
        self.current().catalog
    }

    /// Switch to `code`, notify subscribers if it changed, and persist it.
    pub fn set(&self, code: LanguageCode) {
        let changed = self.inner.state.send_if_modified(|state| {
            if state.code == code {
                return false;
            }
            *state = LanguageState::new(code);
            true
        });

        if changed {
            info!("Language switched to {}", code);
        }

        self.persist(code);
    }

    /// Switch language from an untyped code. Unknown codes are ignored.
    pub fn set_language(&self, code: &str) {
        match LanguageCode::from_code(code) {
            Ok(code) => self.set(code),
            Err(e) => debug!("Ignoring language change: {}", e),
        }
    }

    /// Switch to the other language.
    pub fn toggle(&self) {
        self.set(self.code().other());
    }

    /// Receive every subsequent language change.
    pub fn subscribe(&self) -> watch::Receiver<LanguageState> {
        self.inner.state.subscribe()
    }

    fn persist(&self, code: LanguageCode) {
        let Some(store) = self.inner.store.as_deref() else {
            return;
        };
        if let Err(e) = store.set(LANGUAGE_KEY, code.code()) {
            warn!("Failed to persist language preference: {}", e);
        }
    }
}

impl std::fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageContext")
            .field("code", &self.code())
            .field("persistent", &self.inner.store.is_some())
            .finish()
    }
}

fn restore_preference(store: &dyn PreferenceStore) -> LanguageCode {
    match store.get(LANGUAGE_KEY) {
        Ok(Some(saved)) => LanguageCode::from_code(&saved).unwrap_or_else(|e| {
            debug!("Discarding saved language preference: {}", e);
            LanguageCode::default()
        }),
        Ok(None) => LanguageCode::default(),
        Err(e) => {
            warn!("Failed to read language preference: {}", e);
            LanguageCode::default()
        }
    }
}
