//! Key resolution against the active locale.

use super::{default_catalog, detect::locale_fallback_chain, loader, Catalog, I18nError, Locale};
use parking_lot::RwLock;
use std::collections::HashMap;
use tokio::sync::broadcast;

/// Resolves translation keys for the active locale.
///
/// Implementations must never fail: an unknown key resolves to itself.
pub trait Translator: Send + Sync {
    /// Translate a key for an explicit locale.
    fn resolve_in(&self, locale: Locale, key: &str) -> String;

    /// Translate a key for the active locale.
    fn resolve(&self, key: &str) -> String {
        self.resolve_in(self.locale(), key)
    }

    /// The active locale.
    fn locale(&self) -> Locale;
}

struct State {
    current: Locale,
    catalogs: HashMap<Locale, Catalog>,
}

/// Catalog-backed translator with locale switching.
///
/// Locale switches are broadcast so views can rebuild their labels.
pub struct CatalogTranslator {
    state: RwLock<State>,
    changes: broadcast::Sender<Locale>,
}

impl CatalogTranslator {
    /// Create a translator with no catalogs.
    pub fn new(locale: Locale) -> Self {
        let (changes, _) = broadcast::channel(8);
        Self {
            state: RwLock::new(State {
                current: locale,
                catalogs: HashMap::new(),
            }),
            changes,
        }
    }

    /// Create a translator preloaded with the embedded catalogs.
    pub fn with_defaults(locale: Locale) -> Self {
        let translator = Self::new(locale);
        for l in Locale::ALL {
            let catalog = default_catalog(l);
            if !catalog.is_empty() {
                translator.add_catalog(l, catalog);
            }
        }
        translator
    }

    /// Embedded catalogs overlaid with the `.po` files found under `config`.
    pub fn from_dir(config: &loader::LoaderConfig, locale: Locale) -> Result<Self, I18nError> {
        let translator = Self::with_defaults(locale);
        for l in Locale::ALL {
            let catalog = loader::load_catalog(config, l)?;
            if !catalog.is_empty() {
                tracing::debug!(locale = %l, messages = catalog.len(), "loaded catalog");
                translator.add_catalog(l, catalog);
            }
        }
        Ok(translator)
    }

    /// Builder form of [`add_catalog`](Self::add_catalog).
    pub fn with_catalog(self, locale: Locale, catalog: Catalog) -> Self {
        self.add_catalog(locale, catalog);
        self
    }

    /// Merge a catalog into the one held for `locale`.
    pub fn add_catalog(&self, locale: Locale, catalog: Catalog) {
        let mut state = self.state.write();
        state.catalogs.entry(locale).or_default().merge(catalog);
    }

    /// Switch the active locale. Returns `true` and notifies subscribers
    /// when the locale actually changed.
    pub fn set_locale(&self, locale: Locale) -> bool {
        {
            let mut state = self.state.write();
            if state.current == locale {
                return false;
            }
            state.current = locale;
        }
        tracing::info!(locale = %locale, "locale changed");
        let _ = self.changes.send(locale);
        true
    }

    /// Receive every subsequent locale switch.
    pub fn subscribe(&self) -> broadcast::Receiver<Locale> {
        self.changes.subscribe()
    }
}

impl Translator for CatalogTranslator {
    fn resolve_in(&self, locale: Locale, key: &str) -> String {
        let state = self.state.read();
        for candidate in locale_fallback_chain(locale) {
            if let Some(msg) = state.catalogs.get(&candidate).and_then(|c| c.get(key)) {
                return msg.to_string();
            }
        }
        tracing::trace!(key, locale = %locale, "missing translation");
        key.to_string()
    }

    fn locale(&self) -> Locale {
        self.state.read().current
    }
}

impl std::fmt::Debug for CatalogTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("CatalogTranslator")
            .field("current", &state.current)
            .field("catalogs", &state.catalogs.len())
            .finish()
    }
}
