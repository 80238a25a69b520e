//! Memoizing provider registry.
//!
//! The registry resolves the configured provider identifier and keeps at most
//! one provider instance per identifier until [`ProviderRegistry::clear`] is
//! called. It is an ordinary value owned by application startup code and
//! shared by reference or `Arc`; nothing here is global.
//!
//! # Implementation
//!
//! The cache is a `DashMap`. A miss is resolved inside the entry API, so
//! concurrent misses for one identifier construct exactly one provider and no
//! caller observes a partially built instance. Constructors run while the
//! entry's shard is locked and must not call back into the same registry.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info, warn};

use super::factory::{ProviderFactory, DEFAULT_PROVIDER_ID};
use super::types::LogProvider;
use crate::backend::SeverityFilter;
use crate::config::LoggingSettings;
use crate::error::ProviderError;
use crate::service::LogService;

/// Resolves and caches log providers.
pub struct ProviderRegistry {
    factory: ProviderFactory,
    /// Configured identifier; empty selects [`DEFAULT_PROVIDER_ID`]
    selected: RwLock<String>,
    cache: DashMap<String, Arc<dyn LogProvider>>,
    resolutions: AtomicU64,
}

impl ProviderRegistry {
    /// Creates a registry that resolves the default provider.
    pub fn new(factory: ProviderFactory) -> Self {
        Self::with_selection(factory, "")
    }

    /// Creates a registry that resolves `selected`.
    ///
    /// An empty `selected` falls back to [`DEFAULT_PROVIDER_ID`].
    pub fn with_selection(factory: ProviderFactory, selected: impl Into<String>) -> Self {
        Self {
            factory,
            selected: RwLock::new(selected.into()),
            cache: DashMap::new(),
            resolutions: AtomicU64::new(0),
        }
    }

    /// Creates a registry over the built-in providers configured by `settings`.
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        Self::with_selection(
            ProviderFactory::with_builtins(settings.filter.clone()),
            settings.provider.clone(),
        )
    }

    /// Creates a registry over the built-in providers with default settings.
    pub fn with_defaults() -> Self {
        Self::new(ProviderFactory::with_builtins(SeverityFilter::default()))
    }

    /// Returns the provider for the configured identifier.
    ///
    /// On a cache hit the cached instance is returned. On a miss the provider
    /// is constructed through the factory and cached. Failures are not cached
    /// and never fall back to the default provider.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the identifier is not registered or its
    /// constructor fails.
    pub fn get_provider(&self) -> Result<Arc<dyn LogProvider>, ProviderError> {
        let id = self.resolved_id();
        self.provider(&id)
    }

    /// Returns the provider registered as `id`, constructing it on a miss.
    pub fn provider(&self, id: &str) -> Result<Arc<dyn LogProvider>, ProviderError> {
        if let Some(cached) = self.cache.get(id) {
            return Ok(Arc::clone(cached.value()));
        }

        // The shard stays locked while the entry is alive, so diagnostics are
        // emitted only after it is released
        let resolved = match self.cache.entry(id.to_string()) {
            // Another thread resolved it between the lookup and the entry lock
            Entry::Occupied(entry) => return Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                self.resolutions.fetch_add(1, Ordering::Relaxed);
                self.factory.create(id).map(|provider| {
                    entry.insert(Arc::clone(&provider));
                    provider
                })
            }
        };

        match &resolved {
            Ok(_) => info!(provider = id, "Log provider resolved"),
            Err(e) => warn!(provider = id, error = %e, "Log provider resolution failed"),
        }
        resolved
    }

    /// Returns the log service of the configured provider.
    pub fn get_service(&self) -> Result<Arc<dyn LogService>, ProviderError> {
        Ok(self.get_provider()?.service())
    }

    /// Drops every cached provider.
    ///
    /// Providers and services already handed out stay usable; the next lookup
    /// constructs a new instance.
    pub fn clear(&self) {
        let dropped = self.cache.len();
        self.cache.clear();
        debug!(dropped, "Log provider cache cleared");
    }

    /// Changes the configured identifier for subsequent lookups.
    ///
    /// Cached providers are kept; switching back finds them again.
    pub fn select(&self, id: impl Into<String>) {
        let id = id.into();
        debug!(provider = %id, "Log provider selected");
        *self.selected.write().unwrap_or_else(PoisonError::into_inner) = id;
    }

    /// The configured identifier, possibly empty.
    pub fn selected_id(&self) -> String {
        self.selected
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The identifier lookups resolve, with the default applied.
    pub fn resolved_id(&self) -> String {
        let selected = self.selected_id();
        match selected.trim() {
            "" => DEFAULT_PROVIDER_ID.to_string(),
            trimmed => trimmed.to_string(),
        }
    }

    /// Number of cache misses that attempted construction.
    pub fn resolution_count(&self) -> u64 {
        self.resolutions.load(Ordering::Relaxed)
    }

    /// Number of cached providers.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// The factory providers are built with.
    pub fn factory(&self) -> &ProviderFactory {
        &self.factory
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("factory", &self.factory)
            .field("selected", &self.selected_id())
            .field("cached", &self.cached_count())
            .field("resolutions", &self.resolution_count())
            .finish()
    }
}
