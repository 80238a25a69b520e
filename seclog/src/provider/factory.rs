//! Provider factory for identifier-based provider creation.
//!
//! The factory is a registration table mapping identifiers to constructor
//! functions. It is populated at startup and looked up by string key, so new
//! backends can be plugged in without touching resolution code.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::types::{LogProvider, StandardProvider};
use crate::backend::{NoOpBackend, SeverityFilter, TracingBackend};
use crate::error::{BoxError, ProviderError};

/// Identifier resolved when no provider is configured.
pub const DEFAULT_PROVIDER_ID: &str = "tracing";

/// Identifier of the built-in provider that discards everything.
pub const NOOP_PROVIDER_ID: &str = "noop";

/// Constructor registered for a provider identifier.
pub type Constructor = Arc<dyn Fn() -> Result<Arc<dyn LogProvider>, BoxError> + Send + Sync>;

/// Table of provider constructors.
///
/// # Example
///
/// ```
/// use seclog::backend::NoOpBackend;
/// use seclog::provider::{LogProvider, ProviderFactory, StandardProvider};
/// use std::sync::Arc;
///
/// let mut factory = ProviderFactory::new();
/// factory.register("quiet", || {
///     Ok(Arc::new(StandardProvider::new("quiet", Arc::new(NoOpBackend))) as Arc<dyn LogProvider>)
/// });
///
/// let provider = factory.create("quiet")?;
/// assert_eq!(provider.id(), "quiet");
/// assert!(factory.create("syslog").is_err());
/// # Ok::<(), seclog::ProviderError>(())
/// ```
#[derive(Clone, Default)]
pub struct ProviderFactory {
    constructors: HashMap<String, Constructor>,
}

impl ProviderFactory {
    /// Creates an empty factory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a factory with the built-in providers registered.
    ///
    /// - `tracing`: a [`TracingBackend`] applying `filter`
    /// - `noop`: a [`NoOpBackend`]
    pub fn with_builtins(filter: SeverityFilter) -> Self {
        let mut factory = Self::new();
        factory.register(DEFAULT_PROVIDER_ID, move || {
            let backend = TracingBackend::new(filter.clone());
            Ok(Arc::new(StandardProvider::new(DEFAULT_PROVIDER_ID, Arc::new(backend)))
                as Arc<dyn LogProvider>)
        });
        factory.register(NOOP_PROVIDER_ID, || {
            Ok(Arc::new(StandardProvider::new(NOOP_PROVIDER_ID, Arc::new(NoOpBackend)))
                as Arc<dyn LogProvider>)
        });
        factory
    }

    /// Registers a constructor, replacing any previous one for `id`.
    pub fn register<F>(&mut self, id: impl Into<String>, constructor: F)
    where
        F: Fn() -> Result<Arc<dyn LogProvider>, BoxError> + Send + Sync + 'static,
    {
        self.constructors.insert(id.into(), Arc::new(constructor));
    }

    /// Whether a constructor is registered for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.constructors.contains_key(id)
    }

    /// Registered identifiers, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Constructs a fresh provider for `id`.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::NotFound`] if nothing is registered for `id`
    /// - [`ProviderError::Construction`] if the constructor fails
    pub fn create(&self, id: &str) -> Result<Arc<dyn LogProvider>, ProviderError> {
        let constructor = self
            .constructors
            .get(id)
            .ok_or_else(|| ProviderError::NotFound(id.to_string()))?;

        constructor().map_err(|source| ProviderError::Construction {
            id: id.to_string(),
            source,
        })
    }
}

impl fmt::Debug for ProviderFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderFactory")
            .field("ids", &self.ids())
            .finish()
    }
}
