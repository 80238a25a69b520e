//! Log provider resolution and caching.
//!
//! A [`LogProvider`] owns one [`LogService`](crate::service::LogService).
//! Providers are built by a [`ProviderFactory`], a registration table of
//! constructors keyed by identifier, and memoized by a [`ProviderRegistry`].
//!
//! # Example
//!
//! ```
//! use seclog::provider::{ProviderFactory, ProviderRegistry};
//! use seclog::backend::SeverityFilter;
//! use seclog::service::LogService;
//! use std::sync::Arc;
//!
//! let registry = ProviderRegistry::new(ProviderFactory::with_builtins(SeverityFilter::default()));
//!
//! let provider = registry.get_provider()?;
//! assert_eq!(provider.id(), "tracing");
//! provider.service().log_message("app::Startup", "main", "ready")?;
//!
//! // Cached until cleared
//! assert!(Arc::ptr_eq(&provider, &registry.get_provider()?));
//! registry.clear();
//! assert!(!Arc::ptr_eq(&provider, &registry.get_provider()?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod factory;
mod registry;
mod types;

pub use factory::{Constructor, ProviderFactory, DEFAULT_PROVIDER_ID, NOOP_PROVIDER_ID};
pub use registry::ProviderRegistry;
pub use types::{LogProvider, StandardProvider};
