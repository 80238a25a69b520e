//! Provider types and traits

use std::fmt;
use std::sync::Arc;

use crate::backend::Backend;
use crate::service::{LogService, StandardLogService};

/// A resolved logging implementation.
///
/// Implementors hand out the same log service for their whole lifetime.
pub trait LogProvider: Send + Sync {
    /// Identifier the provider was registered under.
    fn id(&self) -> &str;

    /// The log service owned by this provider.
    fn service(&self) -> Arc<dyn LogService>;
}

/// Provider pairing an identifier with a [`StandardLogService`].
pub struct StandardProvider {
    id: String,
    service: Arc<StandardLogService>,
}

impl StandardProvider {
    /// Creates a provider whose service dispatches to `backend`.
    pub fn new(id: impl Into<String>, backend: Arc<dyn Backend>) -> Self {
        Self {
            id: id.into(),
            service: Arc::new(StandardLogService::new(backend)),
        }
    }

    /// The concrete service, for callers that need more than the trait.
    pub fn standard_service(&self) -> &Arc<StandardLogService> {
        &self.service
    }
}

impl LogProvider for StandardProvider {
    fn id(&self) -> &str {
        &self.id
    }

    fn service(&self) -> Arc<dyn LogService> {
        self.service.clone()
    }
}

impl fmt::Debug for StandardProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardProvider")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}
