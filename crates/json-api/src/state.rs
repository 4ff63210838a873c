//! State

use std::sync::Arc;

use vermeil::queries::CatalogService;

/// Shared handler state: the catalog service every endpoint queries.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) catalog: Arc<dyn CatalogService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub(crate) fn shared(catalog: Arc<dyn CatalogService>) -> Arc<Self> {
        Arc::new(Self::new(catalog))
    }
}
