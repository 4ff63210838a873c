//! Depot helper extensions.

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::state::State;

/// Extraction of the injected shared state, mapped to a 500 when missing.
pub(crate) trait DepotExt {
    fn state(&self) -> Result<&Arc<State>, StatusError>;
}

impl DepotExt for Depot {
    fn state(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_ignored| {
            error!("shared state missing from depot");

            StatusError::internal_server_error()
        })
    }
}
