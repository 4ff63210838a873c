//! Category Index Handler

use salvo::prelude::*;

use crate::{categories::models::CategoryWithCountResponse, extensions::*};

/// Category Index Handler
///
/// Returns every category with its product count.
#[endpoint(tags("categories"), summary = "List Categories")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<CategoryWithCountResponse>>, StatusError> {
    let state = depot.state()?;

    let categories = state.catalog.list_categories();

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}
