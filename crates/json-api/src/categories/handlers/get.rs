//! Category Detail Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{categories::models::CategoryWithCountResponse, extensions::*};

/// Category Detail Handler
///
/// Returns the category with the given slug, with its product count.
#[endpoint(tags("categories"), summary = "Get Category")]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CategoryWithCountResponse>, StatusError> {
    let state = depot.state()?;

    let category = state
        .catalog
        .category_detail(&slug.into_inner())
        .ok_or_else(|| StatusError::not_found().brief("Category not found"))?;

    Ok(Json(category.into()))
}
