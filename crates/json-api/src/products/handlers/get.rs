//! Product Detail Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, products::models::ProductDetailResponse};

/// Product Detail Handler
///
/// Returns the product with the given slug, with its category embedded.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    slug: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductDetailResponse>, StatusError> {
    let state = depot.state()?;

    let detail = state
        .catalog
        .product_detail(&slug.into_inner())
        .ok_or_else(|| StatusError::not_found().brief("Product not found"))?;

    Ok(Json(detail.into()))
}
