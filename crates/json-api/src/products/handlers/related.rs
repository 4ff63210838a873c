//! Related Products Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::{
    extensions::*,
    products::{
        models::ProductResponse,
        params::{self, DEFAULT_RELATED_LIMIT},
    },
};

/// Related Products Handler
///
/// Returns the newest products from the same category as the given
/// product, excluding the product itself.
#[endpoint(tags("products"), summary = "Related Products")]
pub(crate) async fn handler(
    slug: PathParam<String>,
    limit: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state()?;
    let limit = params::parse_count(limit.into_inner(), DEFAULT_RELATED_LIMIT);

    let detail = state
        .catalog
        .product_detail(&slug.into_inner())
        .ok_or_else(|| StatusError::not_found().brief("Product not found"))?;

    let related =
        state
            .catalog
            .related_products(detail.product.id, detail.product.category_id, limit);

    Ok(Json(related.into_iter().map(Into::into).collect()))
}
