//! Featured Products Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    products::{
        models::ProductResponse,
        params::{self, DEFAULT_SHOWCASE_LIMIT},
    },
};

/// Featured Products Handler
///
/// Returns the newest featured products.
#[endpoint(tags("products"), summary = "Featured Products")]
pub(crate) async fn handler(
    limit: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state()?;
    let limit = params::parse_count(limit.into_inner(), DEFAULT_SHOWCASE_LIMIT);

    let products = state.catalog.featured_products(limit);

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
