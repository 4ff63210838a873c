//! New Arrivals Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    products::{
        models::ProductResponse,
        params::{self, DEFAULT_SHOWCASE_LIMIT},
    },
};

/// New Arrivals Handler
///
/// Returns the newest products flagged as new arrivals.
#[endpoint(tags("products"), summary = "New Arrivals")]
pub(crate) async fn handler(
    limit: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.state()?;
    let limit = params::parse_count(limit.into_inner(), DEFAULT_SHOWCASE_LIMIT);

    let products = state.catalog.new_arrivals(limit);

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
