//! Product Index Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{models::ProductPageResponse, params::RawListParams},
};

/// Product Index Handler
///
/// Returns a filtered, sorted, paginated product listing.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ProductPageResponse>, StatusError> {
    let state = depot.state()?;
    let options = RawListParams::from_request(req).into_options()?;

    let page = state.catalog.list_products(&options);

    Ok(Json(page.into()))
}
