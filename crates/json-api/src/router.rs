//! App Router

use salvo::Router;

use crate::{categories, products, search};

/// The storefront API surface.
///
/// Static segments (`featured`, `new-arrivals`) are registered before the
/// `{slug}` captures so they are never shadowed.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("categories")
                .get(categories::index::handler)
                .push(Router::with_path("{slug}").get(categories::get::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("featured").get(products::featured::handler))
                .push(Router::with_path("new-arrivals").get(products::new_arrivals::handler))
                .push(
                    Router::with_path("{slug}")
                        .get(products::get::handler)
                        .push(Router::with_path("related").get(products::related::handler)),
                ),
        )
        .push(Router::with_path("search").get(search::handler))
}
