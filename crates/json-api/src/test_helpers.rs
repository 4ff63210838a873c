//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use vermeil::{
    catalog::{CategoryRecord, MetalType, ProductRecord},
    queries::MockCatalogService,
};

use crate::state::State;

/// Wrap a mocked catalog and a route into a servable test service.
pub(crate) fn catalog_service(catalog: MockCatalogService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::shared(Arc::new(catalog))))
            .push(route),
    )
}

pub(crate) fn day(n: i64) -> Timestamp {
    Timestamp::from_second(n * 86_400).unwrap_or(Timestamp::UNIX_EPOCH)
}

pub(crate) fn make_category(id: u32, name: &str, slug: &str) -> CategoryRecord {
    CategoryRecord {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        image: "https://cdn.example.com/category.jpg".to_string(),
        description: Some("A category".to_string()),
        created_at: day(0),
        updated_at: day(0),
    }
}

pub(crate) fn make_product(id: u32, name: &str, slug: &str, price: u64) -> ProductRecord {
    ProductRecord {
        id,
        name: name.to_string(),
        slug: slug.to_string(),
        description: format!("{name} description"),
        price,
        category_id: 1,
        tags: vec!["gift".to_string()],
        metal_type: MetalType::Silver,
        images: vec!["https://cdn.example.com/product.jpg".to_string()],
        featured: false,
        is_new_arrival: false,
        created_at: day(1),
        updated_at: day(1),
    }
}
