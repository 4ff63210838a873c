//! Catalog store errors.

use thiserror::Error;

/// Structural invariant violations detected when a store is built.
///
/// The catalog is read-only after construction, so these are the only
/// integrity failures the store can report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate category id {0}")]
    DuplicateCategoryId(u32),

    #[error("duplicate category slug {0:?}")]
    DuplicateCategorySlug(String),

    #[error("duplicate product id {0}")]
    DuplicateProductId(u32),

    #[error("duplicate product slug {0:?}")]
    DuplicateProductSlug(String),

    #[error("product {product_slug:?} references unknown category {category_id}")]
    UnknownCategory {
        product_slug: String,
        category_id: u32,
    },
}
