//! In-memory jewellery storefront catalog.
//!
//! The catalog is an immutable set of category and product records built
//! once at startup, plus the read-only query operations the storefront is
//! assembled from: category listings with product counts, filtered and
//! paginated product listings, curated showcases, and search.
//!
//! Nothing here performs I/O or mutates state after construction, so a
//! single [`catalog::CatalogStore`] can be shared freely across concurrent
//! request handlers.

pub mod catalog;
pub mod queries;
