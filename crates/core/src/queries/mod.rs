//! Read-only query operations over the catalog store.

pub mod options;
pub mod results;
pub mod service;

pub use options::{
    DEFAULT_PAGE_SIZE, ProductListOptions, SortKey, SortOrder, UnknownSortKey, UnknownSortOrder,
};
pub use results::{CategoryWithCount, ProductDetail, ProductPage, ProductSuggestion, SearchResults};
pub use service::{CatalogService, InMemoryCatalogService, MockCatalogService};
