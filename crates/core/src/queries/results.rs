//! Query result shapes.

use crate::catalog::records::{CategoryRecord, ProductRecord};

/// A category annotated with the number of products it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryWithCount {
    /// The category record
    pub category: CategoryRecord,

    /// Number of products whose `category_id` references this category
    pub product_count: usize,
}

/// A product paired with its resolved category.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetail {
    /// The product record
    pub product: ProductRecord,

    /// The category the product belongs to
    pub category: CategoryRecord,
}

/// One page of a filtered, sorted product listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    /// The page slice
    pub products: Vec<ProductRecord>,

    /// Matching products across all pages
    pub total: usize,

    /// 1-indexed page number this slice covers
    pub page: usize,

    /// Page size the slice was taken with
    pub limit: usize,

    /// Number of pages needed to hold `total` products at `limit` per page
    pub total_pages: usize,
}

/// Products matching a full search, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResults {
    /// Matches, capped at the requested limit
    pub products: Vec<ProductRecord>,

    /// Number of matches before the cap
    pub total: usize,
}

impl SearchResults {
    /// The result served for blank and too-short queries.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            total: 0,
        }
    }
}

/// Minimal product projection for the search-as-you-type dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSuggestion {
    /// Product id
    pub id: u32,

    /// Product name
    pub name: String,

    /// Product slug for linking to the detail page
    pub slug: String,

    /// Primary image, when the product has one
    pub image: Option<String>,

    /// Price in major currency units
    pub price: u64,
}

impl From<&ProductRecord> for ProductSuggestion {
    fn from(product: &ProductRecord) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            image: product.primary_image().map(ToString::to_string),
            price: product.price,
        }
    }
}
