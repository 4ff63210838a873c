//! Product listing options.

use std::str::FromStr;

use thiserror::Error;

use crate::catalog::records::MetalType;

/// Number of products per listing page when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Validated options for a product listing query.
///
/// Filters are optional and combine conjunctively: a product appears in the
/// result only when it satisfies every filter that is present. Pagination
/// and ordering always have a value; `Default` gives the storefront
/// defaults (first page of twelve, newest first).
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListOptions {
    /// Restrict to products in the category with this slug
    pub category_slug: Option<String>,

    /// Restrict to products made of this metal
    pub metal_type: Option<MetalType>,

    /// Inclusive lower price bound
    pub min_price: Option<u64>,

    /// Inclusive upper price bound
    pub max_price: Option<u64>,

    /// Restrict by the featured flag
    pub featured: Option<bool>,

    /// Restrict by the new-arrival flag
    pub new_arrival: Option<bool>,

    /// 1-indexed page number; values below 1 are treated as 1
    pub page: usize,

    /// Page size; values below 1 are treated as 1
    pub limit: usize,

    /// Sort key
    pub order_by: SortKey,

    /// Sort direction
    pub order: SortOrder,
}

impl Default for ProductListOptions {
    fn default() -> Self {
        Self {
            category_slug: None,
            metal_type: None,
            min_price: None,
            max_price: None,
            featured: None,
            new_arrival: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            order_by: SortKey::default(),
            order: SortOrder::default(),
        }
    }
}

/// Sort key for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Creation time, the storefront default
    #[default]
    CreatedAt,

    /// Price
    Price,

    /// Name, lexicographic
    Name,
}

/// Error returned when a string does not name a supported sort key.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(Self::CreatedAt),
            "price" => Ok(Self::Price),
            "name" => Ok(Self::Name),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Smallest key first
    Ascending,

    /// Largest key first, the storefront default
    #[default]
    Descending,
}

/// Error returned when a string does not name a sort direction.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported sort order: {0}")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}
