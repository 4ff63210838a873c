//! Product response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use vermeil::{
    catalog::ProductRecord,
    queries::{ProductDetail, ProductPage},
};

use crate::categories::models::CategoryResponse;

/// A product as served in listings.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Unique product identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// URL-safe identifier used for detail links
    pub slug: String,

    /// Display description
    pub description: String,

    /// Price in major currency units
    pub price: u64,

    /// Identifier of the owning category
    pub category_id: u32,

    /// Keyword tags in display order
    pub tags: Vec<String>,

    /// Metal, in display form
    pub metal_type: String,

    /// Image URIs, primary first
    pub images: Vec<String>,

    /// Featured on the storefront
    pub featured: bool,

    /// Part of the new-arrivals showcase
    pub is_new_arrival: bool,

    /// Creation time
    pub created_at: String,

    /// Last update time
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id,
            name: product.name,
            slug: product.slug,
            description: product.description,
            price: product.price,
            category_id: product.category_id,
            tags: product.tags,
            metal_type: product.metal_type.to_string(),
            images: product.images,
            featured: product.featured,
            is_new_arrival: product.is_new_arrival,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// A product with its resolved category, as served on detail pages.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductDetailResponse {
    /// Unique product identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// URL-safe identifier used for detail links
    pub slug: String,

    /// Display description
    pub description: String,

    /// Price in major currency units
    pub price: u64,

    /// Identifier of the owning category
    pub category_id: u32,

    /// The owning category
    pub category: CategoryResponse,

    /// Keyword tags in display order
    pub tags: Vec<String>,

    /// Metal, in display form
    pub metal_type: String,

    /// Image URIs, primary first
    pub images: Vec<String>,

    /// Featured on the storefront
    pub featured: bool,

    /// Part of the new-arrivals showcase
    pub is_new_arrival: bool,

    /// Creation time
    pub created_at: String,

    /// Last update time
    pub updated_at: String,
}

impl From<ProductDetail> for ProductDetailResponse {
    fn from(detail: ProductDetail) -> Self {
        let product = ProductResponse::from(detail.product);

        ProductDetailResponse {
            id: product.id,
            name: product.name,
            slug: product.slug,
            description: product.description,
            price: product.price,
            category_id: product.category_id,
            category: detail.category.into(),
            tags: product.tags,
            metal_type: product.metal_type,
            images: product.images,
            featured: product.featured,
            is_new_arrival: product.is_new_arrival,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of products with pagination metadata.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductPageResponse {
    /// The page slice
    pub products: Vec<ProductResponse>,

    /// Matching products across all pages
    pub total: usize,

    /// 1-indexed page number this slice covers
    pub page: usize,

    /// Page size the slice was taken with
    pub limit: usize,

    /// Total number of pages
    pub total_pages: usize,
}

impl From<ProductPage> for ProductPageResponse {
    fn from(page: ProductPage) -> Self {
        ProductPageResponse {
            products: page.products.into_iter().map(Into::into).collect(),
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        }
    }
}
