//! Category response models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use vermeil::{catalog::CategoryRecord, queries::CategoryWithCount};

/// A category as served to the storefront.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryResponse {
    /// Unique category identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// URL-safe identifier used in category links
    pub slug: String,

    /// Image URI
    pub image: String,

    /// Optional display description
    pub description: Option<String>,

    /// Creation time
    pub created_at: String,

    /// Last update time
    pub updated_at: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        CategoryResponse {
            id: category.id,
            name: category.name,
            slug: category.slug,
            image: category.image,
            description: category.description,
            created_at: category.created_at.to_string(),
            updated_at: category.updated_at.to_string(),
        }
    }
}

/// A category annotated with the number of products it holds.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryWithCountResponse {
    /// Unique category identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// URL-safe identifier used in category links
    pub slug: String,

    /// Image URI
    pub image: String,

    /// Optional display description
    pub description: Option<String>,

    /// Number of products in the category
    pub product_count: usize,

    /// Creation time
    pub created_at: String,

    /// Last update time
    pub updated_at: String,
}

impl From<CategoryWithCount> for CategoryWithCountResponse {
    fn from(entry: CategoryWithCount) -> Self {
        let category = CategoryResponse::from(entry.category);

        CategoryWithCountResponse {
            id: category.id,
            name: category.name,
            slug: category.slug,
            image: category.image,
            description: category.description,
            product_count: entry.product_count,
            created_at: category.created_at,
            updated_at: category.updated_at,
        }
    }
}
