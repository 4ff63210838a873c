//! Catalog Fixtures
//!
//! The storefront dataset ships as a YAML document embedded in the crate
//! and is parsed into validated records at startup.

use jiff::Timestamp;
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{
    errors::CatalogError,
    records::{CategoryRecord, MetalType, ProductRecord},
    store::CatalogStore,
};

/// The seeded storefront dataset.
const SEED_CATALOG: &str = include_str!("../../data/catalog.yaml");

/// Fixture loading errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("malformed catalog document")]
    Parse(#[from] serde_norway::Error),

    #[error("product {0:?} has no images")]
    NoImages(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Root of a catalog YAML document.
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    /// Categories in display order
    pub categories: Vec<CategoryFixture>,

    /// Products in insertion order
    pub products: Vec<ProductFixture>,
}

/// Category Fixture
#[derive(Debug, Deserialize)]
pub struct CategoryFixture {
    /// Unique numeric identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Unique URL-safe identifier
    pub slug: String,

    /// Image URI
    pub image: String,

    /// Optional display description
    #[serde(default)]
    pub description: Option<String>,

    /// Creation time
    pub created_at: Timestamp,
}

impl From<CategoryFixture> for CategoryRecord {
    fn from(fixture: CategoryFixture) -> Self {
        CategoryRecord {
            id: fixture.id,
            name: fixture.name,
            slug: fixture.slug,
            image: fixture.image,
            description: fixture.description,
            created_at: fixture.created_at,
            updated_at: fixture.created_at,
        }
    }
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Unique numeric identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Unique URL-safe identifier
    pub slug: String,

    /// Display description
    pub description: String,

    /// Price in major currency units
    pub price: u64,

    /// Identifier of the category the product belongs to
    pub category_id: u32,

    /// Lowercase keyword tags
    pub tags: Vec<String>,

    /// Metal, in display form (e.g. "White Gold")
    pub metal: MetalType,

    /// Image URIs, primary first
    pub images: Vec<String>,

    /// Featured on the storefront
    #[serde(default)]
    pub featured: bool,

    /// Part of the new-arrivals showcase
    #[serde(default)]
    pub new_arrival: bool,

    /// Creation time
    pub created_at: Timestamp,
}

impl TryFrom<ProductFixture> for ProductRecord {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        if fixture.images.is_empty() {
            return Err(FixtureError::NoImages(fixture.slug));
        }

        Ok(ProductRecord {
            id: fixture.id,
            name: fixture.name,
            slug: fixture.slug,
            description: fixture.description,
            price: fixture.price,
            category_id: fixture.category_id,
            tags: fixture.tags,
            metal_type: fixture.metal,
            images: fixture.images,
            featured: fixture.featured,
            is_new_arrival: fixture.new_arrival,
            created_at: fixture.created_at,
            updated_at: fixture.created_at,
        })
    }
}

/// Parse a catalog YAML document and build a validated store from it.
///
/// # Errors
///
/// Returns an error when the document does not parse, when a product has
/// no images, or when the records violate a catalog invariant.
pub fn store_from_yaml(document: &str) -> Result<CatalogStore, FixtureError> {
    let document: CatalogDocument = serde_norway::from_str(document)?;

    let categories = document
        .categories
        .into_iter()
        .map(CategoryRecord::from)
        .collect();

    let products = document
        .products
        .into_iter()
        .map(ProductRecord::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CatalogStore::new(categories, products)?)
}

/// Build the store holding the seeded storefront dataset.
///
/// # Errors
///
/// Returns an error only when the embedded document is malformed; the
/// shipped dataset is covered by tests.
pub fn seeded() -> Result<CatalogStore, FixtureError> {
    store_from_yaml(SEED_CATALOG)
}
