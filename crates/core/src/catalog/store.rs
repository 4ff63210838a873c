//! Catalog Store

use rustc_hash::FxHashMap;

use crate::catalog::{
    errors::CatalogError,
    records::{CategoryRecord, ProductRecord},
};

/// Immutable, insertion-ordered collection of catalog records.
///
/// The record vectors are the single source of truth; the id and slug maps
/// only index into them. Built once at startup and never mutated, so it can
/// be shared across concurrent readers without locking.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    categories: Vec<CategoryRecord>,
    products: Vec<ProductRecord>,
    category_ids: FxHashMap<u32, usize>,
    category_slugs: FxHashMap<String, usize>,
    product_ids: FxHashMap<u32, usize>,
    product_slugs: FxHashMap<String, usize>,
}

impl CatalogStore {
    /// Build a store from record collections, checking the catalog
    /// invariants.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when a category or product id/slug
    /// collides with an earlier record, or when a product references a
    /// category that does not exist.
    pub fn new(
        categories: Vec<CategoryRecord>,
        products: Vec<ProductRecord>,
    ) -> Result<Self, CatalogError> {
        let mut category_ids = FxHashMap::default();
        let mut category_slugs = FxHashMap::default();

        for (index, category) in categories.iter().enumerate() {
            if category_ids.insert(category.id, index).is_some() {
                return Err(CatalogError::DuplicateCategoryId(category.id));
            }

            if category_slugs.insert(category.slug.clone(), index).is_some() {
                return Err(CatalogError::DuplicateCategorySlug(category.slug.clone()));
            }
        }

        let mut product_ids = FxHashMap::default();
        let mut product_slugs = FxHashMap::default();

        for (index, product) in products.iter().enumerate() {
            if product_ids.insert(product.id, index).is_some() {
                return Err(CatalogError::DuplicateProductId(product.id));
            }

            if product_slugs.insert(product.slug.clone(), index).is_some() {
                return Err(CatalogError::DuplicateProductSlug(product.slug.clone()));
            }

            if !category_ids.contains_key(&product.category_id) {
                return Err(CatalogError::UnknownCategory {
                    product_slug: product.slug.clone(),
                    category_id: product.category_id,
                });
            }
        }

        Ok(Self {
            categories,
            products,
            category_ids,
            category_slugs,
            product_ids,
            product_slugs,
        })
    }

    /// All categories in insertion order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryRecord] {
        &self.categories
    }

    /// All products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Look up a category by slug; absence is not an error.
    #[must_use]
    pub fn category_by_slug(&self, slug: &str) -> Option<&CategoryRecord> {
        self.category_slugs
            .get(slug)
            .and_then(|&index| self.categories.get(index))
    }

    /// Look up a category by numeric id.
    #[must_use]
    pub fn category_by_id(&self, id: u32) -> Option<&CategoryRecord> {
        self.category_ids
            .get(&id)
            .and_then(|&index| self.categories.get(index))
    }

    /// Look up a product by slug; absence is not an error.
    #[must_use]
    pub fn product_by_slug(&self, slug: &str) -> Option<&ProductRecord> {
        self.product_slugs
            .get(slug)
            .and_then(|&index| self.products.get(index))
    }

    /// Look up a product by numeric id.
    #[must_use]
    pub fn product_by_id(&self, id: u32) -> Option<&ProductRecord> {
        self.product_ids
            .get(&id)
            .and_then(|&index| self.products.get(index))
    }
}
