//! Catalog query service.

use std::cmp::Ordering;

use mockall::automock;

use crate::{
    catalog::{records::ProductRecord, store::CatalogStore},
    queries::{
        options::{ProductListOptions, SortKey, SortOrder},
        results::{CategoryWithCount, ProductDetail, ProductPage, ProductSuggestion, SearchResults},
    },
};

/// Shortest query, in characters after trimming, that search will scan for.
const MIN_QUERY_CHARS: usize = 2;

/// Read-only catalog queries.
///
/// Every operation is a pure computation over the store: no I/O, no
/// mutation, and no failure mode beyond absence. Non-positive pagination
/// inputs are normalised to 1 rather than rejected.
#[automock]
pub trait CatalogService: Send + Sync {
    /// Every category annotated with its product count, in insertion order.
    fn list_categories(&self) -> Vec<CategoryWithCount>;

    /// A single category with its product count; `None` for an unknown slug.
    fn category_detail(&self, slug: &str) -> Option<CategoryWithCount>;

    /// Filter, sort, and paginate the product listing.
    fn list_products(&self, options: &ProductListOptions) -> ProductPage;

    /// A product and its resolved category; `None` for an unknown slug.
    fn product_detail(&self, slug: &str) -> Option<ProductDetail>;

    /// Newest featured products, capped at `limit`.
    fn featured_products(&self, limit: usize) -> Vec<ProductRecord>;

    /// Newest new-arrival products, capped at `limit`.
    fn new_arrivals(&self, limit: usize) -> Vec<ProductRecord>;

    /// Newest products sharing `category_id`, excluding `product_id`
    /// itself, capped at `limit`.
    fn related_products(&self, product_id: u32, category_id: u32, limit: usize)
    -> Vec<ProductRecord>;

    /// Products matching `query` in any searchable field, newest first.
    ///
    /// A product matches when the query appears in its name, description,
    /// metal type, or category name, or equals one of its tags. Queries
    /// shorter than two characters after trimming return the empty result
    /// without scanning.
    fn search(&self, query: &str, limit: usize) -> SearchResults;

    /// Lightweight name/tag substring matches for typeahead, ordered by
    /// name so the dropdown does not reshuffle as the user types.
    fn search_suggestions(&self, query: &str, limit: usize) -> Vec<ProductSuggestion>;
}

/// [`CatalogService`] over an in-memory [`CatalogStore`].
#[derive(Debug, Clone)]
pub struct InMemoryCatalogService {
    store: CatalogStore,
}

impl InMemoryCatalogService {
    /// Wrap a store in the query service.
    #[must_use]
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    /// The store this service queries.
    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    fn product_count(&self, category_id: u32) -> usize {
        self.store
            .products()
            .iter()
            .filter(|product| product.category_id == category_id)
            .count()
    }

    fn matches_search(&self, product: &ProductRecord, query: &str) -> bool {
        // Tags match whole-keyword only; every other field is a substring
        // match.
        product.name.to_lowercase().contains(query)
            || product.description.to_lowercase().contains(query)
            || product.tags.iter().any(|tag| tag == query)
            || product.metal_type.as_str().to_lowercase().contains(query)
            || self
                .store
                .category_by_id(product.category_id)
                .is_some_and(|category| category.name.to_lowercase().contains(query))
    }
}

impl CatalogService for InMemoryCatalogService {
    fn list_categories(&self) -> Vec<CategoryWithCount> {
        self.store
            .categories()
            .iter()
            .map(|category| CategoryWithCount {
                product_count: self.product_count(category.id),
                category: category.clone(),
            })
            .collect()
    }

    fn category_detail(&self, slug: &str) -> Option<CategoryWithCount> {
        let category = self.store.category_by_slug(slug)?;

        Some(CategoryWithCount {
            product_count: self.product_count(category.id),
            category: category.clone(),
        })
    }

    fn list_products(&self, options: &ProductListOptions) -> ProductPage {
        let page = options.page.max(1);
        let limit = options.limit.max(1);

        // A filter naming a category that does not exist matches nothing.
        let category_id = match options.category_slug.as_deref() {
            Some(slug) => match self.store.category_by_slug(slug) {
                Some(category) => Some(category.id),
                None => {
                    return ProductPage {
                        products: Vec::new(),
                        total: 0,
                        page,
                        limit,
                        total_pages: 0,
                    };
                }
            },
            None => None,
        };

        let mut matches: Vec<&ProductRecord> = self
            .store
            .products()
            .iter()
            .filter(|product| passes_filters(product, options, category_id))
            .collect();

        // The sort must be stable: products with equal keys keep their
        // insertion order, so page boundaries are deterministic across
        // requests with the same parameters.
        matches.sort_by(|a, b| {
            let ordering = compare_by(a, b, options.order_by);

            match options.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });

        let total = matches.len();

        ProductPage {
            products: matches
                .into_iter()
                .skip((page - 1).saturating_mul(limit))
                .take(limit)
                .cloned()
                .collect(),
            total,
            page,
            limit,
            total_pages: total.div_ceil(limit),
        }
    }

    fn product_detail(&self, slug: &str) -> Option<ProductDetail> {
        let product = self.store.product_by_slug(slug)?;
        let category = self.store.category_by_id(product.category_id)?;

        Some(ProductDetail {
            product: product.clone(),
            category: category.clone(),
        })
    }

    fn featured_products(&self, limit: usize) -> Vec<ProductRecord> {
        take_newest(
            self.store
                .products()
                .iter()
                .filter(|product| product.featured)
                .collect(),
            limit,
        )
    }

    fn new_arrivals(&self, limit: usize) -> Vec<ProductRecord> {
        take_newest(
            self.store
                .products()
                .iter()
                .filter(|product| product.is_new_arrival)
                .collect(),
            limit,
        )
    }

    fn related_products(
        &self,
        product_id: u32,
        category_id: u32,
        limit: usize,
    ) -> Vec<ProductRecord> {
        take_newest(
            self.store
                .products()
                .iter()
                .filter(|product| product.category_id == category_id && product.id != product_id)
                .collect(),
            limit,
        )
    }

    fn search(&self, query: &str, limit: usize) -> SearchResults {
        let Some(query) = normalized_query(query) else {
            return SearchResults::empty();
        };

        let matches: Vec<&ProductRecord> = self
            .store
            .products()
            .iter()
            .filter(|product| self.matches_search(product, &query))
            .collect();

        // The total counts every match, not just the capped slice.
        let total = matches.len();

        SearchResults {
            products: take_newest(matches, limit),
            total,
        }
    }

    fn search_suggestions(&self, query: &str, limit: usize) -> Vec<ProductSuggestion> {
        let Some(query) = normalized_query(query) else {
            return Vec::new();
        };

        let mut matches: Vec<&ProductRecord> = self
            .store
            .products()
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&query)
                    || product.tags.iter().any(|tag| tag.contains(&query))
            })
            .collect();

        matches.sort_by(|a, b| a.name.cmp(&b.name));

        matches
            .into_iter()
            .take(limit.max(1))
            .map(ProductSuggestion::from)
            .collect()
    }
}

/// Trim and lowercase a search query, dropping it when too short to scan.
fn normalized_query(query: &str) -> Option<String> {
    let query = query.trim().to_lowercase();

    (query.chars().count() >= MIN_QUERY_CHARS).then_some(query)
}

fn passes_filters(
    product: &ProductRecord,
    options: &ProductListOptions,
    category_id: Option<u32>,
) -> bool {
    category_id.is_none_or(|id| product.category_id == id)
        && options
            .metal_type
            .is_none_or(|metal| product.metal_type == metal)
        && options.min_price.is_none_or(|min| product.price >= min)
        && options.max_price.is_none_or(|max| product.price <= max)
        && options.featured.is_none_or(|flag| product.featured == flag)
        && options
            .new_arrival
            .is_none_or(|flag| product.is_new_arrival == flag)
}

fn compare_by(a: &ProductRecord, b: &ProductRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::Price => a.price.cmp(&b.price),
        SortKey::Name => a.name.cmp(&b.name),
    }
}

/// Sort newest first and clone the leading `limit` records.
fn take_newest(mut products: Vec<&ProductRecord>, limit: usize) -> Vec<ProductRecord> {
    products.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    products.into_iter().take(limit.max(1)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use testresult::TestResult;

    use crate::catalog::{
        errors::CatalogError,
        records::{CategoryRecord, MetalType},
        store::CatalogStore,
    };

    use super::*;

    fn day(n: i64) -> Timestamp {
        Timestamp::from_second(n * 86_400).unwrap_or(Timestamp::UNIX_EPOCH)
    }

    fn category(id: u32, name: &str, slug: &str) -> CategoryRecord {
        CategoryRecord {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            image: "https://cdn.example.com/category.jpg".to_string(),
            description: None,
            created_at: day(0),
            updated_at: day(0),
        }
    }

    fn product(id: u32, name: &str, category_id: u32, price: u64, created: i64) -> ProductRecord {
        ProductRecord {
            id,
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: format!("{name} description"),
            price,
            category_id,
            tags: Vec::new(),
            metal_type: MetalType::Silver,
            images: vec!["https://cdn.example.com/product.jpg".to_string()],
            featured: false,
            is_new_arrival: false,
            created_at: day(created),
            updated_at: day(created),
        }
    }

    fn catalog(products: Vec<ProductRecord>) -> Result<InMemoryCatalogService, CatalogError> {
        let categories = vec![
            category(1, "Rings", "rings"),
            category(2, "Necklaces", "necklaces"),
        ];

        Ok(InMemoryCatalogService::new(CatalogStore::new(
            categories, products,
        )?))
    }

    #[test]
    fn list_categories_counts_products_per_category() -> TestResult {
        let catalog = catalog(vec![
            product(1, "Band", 1, 100, 1),
            product(2, "Halo", 1, 200, 2),
            product(3, "Chain", 2, 300, 3),
        ])?;

        let categories = catalog.list_categories();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].category.slug, "rings");
        assert_eq!(categories[0].product_count, 2);
        assert_eq!(categories[1].product_count, 1);

        Ok(())
    }

    #[test]
    fn category_detail_unknown_slug_is_none() -> TestResult {
        let catalog = catalog(Vec::new())?;

        assert!(catalog.category_detail("bangles").is_none());

        Ok(())
    }

    #[test]
    fn list_products_applies_all_filters_conjunctively() -> TestResult {
        let mut rose = product(1, "Rose Band", 1, 18_500, 2);
        rose.metal_type = MetalType::RoseGold;

        let mut solitaire = product(2, "Solitaire", 1, 245_000, 1);
        solitaire.metal_type = MetalType::WhiteGold;

        let chain = product(3, "Chain", 2, 18_500, 3);

        let catalog = catalog(vec![rose, solitaire, chain])?;

        let page = catalog.list_products(&ProductListOptions {
            category_slug: Some("rings".to_string()),
            max_price: Some(200_000),
            ..ProductListOptions::default()
        });

        assert_eq!(page.total, 1);
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products[0].id, 1);

        Ok(())
    }

    #[test]
    fn price_bounds_are_inclusive() -> TestResult {
        let catalog = catalog(vec![
            product(1, "Cheap", 1, 100, 1),
            product(2, "Mid", 1, 200, 2),
            product(3, "Dear", 1, 300, 3),
        ])?;

        let page = catalog.list_products(&ProductListOptions {
            min_price: Some(100),
            max_price: Some(200),
            ..ProductListOptions::default()
        });

        let ids: Vec<u32> = page.products.iter().map(|p| p.id).collect();

        assert_eq!(page.total, 2);
        assert_eq!(ids, vec![2, 1], "newest first within the bounds");

        Ok(())
    }

    #[test]
    fn boolean_filters_match_exactly() -> TestResult {
        let mut featured = product(1, "Star", 1, 100, 1);
        featured.featured = true;

        let plain = product(2, "Plain", 1, 100, 2);

        let catalog = catalog(vec![featured, plain])?;

        let page = catalog.list_products(&ProductListOptions {
            featured: Some(true),
            ..ProductListOptions::default()
        });

        assert_eq!(page.total, 1);
        assert_eq!(page.products[0].id, 1);

        Ok(())
    }

    #[test]
    fn unknown_category_slug_matches_nothing() -> TestResult {
        let catalog = catalog(vec![product(1, "Band", 1, 100, 1)])?;

        let page = catalog.list_products(&ProductListOptions {
            category_slug: Some("tiaras".to_string()),
            ..ProductListOptions::default()
        });

        assert_eq!(page.total, 0);
        assert!(page.products.is_empty());
        assert_eq!(page.total_pages, 0);

        Ok(())
    }

    #[test]
    fn default_order_is_newest_first() -> TestResult {
        let catalog = catalog(vec![
            product(1, "Oldest", 1, 100, 1),
            product(2, "Newest", 1, 100, 9),
            product(3, "Middle", 1, 100, 5),
        ])?;

        let page = catalog.list_products(&ProductListOptions::default());

        let ids: Vec<u32> = page.products.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![2, 3, 1]);

        Ok(())
    }

    #[test]
    fn price_ascending_page_two_returns_second_cheapest() -> TestResult {
        let catalog = catalog(vec![
            product(1, "A", 1, 100, 1),
            product(2, "B", 1, 50, 2),
            product(3, "C", 1, 200, 3),
        ])?;

        let page = catalog.list_products(&ProductListOptions {
            order_by: SortKey::Price,
            order: SortOrder::Ascending,
            limit: 1,
            page: 2,
            ..ProductListOptions::default()
        });

        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products[0].price, 100);

        Ok(())
    }

    #[test]
    fn equal_sort_keys_preserve_insertion_order() -> TestResult {
        let catalog = catalog(vec![
            product(1, "First", 1, 500, 3),
            product(2, "Second", 1, 500, 3),
            product(3, "Third", 1, 500, 3),
        ])?;

        let ascending = catalog.list_products(&ProductListOptions {
            order_by: SortKey::Price,
            order: SortOrder::Ascending,
            ..ProductListOptions::default()
        });

        let descending = catalog.list_products(&ProductListOptions {
            order_by: SortKey::Price,
            order: SortOrder::Descending,
            ..ProductListOptions::default()
        });

        let ascending_ids: Vec<u32> = ascending.products.iter().map(|p| p.id).collect();
        let descending_ids: Vec<u32> = descending.products.iter().map(|p| p.id).collect();

        assert_eq!(ascending_ids, vec![1, 2, 3]);
        assert_eq!(descending_ids, vec![1, 2, 3]);

        Ok(())
    }

    #[test]
    fn pages_partition_the_filtered_set() -> TestResult {
        let products: Vec<ProductRecord> = (1..=7)
            .map(|n| product(n, &format!("Item {n}"), 1, u64::from(n) * 10, i64::from(n)))
            .collect();

        let catalog = catalog(products)?;

        let mut seen = Vec::new();
        let mut page_number = 1;

        loop {
            let page = catalog.list_products(&ProductListOptions {
                limit: 3,
                page: page_number,
                ..ProductListOptions::default()
            });

            assert_eq!(page.total, 7);
            assert_eq!(page.total_pages, 3);

            if page_number > page.total_pages {
                assert!(page.products.is_empty(), "pages past the end are empty");
                break;
            }

            seen.extend(page.products.iter().map(|p| p.id));
            page_number += 1;
        }

        let full = catalog.list_products(&ProductListOptions {
            limit: 7,
            ..ProductListOptions::default()
        });

        let expected: Vec<u32> = full.products.iter().map(|p| p.id).collect();

        assert_eq!(seen, expected, "pages concatenate to the full listing");

        Ok(())
    }

    #[test]
    fn total_is_independent_of_pagination() -> TestResult {
        let products: Vec<ProductRecord> = (1..=5)
            .map(|n| product(n, &format!("Item {n}"), 1, 100, i64::from(n)))
            .collect();

        let catalog = catalog(products)?;

        let first = catalog.list_products(&ProductListOptions {
            limit: 2,
            page: 1,
            ..ProductListOptions::default()
        });

        let beyond = catalog.list_products(&ProductListOptions {
            limit: 2,
            page: 9,
            ..ProductListOptions::default()
        });

        assert_eq!(first.total, 5);
        assert_eq!(beyond.total, 5);
        assert!(beyond.products.is_empty());

        Ok(())
    }

    #[test]
    fn non_positive_pagination_is_clamped() -> TestResult {
        let catalog = catalog(vec![
            product(1, "A", 1, 100, 1),
            product(2, "B", 1, 100, 2),
        ])?;

        let page = catalog.list_products(&ProductListOptions {
            page: 0,
            limit: 0,
            ..ProductListOptions::default()
        });

        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 1);
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.total_pages, 2);

        Ok(())
    }

    #[test]
    fn name_sort_is_lexicographic() -> TestResult {
        let catalog = catalog(vec![
            product(1, "Opal Ring", 1, 100, 1),
            product(2, "Amber Ring", 1, 100, 2),
            product(3, "Jade Ring", 1, 100, 3),
        ])?;

        let page = catalog.list_products(&ProductListOptions {
            order_by: SortKey::Name,
            order: SortOrder::Ascending,
            ..ProductListOptions::default()
        });

        let names: Vec<&str> = page.products.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["Amber Ring", "Jade Ring", "Opal Ring"]);

        Ok(())
    }

    #[test]
    fn featured_products_are_newest_first_and_capped() -> TestResult {
        let mut a = product(1, "A", 1, 100, 1);
        a.featured = true;

        let mut b = product(2, "B", 1, 100, 5);
        b.featured = true;

        let mut c = product(3, "C", 1, 100, 3);
        c.featured = true;

        let plain = product(4, "D", 1, 100, 9);

        let catalog = catalog(vec![a, b, c, plain])?;

        let featured = catalog.featured_products(2);

        let ids: Vec<u32> = featured.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![2, 3]);

        Ok(())
    }

    #[test]
    fn new_arrivals_only_include_flagged_products() -> TestResult {
        let mut arrival = product(1, "Fresh", 1, 100, 2);
        arrival.is_new_arrival = true;

        let old = product(2, "Stale", 1, 100, 9);

        let catalog = catalog(vec![arrival, old])?;

        let arrivals = catalog.new_arrivals(8);

        assert_eq!(arrivals.len(), 1);
        assert_eq!(arrivals[0].id, 1);

        Ok(())
    }

    #[test]
    fn related_products_share_category_and_exclude_self() -> TestResult {
        let catalog = catalog(vec![
            product(1, "Band", 1, 100, 1),
            product(2, "Halo", 1, 100, 4),
            product(3, "Signet", 1, 100, 2),
            product(4, "Chain", 2, 100, 9),
        ])?;

        let related = catalog.related_products(1, 1, 4);

        let ids: Vec<u32> = related.iter().map(|p| p.id).collect();

        assert_eq!(ids, vec![2, 3], "same category, newest first, no self");

        Ok(())
    }

    #[test]
    fn search_short_queries_short_circuit() -> TestResult {
        let catalog = catalog(vec![product(1, "Band", 1, 100, 1)])?;

        for query in ["", "a", "  b  "] {
            let results = catalog.search(query, 20);

            assert!(results.products.is_empty());
            assert_eq!(results.total, 0);
        }

        Ok(())
    }

    #[test]
    fn search_matches_any_field() -> TestResult {
        let mut tagged = product(1, "Band", 1, 100, 1);
        tagged.tags = vec!["luxury".to_string()];

        let mut white = product(2, "Halo", 1, 100, 2);
        white.metal_type = MetalType::WhiteGold;

        let described = {
            let mut p = product(3, "Signet", 1, 100, 3);
            p.description = "A luxury signet".to_string();
            p
        };

        let catalog = catalog(vec![tagged, white, described])?;

        let by_tag = catalog.search("luxury", 20);
        let by_metal = catalog.search("white", 20);

        let tag_ids: Vec<u32> = by_tag.products.iter().map(|p| p.id).collect();

        assert_eq!(tag_ids, vec![3, 1], "tag and description matches, newest first");
        assert_eq!(by_metal.total, 1);
        assert_eq!(by_metal.products[0].id, 2);

        Ok(())
    }

    #[test]
    fn search_tags_match_whole_keywords_only() -> TestResult {
        let mut tagged = product(1, "Band", 1, 100, 1);
        tagged.tags = vec!["earrings".to_string()];

        let catalog = catalog(vec![tagged])?;

        let results = catalog.search("earring", 20);

        assert_eq!(results.total, 0, "a tag prefix is not a tag match");

        Ok(())
    }

    #[test]
    fn search_matches_category_name() -> TestResult {
        let catalog = catalog(vec![product(1, "Chain", 2, 100, 1)])?;

        let results = catalog.search("necklace", 20);

        assert_eq!(results.total, 1);
        assert_eq!(results.products[0].id, 1);

        Ok(())
    }

    #[test]
    fn search_is_trimmed_and_case_insensitive() -> TestResult {
        let mut tagged = product(1, "Band", 1, 100, 1);
        tagged.tags = vec!["luxury".to_string()];

        let catalog = catalog(vec![tagged])?;

        let results = catalog.search("  LUXURY  ", 20);

        assert_eq!(results.total, 1);

        Ok(())
    }

    #[test]
    fn search_total_counts_matches_beyond_the_cap() -> TestResult {
        let products: Vec<ProductRecord> = (1..=5)
            .map(|n| product(n, &format!("Opal {n}"), 1, 100, i64::from(n)))
            .collect();

        let catalog = catalog(products)?;

        let results = catalog.search("opal", 2);

        assert_eq!(results.products.len(), 2);
        assert_eq!(results.total, 5);

        Ok(())
    }

    #[test]
    fn suggestions_match_name_or_tag_substrings() -> TestResult {
        let mut by_tag = product(1, "Band", 1, 100, 1);
        by_tag.tags = vec!["earrings".to_string()];

        let by_name = product(2, "Pearl Earrings", 1, 100, 2);
        let miss = product(3, "Chain", 2, 100, 3);

        let catalog = catalog(vec![by_tag, by_name, miss])?;

        // Substring tag matching is intentionally broader here than the
        // whole-keyword matching used by full search.
        let suggestions = catalog.search_suggestions("earring", 5);

        let ids: Vec<u32> = suggestions.iter().map(|s| s.id).collect();

        assert_eq!(ids, vec![1, 2], "alphabetical by name");

        Ok(())
    }

    #[test]
    fn suggestions_are_alphabetical_and_capped() -> TestResult {
        let catalog = catalog(vec![
            product(1, "Opal Ring", 1, 100, 5),
            product(2, "Amber Ring", 1, 100, 1),
            product(3, "Jade Ring", 1, 100, 3),
        ])?;

        let suggestions = catalog.search_suggestions("ring", 2);

        let names: Vec<&str> = suggestions.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["Amber Ring", "Jade Ring"]);

        Ok(())
    }

    #[test]
    fn suggestions_project_the_primary_image() -> TestResult {
        let mut two_images = product(1, "Opal Ring", 1, 4200, 1);
        two_images.images = vec![
            "https://cdn.example.com/front.jpg".to_string(),
            "https://cdn.example.com/back.jpg".to_string(),
        ];

        let catalog = catalog(vec![two_images])?;

        let suggestions = catalog.search_suggestions("opal", 5);

        assert_eq!(suggestions.len(), 1);
        assert_eq!(
            suggestions[0].image.as_deref(),
            Some("https://cdn.example.com/front.jpg")
        );
        assert_eq!(suggestions[0].price, 4200);
        assert_eq!(suggestions[0].slug, "opal-ring");

        Ok(())
    }

    #[test]
    fn suggestions_short_queries_return_nothing() -> TestResult {
        let catalog = catalog(vec![product(1, "Opal Ring", 1, 100, 1)])?;

        assert!(catalog.search_suggestions("o", 5).is_empty());

        Ok(())
    }

    #[test]
    fn product_detail_resolves_the_category() -> TestResult {
        let catalog = catalog(vec![product(1, "Band", 1, 100, 1)])?;

        let detail = catalog.product_detail("band");

        assert!(detail.is_some(), "expected the product to resolve");

        if let Some(detail) = detail {
            assert_eq!(detail.product.id, 1);
            assert_eq!(detail.category.slug, "rings");
        }

        Ok(())
    }

    #[test]
    fn product_detail_unknown_slug_is_none() -> TestResult {
        let catalog = catalog(Vec::new())?;

        assert!(catalog.product_detail("no-such-product").is_none());

        Ok(())
    }
}
