//! Browse the seeded catalog from the command line.

use vermeil::{
    catalog::fixtures::{self, FixtureError},
    queries::{CatalogService, InMemoryCatalogService, ProductListOptions, SortKey, SortOrder},
};

#[expect(clippy::print_stdout, reason = "Example program output to user")]
fn main() -> Result<(), FixtureError> {
    let catalog = InMemoryCatalogService::new(fixtures::seeded()?);

    println!("Categories:");

    for entry in catalog.list_categories() {
        println!(
            "  {:<12} {} products",
            entry.category.name, entry.product_count
        );
    }

    let rings = catalog.list_products(&ProductListOptions {
        category_slug: Some("rings".to_string()),
        order_by: SortKey::Price,
        order: SortOrder::Ascending,
        ..ProductListOptions::default()
    });

    println!("\nRings by price ({} total):", rings.total);

    for product in &rings.products {
        println!("  {:<28} {}", product.name, product.price);
    }

    let results = catalog.search("diamond", 5);

    println!(
        "\nSearch \"diamond\": showing {} of {} matches",
        results.products.len(),
        results.total
    );

    for product in &results.products {
        println!("  {}", product.name);
    }

    Ok(())
}
