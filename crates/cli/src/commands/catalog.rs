//! Catalog listing.

use std::path::Path;

use navjyoti_storefront::{KeyValueStore, ProductCard, StoreClient};

use super::{CommandError, load_file};

/// Load product cards from `path`, apply the criteria and print the
/// matching products in display order.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the category is unknown.
pub fn list<S: KeyValueStore>(
    client: &mut StoreClient<S>,
    path: &Path,
    search: &str,
    category: &str,
    sort: &str,
) -> Result<(), CommandError> {
    let cards: Vec<ProductCard> = load_file(path)?;
    client.load_products(&cards);

    let options: Vec<&str> = client
        .category_options()
        .iter()
        .map(|option| option.value)
        .collect();
    tracing::debug!(?options, "Categories on page");

    client.set_search_query(search);
    client.set_sort(sort);
    let count = client.set_category(category)?;

    for entry in client.outcome().entries(client.catalog()) {
        println!(
            "{:<32} {:>10}  {}",
            entry.display_title,
            entry.price().to_string(),
            entry.category.label()
        );
    }
    println!("{count}");
    Ok(())
}
