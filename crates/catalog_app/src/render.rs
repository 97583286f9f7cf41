use catalog_core::{format_price, ListingViewModel};

const LOCALE: &str = "de-DE";

/// Prints the listing the way the web page laid it out: header with the
/// declared total, child-category sidebar, then one line per article.
pub fn render(view: &ListingViewModel) {
    if let Some(error) = &view.error {
        println!("Error: {}", error.message);
        return;
    }

    match view.categories.first() {
        Some(category) => {
            println!("{} ({})", category.name, category.article_count);
            if !category.children.is_empty() {
                println!("Kategorien:");
                for child in &category.children {
                    println!("  {} (id: {}) -> {}", child.name, child.id, child.url_path);
                }
            }
        }
        None => println!("No categories found."),
    }

    println!();
    for article in &view.articles {
        let price = format_price(
            article.price.regular_minor_units,
            &article.price.currency,
            LOCALE,
        );
        println!("  {} / {} - {}", article.name, article.variant_name, price);
    }
    println!();
    println!(
        "{} of {} articles loaded",
        view.articles.len(),
        view.total_count
            .map_or_else(|| "?".to_string(), |total| total.to_string())
    );
}
