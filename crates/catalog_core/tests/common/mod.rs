use std::sync::Once;

use catalog_core::{
    update, Article, CategoriesPage, Category, CategoryRef, Effect, ImageRef, ListingState, Msg,
    Price,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

pub fn article(name: &str, variant: &str, minor_units: i64, image: &str) -> Article {
    Article {
        name: name.to_string(),
        variant_name: variant.to_string(),
        price: Price {
            currency: "EUR".to_string(),
            regular_minor_units: minor_units,
        },
        images: vec![ImageRef {
            path: image.to_string(),
        }],
    }
}

pub fn living_room(article_count: u32, articles: Vec<Article>) -> Category {
    Category {
        name: "Living Room".to_string(),
        article_count,
        children: vec![
            CategoryRef {
                id: "1".to_string(),
                name: "Sofas".to_string(),
                url_path: "/sofas".to_string(),
            },
            CategoryRef {
                id: "2".to_string(),
                name: "Tables".to_string(),
                url_path: "/tables".to_string(),
            },
        ],
        articles,
    }
}

pub fn first_page_articles() -> Vec<Article> {
    vec![
        article("Comfortable Sofa", "Gray Fabric", 89900, "/images/sofa.jpg"),
        article("Coffee Table", "Oak Wood", 29900, "/images/table.jpg"),
    ]
}

pub fn first_page(article_count: u32) -> CategoriesPage {
    CategoriesPage {
        categories: vec![living_room(article_count, first_page_articles())],
    }
}

/// Runs ParamsChanged and answers the resulting initial fetch with `result`.
pub fn loaded_state(
    category_id: &str,
    page_size: u32,
    result: Result<CategoriesPage, catalog_core::LoadError>,
) -> ListingState {
    let state = ListingState::new();
    let (state, effects) = update(
        state,
        Msg::ParamsChanged {
            category_id: category_id.to_string(),
            page_size,
        },
    );
    let (generation, kind) = match effects.as_slice() {
        [Effect::FetchPage {
            generation, kind, ..
        }] => (*generation, *kind),
        other => panic!("expected one fetch effect, got {other:?}"),
    };
    let (state, effects) = update(
        state,
        Msg::FetchCompleted {
            generation,
            kind,
            result,
        },
    );
    assert!(effects.is_empty());
    state
}
