//! Wire shape to core model conversions.

use catalog_core::{Article, Category, CategoryRef, ImageRef, Price};

use crate::decode::{WireArticle, WireCategory, WireCategoryRef, WireImage};

impl From<WireCategory> for Category {
    fn from(wire: WireCategory) -> Self {
        Category {
            name: wire.name,
            article_count: wire.article_count,
            children: wire
                .children_categories
                .list
                .into_iter()
                .map(Into::into)
                .collect(),
            articles: wire
                .category_articles
                .articles
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}

impl From<WireCategoryRef> for CategoryRef {
    fn from(wire: WireCategoryRef) -> Self {
        CategoryRef {
            id: wire.id,
            name: wire.name,
            url_path: wire.url_path,
        }
    }
}

impl From<WireArticle> for Article {
    fn from(wire: WireArticle) -> Self {
        Article {
            name: wire.name,
            variant_name: wire.variant_name,
            price: Price {
                currency: wire.prices.currency,
                regular_minor_units: wire.prices.regular.value,
            },
            images: wire.images.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<WireImage> for ImageRef {
    fn from(wire: WireImage) -> Self {
        ImageRef { path: wire.path }
    }
}
