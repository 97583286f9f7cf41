use crate::{Article, Category, LoadError};

/// Read-only snapshot handed to presentation. Mirrors the loader contract:
/// branch on `error`, render `articles`, offer load-more while `has_more`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingViewModel {
    pub categories: Vec<Category>,
    pub articles: Vec<Article>,
    pub loading: bool,
    pub error: Option<LoadError>,
    pub has_more: bool,
    pub total_count: Option<u32>,
}
