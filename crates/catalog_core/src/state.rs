use std::collections::HashSet;

use crate::view_model::ListingViewModel;
use crate::{Article, Category, LoadError};

/// Monotonic lifecycle counter. Every parameter change bumps it; a fetch
/// completion is applied only if the counter still matches the value it was
/// issued under.
pub type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Offset-0 fetch for a fresh lifecycle; replaces all listing state.
    Initial,
    /// Incremental page fetch; appends after dedup.
    More,
}

/// All fetch/pagination/error state for one category listing.
///
/// Mutated only through [`crate::update`]; presentation reads [`Self::view`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingState {
    category_id: String,
    page_size: u32,
    generation: Generation,
    categories: Vec<Category>,
    articles: Vec<Article>,
    loading: bool,
    error: Option<LoadError>,
    total_count: Option<u32>,
}

impl ListingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True until the declared total is known, then while fewer articles are
    /// held than the total declares.
    pub fn has_more(&self) -> bool {
        match self.total_count {
            None => true,
            Some(total) => (self.articles.len() as u32) < total,
        }
    }

    pub fn view(&self) -> ListingViewModel {
        ListingViewModel {
            categories: self.categories.clone(),
            articles: self.articles.clone(),
            loading: self.loading,
            error: self.error.clone(),
            has_more: self.has_more(),
            total_count: self.total_count,
        }
    }

    pub(crate) fn params_match(&self, category_id: &str, page_size: u32) -> bool {
        self.category_id == category_id && self.page_size == page_size
    }

    pub(crate) fn category_id(&self) -> &str {
        &self.category_id
    }

    pub(crate) fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Invalidate everything and start the next lifecycle. Nothing carries
    /// over from the previous parameters.
    pub(crate) fn begin_lifecycle(&mut self, category_id: String, page_size: u32) -> Generation {
        self.category_id = category_id;
        self.page_size = page_size;
        self.generation += 1;
        self.categories.clear();
        self.articles.clear();
        self.error = None;
        self.total_count = None;
        self.loading = true;
        self.generation
    }

    pub(crate) fn begin_load_more(&mut self) {
        self.loading = true;
    }

    pub(crate) fn finish_load(&mut self) {
        self.loading = false;
    }

    pub(crate) fn set_error(&mut self, error: LoadError) {
        self.error = Some(error);
    }

    /// First page is authoritative: categories replaced wholesale, articles
    /// taken as-is, total taken from the category's declared count.
    pub(crate) fn apply_initial_page(&mut self, categories: Vec<Category>) {
        if let Some(first) = categories.first() {
            self.articles = first.articles.clone();
            self.total_count = Some(first.article_count);
        }
        self.categories = categories;
    }

    /// Append only articles whose identity key is not already held,
    /// preserving returned order. Category metadata is left untouched.
    pub(crate) fn append_articles(&mut self, incoming: Vec<Article>) {
        let mut seen: HashSet<(String, String)> = self
            .articles
            .iter()
            .map(|article| {
                let (name, variant) = article.identity_key();
                (name.to_owned(), variant.to_owned())
            })
            .collect();
        for article in incoming {
            let (name, variant) = article.identity_key();
            if seen.insert((name.to_owned(), variant.to_owned())) {
                self.articles.push(article);
            }
        }
    }
}
