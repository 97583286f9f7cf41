use std::fmt;

/// A catalog node: declared article total, navigational children, and the
/// articles fetched for it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub article_count: u32,
    pub children: Vec<CategoryRef>,
    pub articles: Vec<Article>,
}

/// Navigational stub for a child category; carries no articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
    pub url_path: String,
}

/// A purchasable catalog item. The source system exposes no server id;
/// `(name, variant_name)` is the identity used for deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub name: String,
    pub variant_name: String,
    pub price: Price,
    pub images: Vec<ImageRef>,
}

impl Article {
    pub fn identity_key(&self) -> (&str, &str) {
        (&self.name, &self.variant_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price {
    pub currency: String,
    /// Regular price in minor units (cents for EUR).
    pub regular_minor_units: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub path: String,
}

/// One decoded query response. `categories` is always present; a partial or
/// empty payload decodes to an empty list rather than an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoriesPage {
    pub categories: Vec<Category>,
}

/// Variables for one page fetch: `offset` is 0 for the initial load and the
/// number of articles already held for an incremental load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryVariables {
    pub ids: Vec<String>,
    pub first: u32,
    pub offset: u32,
}

/// A fetch failure as seen by the state machine. The transport layer owns
/// the structured error; the loader only surfaces its message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
