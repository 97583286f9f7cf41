use catalog_core::CategoriesPage;
use serde::Deserialize;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("response body is not a graphql envelope: {0}")]
    InvalidJson(String),
}

/// Decode a raw GraphQL response body into a [`CategoriesPage`].
///
/// Every collection in the wire shape is `#[serde(default)]`, so a missing
/// or partial `data` payload decodes to empty sequences rather than an
/// error. Only a body that is not valid JSON fails.
pub fn decode_categories(body: &[u8]) -> Result<CategoriesPage, DecodeError> {
    let envelope: Envelope =
        serde_json::from_slice(body).map_err(|err| DecodeError::InvalidJson(err.to_string()))?;
    let data = envelope.data.unwrap_or_default();
    Ok(CategoriesPage {
        categories: data.categories.into_iter().map(Into::into).collect(),
    })
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<WireData>,
}

#[derive(Debug, Default, Deserialize)]
struct WireData {
    #[serde(default)]
    categories: Vec<WireCategory>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireCategory {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) article_count: u32,
    #[serde(default)]
    pub(crate) children_categories: WireChildCategories,
    #[serde(default)]
    pub(crate) category_articles: WireCategoryArticles,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireChildCategories {
    #[serde(default)]
    pub(crate) list: Vec<WireCategoryRef>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireCategoryRef {
    #[serde(default)]
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) url_path: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireCategoryArticles {
    #[serde(default)]
    pub(crate) articles: Vec<WireArticle>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireArticle {
    #[serde(default)]
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) variant_name: String,
    #[serde(default)]
    pub(crate) prices: WirePrices,
    #[serde(default)]
    pub(crate) images: Vec<WireImage>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WirePrices {
    #[serde(default)]
    pub(crate) currency: String,
    #[serde(default)]
    pub(crate) regular: WirePriceValue,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WirePriceValue {
    #[serde(default)]
    pub(crate) value: i64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WireImage {
    #[serde(default)]
    pub(crate) path: String,
}
