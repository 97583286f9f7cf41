use crate::{CategoriesPage, FetchKind, Generation, LoadError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Loader created or its `(category_id, page_size)` pair changed.
    /// Resets all accumulated state and starts a fresh lifecycle.
    ParamsChanged {
        category_id: String,
        page_size: u32,
    },
    /// User asked for the next page. Dropped while a fetch is in flight.
    LoadMoreRequested,
    /// Engine completion for a page fetch issued under `generation`.
    FetchCompleted {
        generation: Generation,
        kind: FetchKind,
        result: Result<CategoriesPage, LoadError>,
    },
}
