//! Catalog core: pure state machine for the paginated category listing.
mod effect;
mod model;
mod msg;
mod price;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use model::{
    Article, CategoriesPage, Category, CategoryRef, ImageRef, LoadError, Price, QueryVariables,
};
pub use msg::Msg;
pub use price::format_price;
pub use state::{FetchKind, Generation, ListingState};
pub use update::update;
pub use view_model::ListingViewModel;
