//! Catalog engine: GraphQL transport and effect execution.
mod convert;
mod decode;
mod engine;
mod executor;
mod query;

pub use decode::{decode_categories, DecodeError};
pub use engine::{EngineEvent, EngineHandle};
pub use executor::{ExecutorSettings, QueryExecutor, ReqwestExecutor, TransportError};
pub use query::GET_CATEGORIES;
