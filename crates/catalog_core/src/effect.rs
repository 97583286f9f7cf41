use crate::{FetchKind, Generation, QueryVariables};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one page fetch. `generation` is echoed back in the completion
    /// message so stale results can be discarded.
    FetchPage {
        generation: Generation,
        kind: FetchKind,
        variables: QueryVariables,
    },
}
