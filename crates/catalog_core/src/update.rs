use crate::{Effect, FetchKind, ListingState, Msg, QueryVariables};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ListingState, msg: Msg) -> (ListingState, Vec<Effect>) {
    let effects = match msg {
        Msg::ParamsChanged {
            category_id,
            page_size,
        } => {
            // Re-sending the current parameters does not restart the
            // lifecycle once one has begun.
            if state.generation() > 0 && state.params_match(&category_id, page_size) {
                return (state, Vec::new());
            }
            let generation = state.begin_lifecycle(category_id, page_size);
            vec![Effect::FetchPage {
                generation,
                kind: FetchKind::Initial,
                variables: QueryVariables {
                    ids: vec![state.category_id().to_string()],
                    first: state.page_size(),
                    offset: 0,
                },
            }]
        }
        Msg::LoadMoreRequested => {
            // Single-flight guard: a request while loading is dropped, not
            // queued. Before the first ParamsChanged there is nothing to page.
            if state.is_loading() || state.generation() == 0 {
                return (state, Vec::new());
            }
            state.begin_load_more();
            vec![Effect::FetchPage {
                generation: state.generation(),
                kind: FetchKind::More,
                variables: QueryVariables {
                    ids: vec![state.category_id().to_string()],
                    first: state.page_size(),
                    offset: state.article_count() as u32,
                },
            }]
        }
        Msg::FetchCompleted {
            generation,
            kind,
            result,
        } => {
            // Stale completion: issued before the latest parameter change.
            // Discarded wholesale, including the loading flag.
            if generation != state.generation() {
                return (state, Vec::new());
            }
            match result {
                Ok(page) => match kind {
                    FetchKind::Initial => state.apply_initial_page(page.categories),
                    FetchKind::More => {
                        if let Some(first) = page.categories.into_iter().next() {
                            state.append_articles(first.articles);
                        }
                    }
                },
                Err(error) => state.set_error(error),
            }
            state.finish_load();
            Vec::new()
        }
    };

    (state, effects)
}
