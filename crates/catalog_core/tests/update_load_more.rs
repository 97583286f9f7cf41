mod common;

use catalog_core::{
    update, CategoriesPage, Effect, FetchKind, ListingState, LoadError, Msg, QueryVariables,
};
use common::{article, first_page, init_logging, living_room, loaded_state};
use pretty_assertions::assert_eq;

fn lamp_page() -> CategoriesPage {
    CategoriesPage {
        categories: vec![living_room(
            3,
            vec![article("Floor Lamp", "Modern Style", 12900, "/images/lamp.jpg")],
        )],
    }
}

#[test]
fn load_more_fetches_at_current_offset() {
    init_logging();
    let state = loaded_state("177577", 50, Ok(first_page(3)));

    let (state, effects) = update(state, Msg::LoadMoreRequested);

    assert!(state.is_loading());
    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            generation: 1,
            kind: FetchKind::More,
            variables: QueryVariables {
                ids: vec!["177577".to_string()],
                first: 50,
                offset: 2,
            },
        }]
    );
}

#[test]
fn load_more_appends_new_articles_in_returned_order() {
    init_logging();
    let state = loaded_state("177577", 50, Ok(first_page(3)));
    let (state, _effects) = update(state, Msg::LoadMoreRequested);

    let (state, _effects) = update(
        state,
        Msg::FetchCompleted {
            generation: 1,
            kind: FetchKind::More,
            result: Ok(lamp_page()),
        },
    );

    let view = state.view();
    assert!(!view.loading);
    let names: Vec<&str> = view.articles.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Comfortable Sofa", "Coffee Table", "Floor Lamp"]);
    // Listing is now complete.
    assert!(!view.has_more);
}

#[test]
fn load_more_skips_articles_already_held() {
    init_logging();
    let state = loaded_state("177577", 50, Ok(first_page(3)));
    let (state, _effects) = update(state, Msg::LoadMoreRequested);

    // The server re-serves the first page.
    let (state, _effects) = update(
        state,
        Msg::FetchCompleted {
            generation: 1,
            kind: FetchKind::More,
            result: Ok(first_page(3)),
        },
    );

    let view = state.view();
    assert_eq!(view.articles.len(), 2);
    assert_eq!(view.articles, first_page(3).categories[0].articles);
}

#[test]
fn load_more_dedups_within_a_single_page() {
    init_logging();
    let state = loaded_state("177577", 50, Ok(first_page(3)));
    let (state, _effects) = update(state, Msg::LoadMoreRequested);

    let page = CategoriesPage {
        categories: vec![living_room(
            3,
            vec![
                article("Floor Lamp", "Modern Style", 12900, "/images/lamp.jpg"),
                article("Floor Lamp", "Modern Style", 12900, "/images/lamp.jpg"),
            ],
        )],
    };
    let (state, _effects) = update(
        state,
        Msg::FetchCompleted {
            generation: 1,
            kind: FetchKind::More,
            result: Ok(page),
        },
    );

    assert_eq!(state.view().articles.len(), 3);
}

#[test]
fn load_more_while_loading_issues_no_fetch() {
    init_logging();
    let state = loaded_state("177577", 50, Ok(first_page(3)));
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    assert_eq!(effects.len(), 1);

    let (state, effects) = update(state, Msg::LoadMoreRequested);

    assert!(effects.is_empty());
    assert!(state.is_loading());
}

#[test]
fn load_more_before_initial_params_is_dropped() {
    init_logging();
    let state = ListingState::new();

    let (state, effects) = update(state, Msg::LoadMoreRequested);

    assert!(effects.is_empty());
    assert!(!state.is_loading());
}

#[test]
fn load_more_failure_preserves_accumulated_articles() {
    init_logging();
    let state = loaded_state("177577", 50, Ok(first_page(3)));
    let (state, _effects) = update(state, Msg::LoadMoreRequested);

    let (state, _effects) = update(
        state,
        Msg::FetchCompleted {
            generation: 1,
            kind: FetchKind::More,
            result: Err(LoadError::new("LoadMore failed")),
        },
    );

    let view = state.view();
    assert!(!view.loading);
    assert_eq!(view.error, Some(LoadError::new("LoadMore failed")));
    assert_eq!(view.articles.len(), 2);
}

#[test]
fn load_more_does_not_clear_a_previous_error() {
    init_logging();
    let state = loaded_state("177577", 50, Ok(first_page(3)));
    let (state, _effects) = update(state, Msg::LoadMoreRequested);
    let (state, _effects) = update(
        state,
        Msg::FetchCompleted {
            generation: 1,
            kind: FetchKind::More,
            result: Err(LoadError::new("LoadMore failed")),
        },
    );

    // A fresh load-more starts with the error still visible; only a
    // parameter change resets it.
    let (state, effects) = update(state, Msg::LoadMoreRequested);
    assert_eq!(effects.len(), 1);
    assert_eq!(state.view().error, Some(LoadError::new("LoadMore failed")));
}

#[test]
fn load_more_ignores_category_metadata_in_the_response() {
    init_logging();
    let state = loaded_state("177577", 50, Ok(first_page(3)));
    let (state, _effects) = update(state, Msg::LoadMoreRequested);

    // Incremental response declares a different total; it must not be taken.
    let mut page = lamp_page();
    page.categories[0].article_count = 99;
    let (state, _effects) = update(
        state,
        Msg::FetchCompleted {
            generation: 1,
            kind: FetchKind::More,
            result: Ok(page),
        },
    );

    assert_eq!(state.view().total_count, Some(3));
}
