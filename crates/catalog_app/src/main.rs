//! Terminal product-listing viewer: fetches a category through the loader
//! state machine and renders it page by page.

mod render;
mod runner;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use catalog_core::{update, ListingState, Msg};
use catalog_engine::ExecutorSettings;
use runner::EffectRunner;

const DEFAULT_CATEGORY_ID: &str = "156126";
const DEFAULT_PAGE_SIZE: u32 = 100;

fn main() -> anyhow::Result<()> {
    catalog_logging::initialize_terminal(log::LevelFilter::Info);

    let mut args = std::env::args().skip(1);
    let category_id = args.next().unwrap_or_else(|| DEFAULT_CATEGORY_ID.to_string());
    let page_size: u32 = match args.next() {
        Some(raw) => raw.parse()?,
        None => DEFAULT_PAGE_SIZE,
    };
    let settings = match std::env::var("CATALOG_ENDPOINT") {
        Ok(endpoint) => ExecutorSettings {
            endpoint,
            ..ExecutorSettings::default()
        },
        Err(_) => ExecutorSettings::default(),
    };

    let runner = EffectRunner::new(settings)?;
    let mut state = ListingState::new();

    let (next, effects) = update(
        state,
        Msg::ParamsChanged {
            category_id,
            page_size,
        },
    );
    state = next;
    runner.run(effects);

    loop {
        state = drain_until_idle(state, &runner);
        let view = state.view();
        render::render(&view);

        if view.error.is_some() || !view.has_more {
            break;
        }
        if !prompt_load_more()? {
            break;
        }

        let (next, effects) = update(state, Msg::LoadMoreRequested);
        state = next;
        runner.run(effects);
    }

    Ok(())
}

/// Pumps engine completions into the state machine until no fetch is
/// outstanding.
fn drain_until_idle(mut state: ListingState, runner: &EffectRunner) -> ListingState {
    while state.is_loading() {
        if let Some(msg) = runner.poll() {
            let (next, effects) = update(state, msg);
            state = next;
            runner.run(effects);
        } else {
            thread::sleep(Duration::from_millis(20));
        }
    }
    state
}

fn prompt_load_more() -> io::Result<bool> {
    print!("load more? [y/N] ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y"))
}
