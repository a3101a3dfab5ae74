mod app;
mod config;
mod error;
mod event;
mod http;
mod logging;
mod state;
mod storage;
mod terminal;
mod ui;

use std::io;

use anyhow::Context;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::http::dispatch::Dispatcher;
use crate::http::executor::{ReqwestTransport, Transport};
use crate::storage::store::RequestStore;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    logging::init(&config)?;
    info!(requests_file = %config.requests_file.display(), "starting hop");

    let store = RequestStore::open(&config.requests_file);
    if store.is_empty() {
        info!("no saved requests yet");
    }
    let transport = ReqwestTransport::new().context("initializing HTTP transport")?;
    let mut app = App::new(store, Dispatcher::new(transport));

    let mut terminal = match terminal::init() {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = terminal::restore();
            return Err(e).context("entering raw mode");
        }
    };

    let result = run_loop(&mut terminal, &mut app);

    let restored = terminal::restore();
    info!("terminal restored");
    result?;
    restored.context("restoring terminal")
}

/// Read one key, apply it, redraw. Blocks on input, dispatch and saves.
fn run_loop<T: Transport>(terminal: &mut terminal::Tui, app: &mut App<T>) -> anyhow::Result<()> {
    let mut input = io::stdin().lock();
    loop {
        terminal.draw(|frame| ui::layout::render(frame, &app.state, app.store.requests()))?;

        let key = terminal::read_key(&mut input).context("reading terminal input")?;
        app.handle_key(key);

        if app.state.should_quit {
            break;
        }
    }
    Ok(())
}
