use crate::board::EventBoard;
use crate::config::AppConfig;
use crate::feed::SheetClient;
use crate::responses::error_to_response;
use crate::router::{handle, AppContext};
use astra::Server;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod board;
mod config;
mod domain;
mod errors;
mod feed;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    init_tracing();

    // 1️⃣ Read settings from the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Build the feed client and load the board once before serving
    let client = match SheetClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "could not build sheet client");
            std::process::exit(1);
        }
    };
    let app = Arc::new(AppContext::new(EventBoard::new(), Box::new(client)));

    if let Err(e) = app.board.refresh(app.source.as_ref()) {
        warn!(error = %e, "initial load failed, serving an empty board");
    }

    if let Some(interval) = config.refresh_interval {
        spawn_refresher(Arc::clone(&app), interval);
    }

    // 3️⃣ Start the server
    info!(addr = %config.bind_addr, workers = config.max_workers, "starting server");
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => {
            warn!(error = %err, "request failed");
            error_to_response(err)
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down cleanly");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Reloads the board every `interval` on a background thread.
fn spawn_refresher(app: Arc<AppContext>, interval: Duration) {
    info!(every = ?interval, "background refresh enabled");

    std::thread::spawn(move || loop {
        std::thread::sleep(interval);
        if let Err(e) = app.board.refresh(app.source.as_ref()) {
            warn!(error = %e, "scheduled refresh failed");
        }
    });
}
