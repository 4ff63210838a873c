//! Vermeil JSON API Server

use std::{process, sync::Arc};

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vermeil::{catalog::fixtures, queries::InMemoryCatalogService};

use crate::{
    config::{ServerConfig, logging::LogFormat},
    state::State,
};

mod categories;
mod config;
mod extensions;
mod healthcheck;
mod products;
mod router;
mod search;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Vermeil JSON API Server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_ignored| EnvFilter::new(&config.logging.log_level));

    match config.logging.log_format {
        LogFormat::Compact => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }

    // Build the immutable catalog the whole API serves from
    let store = match fixtures::seeded() {
        Ok(store) => store,
        Err(seed_error) => {
            error!("failed to load the catalog dataset: {seed_error}");

            process::exit(1);
        }
    };

    info!(
        categories = store.categories().len(),
        products = store.products().len(),
        "catalog loaded"
    );

    let state = State::shared(Arc::new(InMemoryCatalogService::new(store)));

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(router::app_router());

    let doc = OpenApi::new("Vermeil API", "0.1.0").merge_router(&router);

    let router = router
        .push(doc.into_router("/api-doc/openapi.json"))
        .push(SwaggerUi::new("/api-doc/openapi.json").into_router("docs"));

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(signal_error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {signal_error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
