use crate::catalog::Catalog;
use crate::config::Config;
use crate::router::respond;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod catalog;
mod config;
mod display;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;


fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() {
    init_tracing();

    // 1️⃣ Read settings from the environment
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let addr = match config.addr() {
        Ok(addr) => addr,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the catalog, falling back to the built-in sample
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::load(path),
        None => {
            info!("RENTAL_CATALOG not set, serving the sample catalog");
            Catalog::sample()
        }
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Catalog could not be loaded: {e}");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| respond(req, &catalog));

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
