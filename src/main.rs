//! Product catalog console
//!
//! A terminal client for the product catalog REST API: list, search, create,
//! update and delete products.

mod api;
mod catalog;
mod config;
mod console;
mod errors;
mod form;
mod models;
mod render;
mod search;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::ProductClient;
use catalog::Catalog;
use config::Config;
use console::Terminal;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging; stdout belongs to the console
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            config
                .log_json
                .then(|| fmt::layer().json().with_writer(std::io::stderr)),
        )
        .with(
            (!config.log_json).then(|| fmt::layer().with_writer(std::io::stderr)),
        )
        .try_init()?;

    tracing::info!("Starting product catalog console");
    tracing::info!("Product endpoint: {}", config.api_url);

    let catalog = Catalog::new(ProductClient::new(config.api_url.clone()));

    // Initial unfiltered load; a failure is logged and the table starts empty
    let _ = catalog.refresh("").await;

    let terminal = Terminal::stdio();
    console::run(&catalog, &terminal).await;

    Ok(())
}
