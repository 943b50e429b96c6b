use core_config::FromEnv;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for readable error reports
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    let client = database::mongodb::connect_from_config_with_retry(&config.mongo, None)
        .await
        .map_err(|e| eyre::eyre!("MongoDB connection failed: {}", e))?;
    let db = client.database(config.mongo.database());

    let repository = domain_products::MongoProductRepository::new(&db);
    let service = domain_products::ProductService::new(repository);

    let api_routes = domain_products::handlers::router(service);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes);

    info!("Starting catalog API in {:?} mode", config.environment);

    axum_helpers::create_app(router, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
