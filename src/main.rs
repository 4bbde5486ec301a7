use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mercabot_catalog::CatalogConfig;

/// Main entry point for the mercabot chatbot service
///
/// # Environment Variables
/// - `MERCABOT_ADDR`: HTTP listen address (default: "0.0.0.0:5001")
/// - `CATALOG_URL`: products endpoint of the remote catalog service
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mercabot=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("MERCABOT_ADDR").unwrap_or_else(|_| "0.0.0.0:5001".into());
    let catalog_config = CatalogConfig::from_env_value(std::env::var("CATALOG_URL").ok());

    tracing::info!("++ Starting Mercabot on {}", addr);
    tracing::info!("++ Catalog endpoint: {}", catalog_config.products_url());

    let app = mercabot_run::build_router(catalog_config);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
