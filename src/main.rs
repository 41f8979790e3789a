use food_list_rust::config::Config;
use food_list_rust::food::catalog::bootstrap_catalog;
use food_list_rust::food::summary::SummaryClient;
use food_list_rust::food::AppState;
use food_list_rust::router::create_app_router;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "food_list_rust=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    // Initialize application state
    let catalog = bootstrap_catalog(config.catalog_path.as_deref()).await?;
    let summary_client = SummaryClient::new(config.summary_endpoint.clone())?;
    tracing::info!(
        items = catalog.len(),
        endpoint = summary_client.endpoint(),
        "Food catalog ready"
    );
    let state = Arc::new(AppState::with_limits(
        catalog,
        summary_client,
        config.session_limits,
    ));

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = config.socket_addr();
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
