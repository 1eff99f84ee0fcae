use catalog_service::config::ServiceConfig;
use catalog_service::services::seed::load_seed_file;
use catalog_service::{build_app, AppState, Catalog, ServiceError};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

async fn run() -> Result<(), ServiceError> {
    let config = ServiceConfig::from_env()?;

    let catalog = match &config.seed_path {
        Some(path) => {
            info!("Loading catalog seed from {}", path.display());
            Catalog::new(load_seed_file(path)?)?
        }
        None => {
            info!("Using built-in sample catalog");
            Catalog::with_sample_data()?
        }
    };
    info!("Catalog ready with {} books", catalog.len());

    let app = build_app(AppState::new(catalog));

    let addr = config.bind_addr();
    info!("Catalog service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("catalog_service=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("Catalog service failed: {}", e);
        std::process::exit(1);
    }
}
