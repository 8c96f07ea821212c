use clap::Parser;
use mergington_core::ActivityDirectory;
use mergington_server::{app, AppState, ServerConfig, ServerResult};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ServerResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("mergington_server=debug,mergington_core=debug,tower_http=debug")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = ServerConfig::parse();
    if !config.static_dir.is_dir() {
        tracing::warn!(static_dir = %config.static_dir.display(), "Static directory not found");
    }

    let addr = config.bind_address.clone();
    let state = AppState::new(ActivityDirectory::seeded(), config);
    let router = app(state);

    tracing::info!("Starting activities server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%e, addr = %addr, "Failed to bind");
            return Err(e.into());
        }
    };
    if let Err(e) = axum::serve(listener, router).await {
        tracing::error!(%e, addr = %addr);
        return Err(e.into());
    }

    Ok(())
}
