use ats_bridge::{
    config::{get_config, init_config},
    database::JsonFileStore,
    middleware::auth::StaticToken,
    routes, AppState,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    init_config()?;
    let config = get_config();

    let store = JsonFileStore::open(config.data_dir.clone())?;
    info!("Serving mock ATS data from: {}", store.dir().display());
    let app_state = AppState::new(Arc::new(store));

    let app = routes::mock_ats_router(app_state, StaticToken::new(config.api_token.clone()));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Mock ATS listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
