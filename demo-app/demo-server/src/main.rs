use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer};
use tracing::{error, info};

use demo_api::{build_router, AppState};
use demo_core::repositories::SessionCache;
use demo_core::services::SessionConfig;
use demo_core::{Clock, SystemClock};
use demo_infrastructure::{MemoryCache, RedisCache, StaticUserDirectory};
use demo_shared::config::{AppConfig, CacheBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    demo_shared::telemetry::init_telemetry();

    info!("Demo API server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // Backing cache
    let cache: Arc<dyn SessionCache> = match config.cache.backend {
        CacheBackend::Memory => {
            let memory = Arc::new(MemoryCache::new(clock.clone()));
            memory
                .clone()
                .spawn_sweeper(Duration::from_secs(config.cache.sweep_interval_secs.max(1)));
            memory
        }
        CacheBackend::Redis => {
            let url = config.cache.redis_url.as_deref().unwrap_or_default();
            info!("Using Redis session cache");
            Arc::new(RedisCache::new(url, config.cache.max_connections)?)
        }
    };

    // User directories
    let users = Arc::new(StaticUserDirectory::from_users(&config.users)?);
    let api_clients = Arc::new(StaticUserDirectory::from_api_clients(&config.api_clients)?);

    let state = AppState::new(
        users,
        api_clients,
        cache,
        clock,
        SessionConfig {
            timeout: Duration::from_secs(config.session.timeout_secs),
            key_prefix: config.session.key_prefix.clone(),
        },
    );

    let app = build_router(state)
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(CorsLayer::permissive());

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
