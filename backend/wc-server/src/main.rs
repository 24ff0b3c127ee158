use wc_server::{
    ApiSettings, AppState, ShutdownCoordinator, build_router, ensure_demo_accounts, logger,
    payment::configured_provider,
};

use wc_auth::RateLimitConfig;
use wc_config::Config;

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A .env file is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, config.log_path()?, config.logging.colored)?;

    info!("Starting wc-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = wc_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database connection established");

    info!("Running database migrations...");
    wc_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    if config.auth.demo_accounts {
        ensure_demo_accounts(&pool).await?;
    }

    // Card payments are optional
    let request_timeout = Duration::from_secs(config.server.request_timeout_secs);
    let payment_provider = configured_provider(&config.payment, request_timeout)?;
    match payment_provider {
        Some(ref provider) => info!("Card payments enabled via {}", provider.name()),
        None => warn!("No card payment provider configured; only UPI contributions accepted"),
    }

    // Build application state
    let mut app_state = AppState::new(pool.clone(), ApiSettings::from_config(&config))
        .with_login_limit(RateLimitConfig {
            max_attempts: config.auth.login_max_attempts,
            window_secs: config.auth.login_window_secs,
        });
    if let Some(provider) = payment_provider {
        app_state = app_state.with_payment_provider(provider);
    }

    let login_limiter = Arc::clone(&app_state.login_limiter);
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Spawn signal handler for graceful shutdown
    let shutdown = ShutdownCoordinator::new();
    let shutdown_for_signal = shutdown.clone();
    let guard = shutdown.subscribe_guard();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    // Forget usernames whose login budget has refilled
    let mut prune_shutdown = shutdown.subscribe();
    let prune_every = Duration::from_secs(config.auth.login_window_secs);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(prune_every);
        loop {
            tokio::select! {
                _ = ticker.tick() => login_limiter.prune(),
                _ = prune_shutdown.recv() => break,
            }
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            guard.wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    pool.close().await;
    info!("Database pool closed");

    Ok(())
}
