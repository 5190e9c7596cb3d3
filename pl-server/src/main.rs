pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;
pub mod sweep;

#[cfg(test)]
mod tests;

use crate::state::AppState;

use pl_db::SqliteTelemetryStore;
use pl_guard::{InMemoryRateLimitStore, RateLimiter, RequestGuard};
use pl_telemetry::email::transport::EmailTransport;
use pl_telemetry::{
    DisabledMailer, Emitter, EventLogger, HttpRelayMailer, NotificationDispatcher,
    PerformanceMonitor, RetentionManager,
};

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = pl_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = pl_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting pl-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/pl-db/migrations")
        .run(&pool)
        .await?;
    info!("Migrations complete");

    let store = Arc::new(SqliteTelemetryStore::new(pool));

    // Email transport (optional; database channel works without it)
    let transport: Arc<dyn EmailTransport> = match &config.email.endpoint {
        Some(endpoint) => {
            info!("Email relay: {}", endpoint);
            Arc::new(HttpRelayMailer::new(
                endpoint.clone(),
                config.email.api_key.clone(),
                config.email.timeout_secs,
            ))
        }
        None => {
            warn!("Email relay not configured - email channel disabled");
            Arc::new(DisabledMailer)
        }
    };

    // Wire the telemetry pipeline
    let dispatcher = Arc::new(NotificationDispatcher::new(
        store.clone(),
        store.clone(),
        transport,
    ));
    let event_logger = Arc::new(EventLogger::new(store.clone(), dispatcher.clone()));
    let emitter = Emitter::spawn(Emitter::DEFAULT_CAPACITY);
    let monitor = PerformanceMonitor::new(
        store.clone(),
        store.clone(),
        event_logger.clone(),
        dispatcher.clone(),
        emitter.clone(),
    );
    let retention = Arc::new(RetentionManager::new(
        store.clone(),
        store.clone(),
        store.clone(),
        event_logger.clone(),
    ));

    // Request guard over a process-local counter store
    let limiter = RateLimiter::new(
        Arc::new(InMemoryRateLimitStore::default()),
        pl_guard::RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        },
    );
    let guard = Arc::new(RequestGuard::new(limiter, event_logger.clone()));

    // Build application state
    let app_state = AppState {
        logger: event_logger,
        dispatcher,
        monitor,
        retention,
        guard,
    };

    // Scheduled retention sweep, independent of the request path
    sweep::spawn_retention_sweep(&app_state, &config.sweep);

    // Build router
    let app = routes::build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
    })
    .await?;

    // Let queued fire-and-forget recordings land before exit
    emitter.flush().await;
    info!("Graceful shutdown complete");

    Ok(())
}
