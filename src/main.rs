use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use review_desk::adapters::http::{bot_router, BotAppState};
use review_desk::adapters::presentation::command_definitions;
use review_desk::adapters::{
    DiscordChannelNotifier, InMemoryReviewStore, InMemorySettingsStore, InteractionRouter,
    PostgresReviewStore, PostgresSettingsStore,
};
use review_desk::application::{ReviewCommitter, SessionRegistry};
use review_desk::config::{AppConfig, ConfigError, LogFormat, StorageBackend};
use review_desk::ports::{NotifyError, ReviewStore, SettingsStore};

const REAPER_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Notifier setup failed: {0}")]
    Notifier(#[from] NotifyError),

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "Startup failed");
        eprintln!("review-desk: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    // --- Configuration ---
    let config = AppConfig::load()?;
    config.validate().map_err(ConfigError::from)?;

    // --- Tracing ---
    init_tracing(&config.server.log_level, config.server.log_format);
    tracing::info!(
        environment = ?config.server.environment,
        backend = ?config.storage.backend,
        "Loaded configuration"
    );

    // --- Stores ---
    let (settings_store, review_store): (Arc<dyn SettingsStore>, Arc<dyn ReviewStore>) =
        match config.storage.backend {
            StorageBackend::Postgres => {
                let pool = config.database.pool_options().connect(&config.database.url).await?;
                tracing::info!("Database connection pool created");

                if config.database.run_migrations {
                    sqlx::migrate!("./migrations").run(&pool).await?;
                    tracing::info!("Database migrations applied");
                }

                (
                    Arc::new(PostgresSettingsStore::new(pool.clone())),
                    Arc::new(PostgresReviewStore::new(pool)),
                )
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; reviews are lost on restart");
                (
                    Arc::new(InMemorySettingsStore::new()),
                    Arc::new(InMemoryReviewStore::new()),
                )
            }
        };

    // --- Notifier ---
    let notifier = Arc::new(DiscordChannelNotifier::new(config.discord.client_config())?);

    // --- Review flow ---
    let registry = SessionRegistry::new();
    let committer = ReviewCommitter::new(review_store, notifier)
        .with_announce_timeout(config.discord.timeout());
    let router = InteractionRouter::new(
        registry.clone(),
        settings_store,
        committer,
        config.review.comment_bounds(),
    );

    let reaper = config
        .review
        .session_idle_timeout()
        .map(|max_idle| tokio::spawn(reap_idle_sessions(registry.clone(), max_idle)));

    match serde_json::to_string(&command_definitions()) {
        Ok(json) => tracing::debug!(commands = %json, "Slash command definitions"),
        Err(err) => tracing::warn!(error = %err, "Failed to encode command definitions"),
    }

    // --- Router ---
    let state = BotAppState::new(Arc::new(router), registry, config.server.request_timeout());
    let app = bot_router(state);

    // --- Start server ---
    let addr = config.server.socket_addr().map_err(ConfigError::from)?;
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = reaper {
        handle.abort();
    }
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

fn init_tracing(default_directive: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

async fn reap_idle_sessions(registry: SessionRegistry, max_idle: chrono::Duration) {
    let mut interval = tokio::time::interval(REAPER_INTERVAL);
    loop {
        interval.tick().await;
        registry.evict_idle(max_idle).await;
    }
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
