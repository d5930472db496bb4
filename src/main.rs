//! Contactly server — contact management backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use contactly_api::state::AppState;
use contactly_auth::password::PasswordHasher;
use contactly_auth::token::ResetTokenIssuer;
use contactly_core::config::AppConfig;
use contactly_core::error::AppError;
use contactly_core::traits::{Clock, SystemClock};
use contactly_database::DatabasePool;
use contactly_database::repositories::{ContactRepository, SessionRepository, UserRepository};
use contactly_mailer::SmtpMailer;
use contactly_service::{AuthService, ContactService};

#[tokio::main]
async fn main() {
    let env = std::env::var("CONTACTLY_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Contactly v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    contactly_database::migration::run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    let user_repo = Arc::new(UserRepository::new(db.pool().clone()));
    let session_repo = Arc::new(SessionRepository::new(db.pool().clone()));
    let contact_repo = Arc::new(ContactRepository::new(db.pool().clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mailer = Arc::new(SmtpMailer::new(&config.smtp)?);

    let auth_service = Arc::new(AuthService::new(
        user_repo,
        session_repo,
        Arc::new(PasswordHasher::new()),
        Arc::new(ResetTokenIssuer::new(&config.auth, clock.clone())),
        mailer,
        clock,
        config.auth.clone(),
    ));
    let contact_service = Arc::new(ContactService::new(contact_repo));

    let bind_address = config.server.bind_address();
    let state = AppState {
        config: Arc::new(config),
        auth_service,
        contact_service,
    };

    let app = contactly_api::build_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {bind_address}: {e}")))?;
    tracing::info!("Listening on {bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server failed: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives a termination signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
