use axum::Router;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use time::Duration;
use tokio::net::TcpListener;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Days of inactivity before a login session expires
pub const SESSION_INACTIVITY_DAYS: i64 = 30;

/// Initialize the tracing subscriber, reading the filter from `RUST_LOG` with `info` as default
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A subscriber may already be set, e.g. when called twice in tests
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Connect to the database and apply pending migrations
///
/// Tables that already exist are reused, so calling this against an initialized database
/// leaves its schema and rows untouched.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    prepare_database(&db).await?;

    Ok(db)
}

/// Apply migrations that have not yet run against `db`
pub async fn prepare_database(db: &DatabaseConnection) -> Result<(), Error> {
    let pending = Migrator::get_pending_migrations(db).await?;

    if pending.is_empty() {
        tracing::info!("Database schema is up to date");
    } else {
        tracing::info!(pending = pending.len(), "Applying database migrations");
    }

    Migrator::up(db, None).await?;

    Ok(())
}

/// Configure cookie sessions backed by the in-process memory store
pub fn build_session_layer() -> SessionManagerLayer<MemoryStore> {
    // Plain HTTP cookies in debug builds
    let secure_cookies = !cfg!(debug_assertions);

    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)))
}

/// Build the application router with state and session layer applied
pub fn build_app(state: AppState) -> Router {
    router::routes()
        .with_state(state)
        .layer(build_session_layer())
}

/// Bind `0.0.0.0:<port>` and serve `app` until the process exits
pub async fn serve(config: &Config, app: Router) -> Result<(), Error> {
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Connect, migrate and serve using `config`
pub async fn run(config: Config) -> Result<(), Error> {
    let db = connect_to_database(&config).await?;
    let state = AppState::new(db, config.users.clone());

    serve(&config, build_app(state)).await
}
