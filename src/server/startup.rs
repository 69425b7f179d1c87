use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, SessionManagerLayer, SessionStore};
use tower_sessions_redis_store::RedisStore;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::Error, service::user::UserService};

/// Install the global tracing subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Create the admin master account on first start
pub async fn ensure_admin_master(db: &DatabaseConnection, config: &Config) -> Result<(), Error> {
    let created = UserService::new(db)
        .ensure_admin_master(&config.admin_master_password)
        .await?;

    if !created {
        tracing::debug!("Admin master account already exists");
    }

    Ok(())
}

/// Connect to Valkey/Redis and configure session management
pub async fn redis_session_layer(
    valkey_url: &str,
) -> Result<SessionManagerLayer<RedisStore<tower_sessions_redis_store::fred::prelude::Pool>>, Error>
{
    use tower_sessions_redis_store::fred::prelude::*;

    let config = Config::from_url(valkey_url)?;
    let pool = Pool::new(config, None, None, None, 6)?;

    pool.connect();
    pool.wait_for_connect().await?;

    Ok(configure_sessions(RedisStore::new(pool)))
}

/// Session management kept in process memory, for development without Valkey/Redis
pub fn memory_session_layer() -> SessionManagerLayer<MemoryStore> {
    configure_sessions(MemoryStore::default())
}

fn configure_sessions<S: SessionStore + Clone>(store: S) -> SessionManagerLayer<S> {
    // Secure cookies outside of debug builds
    let secure_cookies = !cfg!(debug_assertions);

    SessionManagerLayer::new(store)
        .with_secure(secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)))
}
