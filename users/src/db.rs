//! Connection pool bootstrap and schema migrations.

use log::info;
use secrecy::ExposeSecret;
use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;

use crate::config::DatabaseSettings;

/// Opens a pool and verifies connectivity with one eager connection.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    let ssl_mode: PgSslMode = settings.ssl_mode.parse()?;
    let options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.username)
        .password(settings.password.expose_secret())
        .database(&settings.name)
        .ssl_mode(ssl_mode);

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.exec_timeout())
        .connect_with(options)
        .await?;

    info!(
        "event=db_connect status=ok host={} port={} database={}",
        settings.host, settings.port, settings.name
    );
    Ok(pool)
}

/// Applies pending migrations from `migrations/`.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("event=db_migrate status=ok");
    Ok(())
}
