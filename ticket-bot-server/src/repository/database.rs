use anyhow::anyhow;
use sqlx::{any::AnyPoolOptions, AnyPool};
use std::{path::Path, time::Duration};
use strum::EnumString;

///
/// Supported database engines.
/// Both accept `$N` placeholders, so queries are shared between them.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
pub enum DatabaseBackend {
    #[strum(serialize = "sqlite")]
    Sqlite,

    #[strum(serialize = "postgres", serialize = "postgresql")]
    Postgres,
}

impl DatabaseBackend {
    ///
    /// Recognize backend by the scheme of the connection string
    ///
    pub fn from_connection_string(connection_string: &str) -> anyhow::Result<Self> {
        let (scheme, _) = connection_string
            .split_once(':')
            .ok_or(anyhow!("database connection string has no scheme"))?;

        scheme
            .parse()
            .map_err(|_| anyhow!("unsupported database backend {scheme}"))
    }
}

pub async fn connect(
    connection_string: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> anyhow::Result<AnyPool> {
    let backend = DatabaseBackend::from_connection_string(connection_string)?;
    tracing::info!(?backend, "connecting to database");

    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(connection_string)
        .await?;

    Ok(pool)
}

///
/// Executes SQL script once. Script may contain many statements.
///
pub async fn run_schema_script(pool: &AnyPool, path: &Path) -> anyhow::Result<()> {
    tracing::info!(path = %path.display(), "running schema script");

    let script = tokio::fs::read_to_string(path).await?;
    sqlx::raw_sql(&script).execute(pool).await?;

    tracing::info!("schema script finished");

    Ok(())
}
