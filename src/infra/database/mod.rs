use ::sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use migration::MigratorTrait;
use tracing::Span;

pub mod sea_orm;

/// Opens the pool and brings the schema up to date
pub async fn get_connection(
    url: &str,
    span: &Span,
) -> Result<DatabaseConnection, DbErr> {
    tracing::info!(parent: span, "Initializing database connection");

    let opt = ConnectOptions::new(url)
        .sqlx_logging(false)
        .min_connections(1)
        .to_owned();

    let conn = Database::connect(opt).await.inspect_err(|err| {
        tracing::error!(parent: span, "Error connecting to DB: {err}");
    })?;

    tracing::info!(parent: span, "Running migrations");
    migration::Migrator::up(&conn, None)
        .await
        .inspect_err(|err| {
            tracing::error!(parent: span, "Error during migration: {err}");
        })?;

    tracing::info!(parent: span, "Database initialized successfully");

    Ok(conn)
}
