use sqlx::SqlitePool;
use tracing::{info, Level};
use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt,
};

pub mod api_error;
pub mod config;
pub mod timestamp;

pub use api_error::ApiError;

pub type DB = sqlx::Sqlite;

pub async fn connect_to_db() -> anyhow::Result<SqlitePool> {
    let database_url = config::get_config().get_string("database_url")?;
    let max_connections: u32 = config::get_config()
        .get_int("max_connections")?
        .try_into()?;

    let sqlx_pool = sqlx::pool::PoolOptions::<DB>::new()
        .max_connections(max_connections)
        .connect(&database_url)
        .await?;

    info!(
        "Connected to {} (max {} connections)",
        database_url, max_connections
    );

    Ok(sqlx_pool)
}

pub fn setup_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::new()
                .with_writer(std::io::stdout.with_max_level(Level::INFO))
                .compact(),
        )
        .init();
}
