pub mod queries;
pub mod seed;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Error;

pub use queries::categories::Category;
pub use queries::questions::{NewQuestion, Question};

pub async fn establish_connection(path: &str) -> Result<SqlitePool, Error> {
    let options =
        SqliteConnectOptions::from_str(format!("sqlite:{}", path).as_str())?.create_if_missing(true);
    SqlitePool::connect_with(options).await
}

/// Private in-memory database. Limited to one connection because every new
/// `:memory:` connection opens a fresh, empty database.
pub async fn in_memory_pool() -> Result<SqlitePool, Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;

    /// In-memory pool with the schema applied.
    pub async fn test_pool() -> SqlitePool {
        let pool = super::in_memory_pool().await.unwrap();
        super::run_migrations(&pool).await.unwrap();
        pool
    }

    /// Same as [`test_pool`], loaded with the bundled seed data.
    pub async fn seeded_pool() -> SqlitePool {
        let pool = test_pool().await;
        super::seed::load_bundled(&pool).await.unwrap();
        pool
    }
}
