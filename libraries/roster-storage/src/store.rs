/// Pooled SQLite store executing parameterized statements
use crate::error::{Result, StorageError};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqliteQueryResult, SqliteRow};
use sqlx::Sqlite;
use std::time::Duration;

const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    birthday TEXT NOT NULL,
    quantity INTEGER NOT NULL,
    avatar TEXT
)
"#;

/// Connection settings for [`Store::open`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// `SQLite` connection string (e.g., `sqlite://roster.db`)
    pub database_url: String,
    pub max_connections: u32,
    /// How long a connection waits on a locked database
    pub busy_timeout: Duration,
}

impl StoreOptions {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 5,
            busy_timeout: Duration::from_secs(30),
        }
    }
}

/// Positional parameter bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Integer(i64),
    Text(String),
    Null,
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// The single persistent store of the registry
///
/// Owns the connection pool. A `Store` only exists once its pool is connected
/// and the schema is in place; after [`Store::close`] every query fails with
/// [`StorageError::Closed`].
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect and make sure the `users` table exists
    ///
    /// # Errors
    ///
    /// Returns `Connection` if the database cannot be reached and `Schema`
    /// if the table cannot be created.
    pub async fn open(options: &StoreOptions) -> Result<Self> {
        let pool = crate::create_pool(options)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let store = Self { pool };
        store.initialize().await?;

        tracing::info!(database_url = %options.database_url, "Store opened");
        Ok(store)
    }

    /// Create the `users` table if it is missing. Safe to call repeatedly.
    pub async fn initialize(&self) -> Result<()> {
        self.ensure_open()?;
        sqlx::query(CREATE_USERS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::Schema(e.to_string()))?;
        Ok(())
    }

    /// Run a statement and return the affected-row count and last insert id
    pub async fn execute(&self, sql: &str, params: &[SqlValue]) -> Result<SqliteQueryResult> {
        self.ensure_open()?;
        let result = bind_params(sqlx::query(sql), params)
            .execute(&self.pool)
            .await?;
        Ok(result)
    }

    pub async fn fetch_all(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<SqliteRow>> {
        self.ensure_open()?;
        let rows = bind_params(sqlx::query(sql), params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn fetch_optional(&self, sql: &str, params: &[SqlValue]) -> Result<Option<SqliteRow>> {
        self.ensure_open()?;
        let row = bind_params(sqlx::query(sql), params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Round-trip a trivial query
    pub async fn ping(&self) -> Result<()> {
        self.ensure_open()?;
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Store closed");
    }

    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.pool.is_closed() {
            return Err(StorageError::Closed);
        }
        Ok(())
    }
}

fn bind_params<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &'q [SqlValue],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            SqlValue::Integer(value) => query.bind(*value),
            SqlValue::Text(value) => query.bind(value.as_str()),
            SqlValue::Null => query.bind(Option::<String>::None),
        };
    }
    query
}
