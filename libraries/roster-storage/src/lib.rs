//! Roster Storage
//!
//! `SQLite` persistence for the Roster user registry.
//!
//! # Architecture
//!
//! - **Store**: owns the connection pool and executes parameterized SQL
//! - **Vertical Slicing**: the `users` module owns every query on its table
//! - **Repository**: `SqliteUserRepository` implements `roster_core::UserRepository`
//!
//! # Example
//!
//! ```rust,no_run
//! use roster_core::{NewUser, UserRepository};
//! use roster_storage::{SqliteUserRepository, Store, StoreOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = Store::open(&StoreOptions::new("sqlite://roster.db")).await?;
//! let repo = SqliteUserRepository::new(store);
//!
//! let ada = repo
//!     .create_user(NewUser::new("Ada", "1985-12-10T00:00:00.000Z", 3))
//!     .await?;
//! assert!(repo.get_user(ada.id).await?.is_some());
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
mod store;

// Vertical slices
pub mod users;

pub use context::SqliteUserRepository;
pub use error::StorageError;
pub use store::{SqlValue, Store, StoreOptions};

use sqlx::sqlite::SqlitePool;

/// Create a new `SQLite` pool
///
/// # Errors
///
/// Returns an error if the URL is malformed, the database directory cannot
/// be created, or the first connection fails
pub async fn create_pool(options: &StoreOptions) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!(database_url = %options.database_url, "Creating pool");

    let connect_options = SqliteConnectOptions::from_str(&options.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(options.busy_timeout);

    // create_if_missing makes the file, not its directory
    if !options.database_url.contains(":memory:") {
        if let Some(parent) = connect_options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    SqlitePoolOptions::new()
        .max_connections(options.max_connections)
        .connect_with(connect_options)
        .await
}
