/// Shared application state
use crate::graphql::{build_schema, RosterSchema};
use roster_core::UserRepository;
use roster_storage::{SqliteUserRepository, Store};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub schema: RosterSchema,
}

impl AppState {
    /// Wire the repository and schema around an opened store
    pub fn new(store: Store) -> Self {
        let repository: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(store.clone()));
        let schema = build_schema(repository);

        Self { store, schema }
    }
}
