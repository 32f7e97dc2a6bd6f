use crate::{users, Store};
use async_trait::async_trait;
use roster_core::{
    error::Result,
    storage::UserRepository,
    types::{NewUser, UpdateOutcome, User, UserId, UserPatch},
};

/// `SQLite`-backed user repository
#[derive(Debug, Clone)]
pub struct SqliteUserRepository {
    store: Store,
}

impl SqliteUserRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.store).await?)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(users::get_by_id(&self.store, id).await?)
    }

    async fn create_user(&self, user: NewUser) -> Result<User> {
        Ok(users::create(&self.store, user).await?)
    }

    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<UpdateOutcome> {
        Ok(users::update(&self.store, id, &patch).await?)
    }

    async fn delete_user(&self, id: UserId) -> Result<bool> {
        Ok(users::delete(&self.store, id).await?)
    }

    async fn update_user_quantity(&self, id: UserId, quantity: i32) -> Result<Option<User>> {
        Ok(users::update_quantity(&self.store, id, quantity).await?)
    }

    async fn update_user_birthdate(&self, id: UserId, birthdate: String) -> Result<Option<User>> {
        Ok(users::update_birthdate(&self.store, id, &birthdate).await?)
    }
}
