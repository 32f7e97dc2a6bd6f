//! Repository trait for the user registry

use crate::error::Result;
use crate::types::{NewUser, UpdateOutcome, User, UserId, UserPatch};
use async_trait::async_trait;

/// Operations on the `users` table
///
/// This trait is the contract between the API layer and whatever persists
/// the records. Implementations execute each call independently; there is no
/// transaction spanning a write and the read that follows it.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get all users, in store-default order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Insert a user and return it as stored, with its assigned ID
    async fn create_user(&self, user: NewUser) -> Result<User>;

    /// Write the present fields of `patch` and re-read the row
    ///
    /// An empty patch returns `UpdateOutcome::NothingToUpdate` without
    /// touching the store.
    async fn update_user(&self, id: UserId, patch: UserPatch) -> Result<UpdateOutcome>;

    /// Delete user, returning whether a row was removed
    async fn delete_user(&self, id: UserId) -> Result<bool>;

    /// Set only the quantity
    async fn update_user_quantity(&self, id: UserId, quantity: i32) -> Result<Option<User>> {
        let outcome = self
            .update_user(id, UserPatch::default().with_quantity(quantity))
            .await?;
        Ok(outcome.into_user())
    }

    /// Set only the birthdate
    async fn update_user_birthdate(&self, id: UserId, birthdate: String) -> Result<Option<User>> {
        let outcome = self
            .update_user(id, UserPatch::default().with_birthdate(birthdate))
            .await?;
        Ok(outcome.into_user())
    }
}
