//! GraphQL contract over the user repository
//!
//! Resolvers decode wire arguments, call the repository and reshape the
//! result. Repository failures are logged here and replaced with a generic
//! per-operation message, so store details never reach the client.

mod mutation;
mod query;
pub mod wire;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use wire::{CreateUserInput, UpdateUserInput, UserNode};

use async_graphql::{Context, EmptySubscription, Schema};
use roster_core::{RosterError, UserId, UserRepository};
use std::sync::Arc;

pub type RosterSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Response header telling a `null` `updateUser` result apart:
/// `nothing-to-update` or `missing`
pub const UPDATE_OUTCOME_HEADER: &str = "x-roster-update-outcome";

/// Build the schema with `repository` as resolver data
pub fn build_schema(repository: Arc<dyn UserRepository>) -> RosterSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(repository)
        .finish()
}

fn repository<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn UserRepository>> {
    ctx.data::<Arc<dyn UserRepository>>()
}

/// Contract operations, named as clients call them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Users,
    User,
    CreateUser,
    UpdateUser,
    DeleteUser,
    UpdateUserQuantity,
    UpdateUserBirthday,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::Users => "users",
            Operation::User => "user",
            Operation::CreateUser => "createUser",
            Operation::UpdateUser => "updateUser",
            Operation::DeleteUser => "deleteUser",
            Operation::UpdateUserQuantity => "updateUserQuantity",
            Operation::UpdateUserBirthday => "updateUserBirthday",
        }
    }

    /// Message returned to the client when the operation fails
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Users => "Failed to fetch users",
            Operation::User => "Failed to fetch user",
            Operation::CreateUser => "Failed to create user",
            Operation::UpdateUser => "Failed to update user",
            Operation::DeleteUser => "Failed to delete user",
            Operation::UpdateUserQuantity => "Failed to update user quantity",
            Operation::UpdateUserBirthday => "Failed to update user birthday",
        }
    }

    /// Log `err` and turn it into the generic client-facing error
    fn failed(self, id: Option<UserId>, err: &RosterError) -> async_graphql::Error {
        match id {
            Some(id) => tracing::error!(
                operation = self.name(),
                user_id = id,
                error = %err,
                "{}",
                self.failure_message()
            ),
            None => tracing::error!(
                operation = self.name(),
                error = %err,
                "{}",
                self.failure_message()
            ),
        }
        async_graphql::Error::new(self.failure_message())
    }
}
