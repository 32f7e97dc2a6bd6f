use super::wire::{parse_id, CreateUserInput, UpdateUserInput, UserNode};
use super::{repository, Operation, UPDATE_OUTCOME_HEADER};
use async_graphql::{Context, MaybeUndefined, Object, Result, ID};
use roster_core::{NewUser, UpdateOutcome, UserPatch};

pub struct MutationRoot;

// Each mutation accepts its fields either inside `input` or as flat
// arguments; a field set in `input` wins.
#[Object]
impl MutationRoot {
    /// Create a user and return it with its assigned id
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        input: Option<CreateUserInput>,
        name: Option<String>,
        birthday: Option<String>,
        quantity: Option<i32>,
        avatar: Option<String>,
    ) -> Result<UserNode> {
        let flat = CreateUserInput {
            name,
            birthday,
            quantity,
            avatar,
        };
        let new_user = NewUser::from(input.unwrap_or_default().or(flat));

        let user = repository(ctx)?
            .create_user(new_user)
            .await
            .map_err(|e| Operation::CreateUser.failed(None, &e))?;

        tracing::info!(user_id = user.id, "Created user");
        Ok(UserNode::from(user))
    }

    /// Update the supplied fields only
    ///
    /// Returns `null` when no field was supplied or the id is unknown; the
    /// `x-roster-update-outcome` response header says which.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: Option<UpdateUserInput>,
        name: MaybeUndefined<String>,
        birthday: MaybeUndefined<String>,
        quantity: MaybeUndefined<i32>,
        avatar: MaybeUndefined<String>,
    ) -> Result<Option<UserNode>> {
        let op = Operation::UpdateUser;
        let id = parse_id(&id).map_err(|e| op.failed(None, &e))?;

        let flat = UpdateUserInput {
            name,
            birthday,
            quantity,
            avatar,
        };
        let patch = UserPatch::try_from(input.unwrap_or_default().or(flat))
            .map_err(|e| op.failed(Some(id), &e))?;

        let fields = patch.len();
        let outcome = repository(ctx)?
            .update_user(id, patch)
            .await
            .map_err(|e| op.failed(Some(id), &e))?;

        Ok(match outcome {
            UpdateOutcome::Updated(user) => {
                tracing::info!(user_id = id, fields, "Updated user");
                Some(UserNode::from(user))
            }
            UpdateOutcome::Missing => {
                tracing::info!(user_id = id, "Update matched no user");
                ctx.insert_http_header(UPDATE_OUTCOME_HEADER, "missing");
                None
            }
            UpdateOutcome::NothingToUpdate => {
                tracing::info!(user_id = id, "Nothing to update");
                ctx.insert_http_header(UPDATE_OUTCOME_HEADER, "nothing-to-update");
                None
            }
        })
    }

    /// Delete a user; `false` if no row was removed
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<bool> {
        let op = Operation::DeleteUser;
        let id = parse_id(&id).map_err(|e| op.failed(None, &e))?;

        let deleted = repository(ctx)?
            .delete_user(id)
            .await
            .map_err(|e| op.failed(Some(id), &e))?;

        if deleted {
            tracing::info!(user_id = id, "Deleted user");
        }
        Ok(deleted)
    }

    async fn update_user_quantity(
        &self,
        ctx: &Context<'_>,
        id: ID,
        quantity: i32,
    ) -> Result<Option<UserNode>> {
        let op = Operation::UpdateUserQuantity;
        let id = parse_id(&id).map_err(|e| op.failed(None, &e))?;

        let user = repository(ctx)?
            .update_user_quantity(id, quantity)
            .await
            .map_err(|e| op.failed(Some(id), &e))?;

        Ok(user.map(UserNode::from))
    }

    async fn update_user_birthday(
        &self,
        ctx: &Context<'_>,
        id: ID,
        birthday: String,
    ) -> Result<Option<UserNode>> {
        let op = Operation::UpdateUserBirthday;
        let id = parse_id(&id).map_err(|e| op.failed(None, &e))?;

        let user = repository(ctx)?
            .update_user_birthdate(id, birthday)
            .await
            .map_err(|e| op.failed(Some(id), &e))?;

        Ok(user.map(UserNode::from))
    }
}
