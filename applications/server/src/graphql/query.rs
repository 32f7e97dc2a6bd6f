use super::wire::{parse_id, UserNode};
use super::{repository, Operation};
use async_graphql::{Context, Object, Result, ID};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users, in store order
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserNode>> {
        let users = repository(ctx)?
            .list_users()
            .await
            .map_err(|e| Operation::Users.failed(None, &e))?;

        Ok(users.into_iter().map(UserNode::from).collect())
    }

    /// One user, or `null` if the id is unknown
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserNode>> {
        let id = parse_id(&id).map_err(|e| Operation::User.failed(None, &e))?;

        let user = repository(ctx)?
            .get_user(id)
            .await
            .map_err(|e| Operation::User.failed(Some(id), &e))?;

        Ok(user.map(UserNode::from))
    }
}
