//! Wire shapes of the GraphQL API
//!
//! Clients see the birth date as `birthday`; the domain types call it
//! `birthdate`. Every conversion between the two lives in this module.

use async_graphql::{InputObject, MaybeUndefined, SimpleObject, ID};
use roster_core::{NewUser, Patch, RosterError, User, UserId, UserPatch};
use serde::{Deserialize, Serialize};

/// A user as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[graphql(name = "User")]
pub struct UserNode {
    pub id: ID,
    pub name: String,
    pub birthday: String,
    pub quantity: i32,
    pub avatar: Option<String>,
}

impl From<User> for UserNode {
    fn from(user: User) -> Self {
        Self {
            id: ID::from(user.id.to_string()),
            name: user.name,
            birthday: user.birthdate,
            quantity: user.quantity,
            avatar: user.avatar,
        }
    }
}

impl TryFrom<UserNode> for User {
    type Error = RosterError;

    fn try_from(node: UserNode) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_id(&node.id)?,
            name: node.name,
            birthdate: node.birthday,
            quantity: node.quantity,
            avatar: node.avatar,
        })
    }
}

/// Parse a GraphQL `ID` into a store id
pub fn parse_id(id: &ID) -> Result<UserId, RosterError> {
    id.parse::<UserId>()
        .map_err(|_| RosterError::invalid_input(format!("Invalid user ID: {:?}", id.as_str())))
}

/// Fields for `createUser`
///
/// Everything is optional on the wire; omitted required fields are rejected
/// by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, InputObject)]
pub struct CreateUserInput {
    pub name: Option<String>,
    pub birthday: Option<String>,
    pub quantity: Option<i32>,
    pub avatar: Option<String>,
}

impl CreateUserInput {
    /// Fill fields missing here from `fallback`
    #[must_use]
    pub fn or(self, fallback: CreateUserInput) -> Self {
        Self {
            name: self.name.or(fallback.name),
            birthday: self.birthday.or(fallback.birthday),
            quantity: self.quantity.or(fallback.quantity),
            avatar: self.avatar.or(fallback.avatar),
        }
    }
}

impl From<CreateUserInput> for NewUser {
    fn from(input: CreateUserInput) -> Self {
        Self {
            name: input.name,
            birthdate: input.birthday,
            quantity: input.quantity,
            avatar: input.avatar,
        }
    }
}

/// Fields for `updateUser`
///
/// An omitted field is left unchanged. `avatar: null` clears the avatar;
/// `null` for any other field is rejected.
#[derive(Debug, Clone, InputObject)]
pub struct UpdateUserInput {
    pub name: MaybeUndefined<String>,
    pub birthday: MaybeUndefined<String>,
    pub quantity: MaybeUndefined<i32>,
    pub avatar: MaybeUndefined<String>,
}

impl Default for UpdateUserInput {
    fn default() -> Self {
        Self {
            name: MaybeUndefined::Undefined,
            birthday: MaybeUndefined::Undefined,
            quantity: MaybeUndefined::Undefined,
            avatar: MaybeUndefined::Undefined,
        }
    }
}

impl UpdateUserInput {
    /// Fill fields left undefined here from `fallback`
    #[must_use]
    pub fn or(self, fallback: UpdateUserInput) -> Self {
        Self {
            name: prefer(self.name, fallback.name),
            birthday: prefer(self.birthday, fallback.birthday),
            quantity: prefer(self.quantity, fallback.quantity),
            avatar: prefer(self.avatar, fallback.avatar),
        }
    }
}

impl TryFrom<UpdateUserInput> for UserPatch {
    type Error = RosterError;

    fn try_from(input: UpdateUserInput) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required("name", input.name)?,
            birthdate: required("birthday", input.birthday)?,
            quantity: required("quantity", input.quantity)?,
            avatar: match input.avatar {
                MaybeUndefined::Undefined => Patch::Absent,
                MaybeUndefined::Null => Patch::Present(None),
                MaybeUndefined::Value(avatar) => Patch::Present(Some(avatar)),
            },
        })
    }
}

fn prefer<T>(primary: MaybeUndefined<T>, fallback: MaybeUndefined<T>) -> MaybeUndefined<T> {
    if primary.is_undefined() {
        fallback
    } else {
        primary
    }
}

fn required<T>(field: &str, value: MaybeUndefined<T>) -> Result<Patch<T>, RosterError> {
    match value {
        MaybeUndefined::Undefined => Ok(Patch::Absent),
        MaybeUndefined::Value(value) => Ok(Patch::Present(value)),
        MaybeUndefined::Null => Err(RosterError::invalid_input(format!(
            "{field} cannot be set to null"
        ))),
    }
}
