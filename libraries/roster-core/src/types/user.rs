/// User domain types
use serde::{Deserialize, Serialize};

use super::Patch;

/// User identifier, assigned by the store
pub type UserId = i64;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Surrogate key, immutable once assigned
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Birth date as an ISO-8601 string
    pub birthdate: String,

    /// Counter adjusted from the UI; expected to stay non-negative
    pub quantity: i32,

    /// Data URI or URL
    pub avatar: Option<String>,
}

/// Data for creating a new user
///
/// Required fields are optional here on purpose: omission is rejected by the
/// store's `NOT NULL` constraints, not by the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: Option<String>,
    pub birthdate: Option<String>,
    pub quantity: Option<i32>,
    pub avatar: Option<String>,
}

impl NewUser {
    /// Create a complete input without an avatar
    pub fn new(name: impl Into<String>, birthdate: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: Some(name.into()),
            birthdate: Some(birthdate.into()),
            quantity: Some(quantity),
            avatar: None,
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// Partial update of a user
///
/// Each attribute is tagged `Absent` or `Present`; only present attributes
/// are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Patch<String>,
    pub birthdate: Patch<String>,
    pub quantity: Patch<i32>,
    pub avatar: Patch<Option<String>>,
}

impl UserPatch {
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Patch::Present(name.into());
        self
    }

    #[must_use]
    pub fn with_birthdate(mut self, birthdate: impl Into<String>) -> Self {
        self.birthdate = Patch::Present(birthdate.into());
        self
    }

    #[must_use]
    pub fn with_quantity(mut self, quantity: i32) -> Self {
        self.quantity = Patch::Present(quantity);
        self
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = Patch::Present(avatar);
        self
    }

    /// True when no attribute is present
    pub fn is_empty(&self) -> bool {
        self.name.is_absent()
            && self.birthdate.is_absent()
            && self.quantity.is_absent()
            && self.avatar.is_absent()
    }

    /// Number of present attributes
    pub fn len(&self) -> usize {
        [
            self.name.is_present(),
            self.birthdate.is_present(),
            self.quantity.is_present(),
            self.avatar.is_present(),
        ]
        .into_iter()
        .filter(|present| *present)
        .count()
    }

    /// The record this patch would produce when applied to `user`
    pub fn apply_to(&self, user: &User) -> User {
        User {
            id: user.id,
            name: self.name.clone().apply(user.name.clone()),
            birthdate: self.birthdate.clone().apply(user.birthdate.clone()),
            quantity: self.quantity.apply(user.quantity),
            avatar: self.avatar.clone().apply(user.avatar.clone()),
        }
    }
}

/// Result of a partial update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The row as re-read after the write
    Updated(User),
    /// No row with that id exists after the write
    Missing,
    /// The patch was empty; the store was not touched
    NothingToUpdate,
}

impl UpdateOutcome {
    pub fn into_user(self) -> Option<User> {
        match self {
            Self::Updated(user) => Some(user),
            Self::Missing | Self::NothingToUpdate => None,
        }
    }
}
