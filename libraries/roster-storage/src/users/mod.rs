//! User queries
//!
//! The `users` table stores the birth date in a column named `birthday`;
//! rows are mapped to the `birthdate` field of [`User`] here.

use crate::{SqlValue, StorageError, Store};
use roster_core::types::{NewUser, Patch, UpdateOutcome, User, UserId, UserPatch};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

type Result<T> = std::result::Result<T, StorageError>;

/// A built `UPDATE` with its positional parameters, `id` last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

/// Build the `UPDATE` for the present fields of `patch`
///
/// Columns are assigned in table order. Returns `None` for an empty patch.
pub fn update_statement(id: UserId, patch: &UserPatch) -> Option<UpdateStatement> {
    let mut assignments = Vec::new();
    let mut params = Vec::new();

    if let Patch::Present(name) = &patch.name {
        assignments.push("name = ?");
        params.push(SqlValue::from(name.as_str()));
    }
    if let Patch::Present(birthdate) = &patch.birthdate {
        assignments.push("birthday = ?");
        params.push(SqlValue::from(birthdate.as_str()));
    }
    if let Patch::Present(quantity) = patch.quantity {
        assignments.push("quantity = ?");
        params.push(SqlValue::from(quantity));
    }
    if let Patch::Present(avatar) = &patch.avatar {
        assignments.push("avatar = ?");
        params.push(SqlValue::from(avatar.clone()));
    }

    if assignments.is_empty() {
        return None;
    }

    params.push(SqlValue::from(id));

    Some(UpdateStatement {
        sql: format!("UPDATE users SET {} WHERE id = ?", assignments.join(", ")),
        params,
    })
}

/// Get all users
pub async fn get_all(store: &Store) -> Result<Vec<User>> {
    let rows = store
        .fetch_all(
            "SELECT id, name, birthday, quantity, avatar FROM users",
            &[],
        )
        .await?;

    rows.iter().map(user_from_row).collect()
}

/// Get user by ID
pub async fn get_by_id(store: &Store, id: UserId) -> Result<Option<User>> {
    let row = store
        .fetch_optional(
            "SELECT id, name, birthday, quantity, avatar FROM users WHERE id = ?",
            &[SqlValue::from(id)],
        )
        .await?;

    row.as_ref().map(user_from_row).transpose()
}

/// Insert a user and read it back
///
/// Missing required fields are bound as `NULL` and rejected by the table's
/// `NOT NULL` constraints.
pub async fn create(store: &Store, user: NewUser) -> Result<User> {
    let result = store
        .execute(
            "INSERT INTO users (name, birthday, quantity, avatar) VALUES (?, ?, ?, ?)",
            &[
                SqlValue::from(user.name),
                SqlValue::from(user.birthdate),
                SqlValue::from(user.quantity),
                SqlValue::from(user.avatar),
            ],
        )
        .await?;

    let id = result.last_insert_rowid();

    get_by_id(store, id)
        .await?
        .ok_or(StorageError::Database(sqlx::Error::RowNotFound))
}

/// Write the present fields of `patch`, then re-read the row
///
/// The write and the read are separate statements.
pub async fn update(store: &Store, id: UserId, patch: &UserPatch) -> Result<UpdateOutcome> {
    let Some(statement) = update_statement(id, patch) else {
        return Ok(UpdateOutcome::NothingToUpdate);
    };

    store.execute(&statement.sql, &statement.params).await?;

    Ok(match get_by_id(store, id).await? {
        Some(user) => UpdateOutcome::Updated(user),
        None => UpdateOutcome::Missing,
    })
}

/// Delete user, returning whether a row was removed
pub async fn delete(store: &Store, id: UserId) -> Result<bool> {
    let result = store
        .execute("DELETE FROM users WHERE id = ?", &[SqlValue::from(id)])
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Set only the quantity
pub async fn update_quantity(store: &Store, id: UserId, quantity: i32) -> Result<Option<User>> {
    let patch = UserPatch::default().with_quantity(quantity);
    Ok(update(store, id, &patch).await?.into_user())
}

/// Set only the birthdate
pub async fn update_birthdate(store: &Store, id: UserId, birthdate: &str) -> Result<Option<User>> {
    let patch = UserPatch::default().with_birthdate(birthdate);
    Ok(update(store, id, &patch).await?.into_user())
}

fn user_from_row(row: &SqliteRow) -> Result<User> {
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        birthdate: row.try_get("birthday")?,
        quantity: row.try_get("quantity")?,
        avatar: row.try_get("avatar")?,
    })
}
