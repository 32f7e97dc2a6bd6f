//! Domain types for the user registry

mod birthday;
mod patch;
mod user;

pub use birthday::normalize_birthday;
pub use patch::Patch;
pub use user::{NewUser, UpdateOutcome, User, UserId, UserPatch};
