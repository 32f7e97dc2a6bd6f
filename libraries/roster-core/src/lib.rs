//! Roster Core
//!
//! Storage-agnostic domain types, the repository trait and error handling for
//! the Roster user registry.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `NewUser`, `UserPatch` and the `Patch` presence tag
//! - **Core Trait**: `UserRepository`, the set of operations every backend offers
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::{NewUser, Patch, UserPatch};
//!
//! let new_user = NewUser::new("Ada", "1985-12-10T00:00:00.000Z", 3);
//! assert_eq!(new_user.name.as_deref(), Some("Ada"));
//!
//! // Only the quantity is touched by this patch
//! let patch = UserPatch::default().with_quantity(10);
//! assert!(patch.name.is_absent());
//! assert_eq!(patch.quantity, Patch::Present(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

pub use error::{Result, RosterError};
pub use storage::UserRepository;

pub use types::{
    normalize_birthday, NewUser, Patch, UpdateOutcome, User, UserId, UserPatch,
};
