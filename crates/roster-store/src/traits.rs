//! The [`UserStore`] trait defining the user storage interface.

use roster_types::{User, UserFields, UserId};

use crate::error::StoreResult;

/// Storage backend for the user collection.
///
/// Implementations must be thread-safe (`Send + Sync`). The collection is an
/// ordered sequence: `list` returns users in insertion order, `update` keeps
/// a user's position, and `remove` shifts later users down by one.
pub trait UserStore: Send + Sync {
    /// All live users in insertion order.
    fn list(&self) -> StoreResult<Vec<User>>;

    /// Append a new user with a freshly generated id.
    ///
    /// Returns the full collection after the insert.
    fn insert(&self, fields: UserFields) -> StoreResult<Vec<User>>;

    /// Position and current record of the user with `id`.
    ///
    /// Returns [`StoreError::NotFound`](crate::StoreError::NotFound) if no
    /// live user has this id.
    fn locate(&self, id: &UserId) -> StoreResult<(usize, User)>;

    /// Replace the name and age of the user with `id`, keeping its id and
    /// position. Returns the updated record.
    fn update(&self, id: &UserId, fields: UserFields) -> StoreResult<User>;

    /// Delete the user with `id`.
    fn remove(&self, id: &UserId) -> StoreResult<()>;

    /// Number of live users.
    fn len(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
