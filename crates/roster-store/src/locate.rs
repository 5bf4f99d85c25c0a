//! Id lookup over an ordered slice of users.

use roster_types::{User, UserId};

use crate::error::{StoreError, StoreResult};

/// Position of the user with `id` in `users`.
///
/// Linear scan comparing by id. Ids are unique, so the first match is the
/// only one.
pub fn locate(users: &[User], id: &UserId) -> StoreResult<usize> {
    users
        .iter()
        .position(|user| &user.id == id)
        .ok_or(StoreError::NotFound { id: *id })
}
