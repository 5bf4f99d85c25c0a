//! In-memory user store.
//!
//! [`InMemoryUserStore`] keeps every user in a `Vec` behind a `RwLock`.
//! Reads share the lock and see a consistent snapshot; writes are exclusive.
//! Data is lost when the store is dropped.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use roster_types::{User, UserFields, UserId};

use crate::error::{StoreError, StoreResult};
use crate::locate::locate;
use crate::traits::UserStore;

/// An in-memory implementation of [`UserStore`].
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<User>>> {
        self.users
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<User>>> {
        self.users
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl UserStore for InMemoryUserStore {
    fn list(&self) -> StoreResult<Vec<User>> {
        Ok(self.read()?.clone())
    }

    fn insert(&self, fields: UserFields) -> StoreResult<Vec<User>> {
        let user = User::from_fields(UserId::generate(), fields);
        let mut users = self.write()?;
        tracing::debug!(id = %user.id, position = users.len(), "inserting user");
        users.push(user);
        Ok(users.clone())
    }

    fn locate(&self, id: &UserId) -> StoreResult<(usize, User)> {
        let users = self.read()?;
        let index = locate(&users, id)?;
        Ok((index, users[index].clone()))
    }

    fn update(&self, id: &UserId, fields: UserFields) -> StoreResult<User> {
        let mut users = self.write()?;
        let index = locate(&users, id)?;
        let updated = User::from_fields(*id, fields);
        users[index] = updated.clone();
        tracing::debug!(%id, position = index, "updated user");
        Ok(updated)
    }

    fn remove(&self, id: &UserId) -> StoreResult<()> {
        let mut users = self.write()?;
        let index = locate(&users, id)?;
        users.remove(index);
        tracing::debug!(%id, position = index, "removed user");
        Ok(())
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }
}
