use fin_core::{NewUser, StoreError, StoreResult, UniqueField, UserRecord, UserStore};

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use uuid::Uuid;

#[derive(Default)]
struct MemoryState {
    users: HashMap<Uuid, UserRecord>,
    by_subject: HashMap<String, Uuid>,
    by_email: HashMap<String, Uuid>,
}

impl MemoryState {
    fn get(&self, id: Option<&Uuid>) -> Option<UserRecord> {
        id.and_then(|id| self.users.get(id)).cloned()
    }
}

/// Process-local user store.
///
/// Both unique indexes are checked and updated under one write lock, so
/// `insert` has the same all-or-nothing behavior as the SQL store.
#[derive(Default)]
pub struct InMemoryUserStore {
    state: RwLock<MemoryState>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.users.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, MemoryState>> {
        self.state
            .read()
            .map_err(|_| StoreError::unavailable("user store lock poisoned"))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, MemoryState>> {
        self.state
            .write()
            .map_err(|_| StoreError::unavailable("user store lock poisoned"))
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_external_subject_id(
        &self,
        external_subject_id: &str,
    ) -> StoreResult<Option<UserRecord>> {
        let state = self.read()?;
        Ok(state.get(state.by_subject.get(external_subject_id)))
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<UserRecord>> {
        let state = self.read()?;
        Ok(state.get(state.by_email.get(email)))
    }

    async fn insert(&self, new_user: &NewUser) -> StoreResult<UserRecord> {
        let mut state = self.write()?;

        if let Some(subject) = &new_user.external_subject_id
            && state.by_subject.contains_key(subject)
        {
            return Err(StoreError::uniqueness_violation(
                UniqueField::ExternalSubjectId,
            ));
        }
        if state.by_email.contains_key(&new_user.email) {
            return Err(StoreError::uniqueness_violation(UniqueField::Email));
        }

        let user = UserRecord::from_new_user(new_user);
        if let Some(subject) = &user.external_subject_id {
            state.by_subject.insert(subject.clone(), user.id);
        }
        state.by_email.insert(user.email.clone(), user.id);
        state.users.insert(user.id, user.clone());

        Ok(user)
    }
}
