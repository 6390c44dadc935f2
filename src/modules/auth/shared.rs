use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::errors::AuthError;
use super::store::CredentialStore;

/// Thread-safe handle to a [`CredentialStore`].
///
/// The lock is held for the whole of each operation so check-then-write
/// sequences cannot interleave.
#[derive(Debug, Clone)]
pub struct SharedCredentialStore {
    inner: Arc<Mutex<CredentialStore>>,
}

impl SharedCredentialStore {
    pub fn new(store: CredentialStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    // Every mutation happens after validation, so a panicking holder cannot
    // leave the store half-updated.
    fn lock(&self) -> MutexGuard<'_, CredentialStore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.lock().register(username, password)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<(), AuthError> {
        self.lock().authenticate(username, password)
    }

    pub fn reset_password(
        &self,
        username: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        self.lock()
            .reset_password(username, old_password, new_password)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.lock().contains(username)
    }
}
