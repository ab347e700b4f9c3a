//! Registered accounts, kept in memory and persisted under the `users` key.
//!
//! Registration appends unconditionally: duplicate emails are accepted and
//! lookups return the first match in registration order.

use crate::domain::{DomainError, User};
use crate::ports::USERS_KEY;
use crate::usecases::PersistentStore;
use tokio::sync::Mutex;
use tracing::info;

pub struct UserDirectory {
    store: PersistentStore,
    users: Mutex<Vec<User>>,
}

impl UserDirectory {
    /// Directory seeded with `seed` until `load` finds a persisted list.
    pub fn new(store: PersistentStore, seed: Vec<User>) -> Self {
        Self {
            store,
            users: Mutex::new(seed),
        }
    }

    /// Replaces the seed with the persisted directory when one exists.
    pub async fn load(&self) -> Result<usize, DomainError> {
        let mut users = self.users.lock().await;
        if let Some(stored) = self.store.load::<Vec<User>>(USERS_KEY).await? {
            *users = stored;
        }
        info!(count = users.len(), "user directory loaded");
        Ok(users.len())
    }

    /// Linear scan, exact match on both fields.
    pub async fn find_by_credentials(&self, email: &str, password: &str) -> Option<User> {
        self.users
            .lock()
            .await
            .iter()
            .find(|u| u.matches(email, password))
            .cloned()
    }

    /// Appends a new account and persists the whole directory.
    /// On a failed save the in-memory directory is left as it was.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, DomainError> {
        let mut users = self.users.lock().await;
        let user = User::new(email, password);
        let mut next = users.clone();
        next.push(user.clone());
        self.store.save(USERS_KEY, &next).await?;
        *users = next;
        info!(email, count = users.len(), "user registered");
        Ok(user)
    }

    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }
}
