//! Login / registration against the user directory, and the current session.
//!
//! Credentials are plaintext and compared verbatim. There is no logout: the
//! session lasts until the process exits.

use crate::domain::{DomainError, User};
use crate::usecases::UserDirectory;
use tokio::sync::RwLock;
use tracing::{info, warn};

/// Who is logged in, if anyone.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub current_user: Option<User>,
}

pub struct AuthService {
    directory: UserDirectory,
    session: RwLock<Session>,
}

impl AuthService {
    pub fn new(directory: UserDirectory) -> Self {
        Self {
            directory,
            session: RwLock::new(Session::default()),
        }
    }

    pub async fn load(&self) -> Result<usize, DomainError> {
        self.directory.load().await
    }

    /// Checks credentials without touching the session.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, DomainError> {
        match self.directory.find_by_credentials(email, password).await {
            Some(user) => Ok(user),
            None => {
                warn!(email, "login rejected");
                Err(DomainError::Auth("incorrect email or password".into()))
            }
        }
    }

    pub async fn start_session(&self, user: User) {
        info!(email = %user.email, "session started");
        self.session.write().await.current_user = Some(user);
    }

    pub async fn register(&self, email: &str, password: &str) -> Result<User, DomainError> {
        self.directory.register(email, password).await
    }

    pub async fn current_user(&self) -> Option<User> {
        self.session.read().await.current_user.clone()
    }

    /// The logged-in user, or `Unauthenticated`.
    pub async fn require_user(&self) -> Result<User, DomainError> {
        self.current_user().await.ok_or(DomainError::Unauthenticated)
    }
}
