//! Identity management for findash
//!
//! Registration and login against the users collection, plus the explicit
//! session value that scopes ledger operations to an authenticated user.
//! Login failures are reported uniformly: callers cannot tell an unknown
//! email from a wrong password.

pub mod password;

pub use password::{hash_password, verify_password};

use crate::error::{FindashError, FindashResult};
use crate::models::{User, UserId};
use crate::storage::{Store, UserStore};

/// Request-scoped login state, passed explicitly to operations that need an
/// authenticated user (no process-wide login flag)
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    user_id: Option<UserId>,
}

impl Session {
    /// A session with nobody logged in
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// A session for an authenticated user
    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    /// The logged-in user, if any
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// The logged-in user, or an error when the session is anonymous
    pub fn require_user(&self) -> FindashResult<UserId> {
        self.user_id.ok_or(FindashError::Unauthenticated)
    }
}

/// Service for user registration and login
pub struct AuthService<'a> {
    store: &'a Store,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Register a new user
    ///
    /// Fails with a duplicate error (not a panic or I/O error) when the
    /// email is already taken, compared case-sensitively.
    pub fn register(&self, name: &str, email: &str, password: &str) -> FindashResult<User> {
        if email.is_empty() {
            return Err(FindashError::Validation("Email must not be empty".into()));
        }
        if password.is_empty() {
            return Err(FindashError::Validation(
                "Password must not be empty".into(),
            ));
        }

        let mut users = self.store.users.load()?;

        if users.iter().any(|u| u.email == email) {
            return Err(FindashError::duplicate_user(email));
        }

        let password_hash = hash_password(password)?;
        let user = User::new(UserStore::next_id(&users), name, email, password_hash);

        users.push(user.clone());
        self.store.users.save(&users)?;

        Ok(user)
    }

    /// Log a user in, returning their ID
    ///
    /// Unknown email and wrong password both produce `InvalidCredentials`.
    /// The unknown-email path still pays the hashing cost so the two
    /// failure causes take roughly the same time.
    pub fn login(&self, email: &str, password: &str) -> FindashResult<UserId> {
        let users = self.store.users.load()?;

        match users.iter().find(|u| u.email == email) {
            Some(user) => {
                if verify_password(password, &user.password_hash)? {
                    Ok(user.id)
                } else {
                    Err(FindashError::InvalidCredentials)
                }
            }
            None => {
                let _ = hash_password(password)?;
                Err(FindashError::InvalidCredentials)
            }
        }
    }
}
