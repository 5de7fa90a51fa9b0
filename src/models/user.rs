//! User model
//!
//! A registered user of the ledger. Users are created once at registration
//! and never updated or deleted; the row layout matches the `users.csv`
//! snapshot columns exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A registered user
///
/// `email` is the unique lookup key (case-sensitive exact match);
/// `password_hash` is an Argon2 PHC string, never the plain password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned max-plus-one over the collection
    #[serde(rename = "user_id")]
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Unique email address used for login
    pub email: String,

    /// Salted one-way password hash (PHC string)
    pub password_hash: String,
}

impl User {
    /// Create a new user record
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Deliberately omits the password hash
        write!(f, "#{} {} <{}>", self.id, self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(UserId::new(1), "Alice", "alice@example.com", "$argon2id$...");
        assert_eq!(user.id, UserId::new(1));
        assert_eq!(user.email, "alice@example.com");
    }

    #[test]
    fn test_display_hides_hash() {
        let user = User::new(UserId::new(7), "Alice", "alice@example.com", "$argon2id$secret");
        let shown = user.to_string();
        assert_eq!(shown, "#7 Alice <alice@example.com>");
        assert!(!shown.contains("argon2id"));
    }
}
