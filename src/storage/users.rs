//! User collection store
//!
//! Persists the users collection as a whole-snapshot CSV file. Reads prefer
//! the scratch snapshot over the baseline; writes always target the scratch
//! file and never touch the baseline.

use std::path::PathBuf;

use crate::config::StorePaths;
use crate::error::FindashError;
use crate::models::{User, UserId};

use super::file_io::{read_rows, write_rows_atomic};

/// Fixed column schema for users.csv
const COLUMNS: [&str; 4] = ["user_id", "name", "email", "password_hash"];

/// Store for the users collection
pub struct UserStore {
    baseline: PathBuf,
    scratch: PathBuf,
}

impl UserStore {
    /// Create a user store from the resolved paths
    pub fn new(paths: &StorePaths) -> Self {
        Self {
            baseline: paths.users_baseline(),
            scratch: paths.users_scratch(),
        }
    }

    /// Load the full collection
    ///
    /// The scratch snapshot takes precedence over the baseline; when neither
    /// exists the collection is empty (not an error).
    pub fn load(&self) -> Result<Vec<User>, FindashError> {
        if self.scratch.exists() {
            read_rows(&self.scratch)
        } else if self.baseline.exists() {
            read_rows(&self.baseline)
        } else {
            Ok(Vec::new())
        }
    }

    /// Save the full collection to the scratch snapshot, replacing its
    /// previous contents
    pub fn save(&self, users: &[User]) -> Result<(), FindashError> {
        write_rows_atomic(&self.scratch, &COLUMNS, users)
    }

    /// The ID the next created user will get
    pub fn next_id(users: &[User]) -> UserId {
        UserId::next_after(users.iter().map(|u| u.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, StorePaths, UserStore) {
        let temp_dir = TempDir::new().unwrap();
        let paths = StorePaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        let store = UserStore::new(&paths);
        (temp_dir, paths, store)
    }

    fn user(id: i64, email: &str) -> User {
        User::new(UserId::new(id), "Test", email, "$argon2id$hash")
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, _paths, store) = create_test_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, _paths, store) = create_test_store();

        let users = vec![user(1, "a@example.com"), user(2, "b@example.com")];
        store.save(&users).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, users);
    }

    #[test]
    fn test_save_targets_scratch_not_baseline() {
        let (_temp_dir, paths, store) = create_test_store();

        store.save(&[user(1, "a@example.com")]).unwrap();

        assert!(paths.users_scratch().exists());
        assert!(!paths.users_baseline().exists());
    }

    #[test]
    fn test_scratch_shadows_baseline() {
        let (_temp_dir, paths, store) = create_test_store();

        // Seed a baseline snapshot directly
        write_rows_atomic(
            &paths.users_baseline(),
            &COLUMNS,
            &[user(1, "seed@example.com")],
        )
        .unwrap();

        // Before any write, the baseline is visible
        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].email, "seed@example.com");

        // A save creates the scratch copy, which then wins
        store.save(&[user(1, "edited@example.com")]).unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].email, "edited@example.com");

        // The baseline itself is untouched
        let baseline: Vec<User> = read_rows(&paths.users_baseline()).unwrap();
        assert_eq!(baseline[0].email, "seed@example.com");
    }

    #[test]
    fn test_next_id() {
        assert_eq!(UserStore::next_id(&[]), UserId::new(1));

        let users = vec![user(2, "a@example.com"), user(5, "b@example.com")];
        assert_eq!(UserStore::next_id(&users), UserId::new(6));
    }

    #[test]
    fn test_corrupt_snapshot_is_fatal() {
        let (_temp_dir, paths, store) = create_test_store();

        std::fs::write(paths.users_scratch(), "not,a,valid\nsnapshot").unwrap();

        assert!(matches!(store.load(), Err(FindashError::Storage(_))));
    }
}
