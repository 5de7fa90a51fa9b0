//! Registration and login CLI commands

use crate::auth::AuthService;
use crate::error::{FindashError, FindashResult};
use crate::storage::Store;

/// Handle the `register` command
pub fn handle_register(store: &Store, name: &str, email: &str) -> FindashResult<()> {
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| FindashError::Io(format!("Failed to read password: {}", e)))?;
    let confirm = rpassword::prompt_password("Confirm password: ")
        .map_err(|e| FindashError::Io(format!("Failed to read password: {}", e)))?;

    if password != confirm {
        return Err(FindashError::Validation("Passwords do not match".into()));
    }

    let user = AuthService::new(store).register(name, email, &password)?;
    println!("Registered {}", user);

    Ok(())
}

/// Handle the `login` command
///
/// Only confirms that the credentials work; ledger commands perform their
/// own login so every invocation stays credential-gated.
pub fn handle_login(store: &Store, email: &str) -> FindashResult<()> {
    let session = super::authenticate(store, email)?;
    println!("Logged in as user {}", session.require_user()?);

    Ok(())
}
