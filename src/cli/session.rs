//! Login, logout, and whoami commands

use crate::auth::session::SessionStore;
use crate::config::settings::Settings;
use crate::error::{InventoryError, InventoryResult};
use crate::services::UserService;
use crate::storage::Storage;

/// Verify credentials and persist a session
pub fn handle_login(
    storage: &Storage,
    settings: &Settings,
    sessions: &SessionStore,
    username: &str,
) -> InventoryResult<()> {
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| InventoryError::Io(format!("Failed to read password: {}", e)))?;

    let service = UserService::new(storage, settings);
    let session = service.authenticate(username, &password)?;
    sessions.save(&session)?;

    println!("Logged in as {} ({})", session.username, session.role);
    Ok(())
}

/// End the current session
pub fn handle_logout(sessions: &SessionStore) -> InventoryResult<()> {
    if sessions.clear()? {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

/// Show the current session
pub fn handle_whoami(sessions: &SessionStore) -> InventoryResult<()> {
    match sessions.load()? {
        Some(session) => {
            println!("{} ({})", session.username, session.role);
            println!("  Name:      {}", session.full_name);
            println!(
                "  Logged in: {}",
                session.logged_in_at.format("%Y-%m-%d %H:%M UTC")
            );
        }
        None => println!("Not logged in."),
    }
    Ok(())
}
