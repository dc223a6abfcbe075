//! User CLI commands
//!
//! All of these are admin-only; the service layer enforces it. Passwords are
//! read from the terminal without echo, never from arguments.

use clap::Subcommand;

use crate::auth::session::SessionStore;
use crate::config::settings::Settings;
use crate::display::user::format_user_list;
use crate::error::{InventoryError, InventoryResult};
use crate::models::Role;
use crate::services::UserService;
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// List all users
    List,

    /// Create a new user
    #[command(alias = "create")]
    Add {
        /// Login name
        username: String,
        /// Display name
        #[arg(short, long)]
        full_name: String,
        /// Role (admin or moderator)
        #[arg(short, long, default_value = "moderator")]
        role: String,
    },

    /// Edit a user
    Edit {
        /// Username or ID
        user: String,
        /// New display name
        #[arg(short, long)]
        full_name: Option<String>,
        /// New role (admin or moderator)
        #[arg(short, long)]
        role: Option<String>,
        /// Prompt for a new password
        #[arg(long)]
        password: bool,
    },

    /// Delete a user
    Delete {
        /// Username or ID
        user: String,
    },
}

/// Handle a user command
pub fn handle_user_command(
    storage: &Storage,
    settings: &Settings,
    sessions: &SessionStore,
    cmd: UserCommands,
) -> InventoryResult<()> {
    let session = sessions.require()?;
    let service = UserService::new(storage, settings);

    match cmd {
        UserCommands::List => {
            let users = service.list(&session)?;
            print!("{}", format_user_list(&users));
        }

        UserCommands::Add {
            username,
            full_name,
            role,
        } => {
            let role: Role = role.parse().map_err(InventoryError::Validation)?;
            let password = prompt_new_password()?;

            let user = service.create(&session, &username, &full_name, role, &password)?;
            println!("Created user: {} ({})", user.username, user.role);
        }

        UserCommands::Edit {
            user,
            full_name,
            role,
            password,
        } => {
            let target = service
                .find(&user)?
                .ok_or_else(|| InventoryError::user_not_found(&user))?;

            if full_name.is_none() && role.is_none() && !password {
                println!("No changes specified. Use --full-name, --role, or --password.");
                return Ok(());
            }

            let role = role
                .as_deref()
                .map(|r| r.parse::<Role>().map_err(InventoryError::Validation))
                .transpose()?;

            let new_password = if password {
                Some(prompt_new_password()?)
            } else {
                None
            };

            let updated = service.update(
                &session,
                target.id,
                full_name.as_deref(),
                role,
                new_password.as_deref(),
            )?;
            println!("Updated user: {}", updated.username);
        }

        UserCommands::Delete { user } => {
            let target = service
                .find(&user)?
                .ok_or_else(|| InventoryError::user_not_found(&user))?;

            service.delete(&session, target.id)?;
            println!("Deleted user: {}", target.username);
        }
    }

    Ok(())
}

/// Prompt for a password twice and require the entries to match
fn prompt_new_password() -> InventoryResult<String> {
    let password = rpassword::prompt_password("Password: ")
        .map_err(|e| InventoryError::Io(format!("Failed to read password: {}", e)))?;
    let confirm = rpassword::prompt_password("Confirm password: ")
        .map_err(|e| InventoryError::Io(format!("Failed to read password: {}", e)))?;

    if password != confirm {
        return Err(InventoryError::Validation("Passwords do not match".into()));
    }

    Ok(password)
}
