use anyhow::Result;
use clap::{Parser, Subcommand};

use inventory_cli::auth::session::SessionStore;
use inventory_cli::cli::{
    handle_category_command, handle_item_command, handle_login, handle_logout,
    handle_report_command, handle_user_command, handle_whoami, CategoryCommands, ItemCommands,
    ReportCommands, UserCommands,
};
use inventory_cli::config::{paths::InventoryPaths, settings::Settings};
use inventory_cli::storage::init::{initialize_storage, DEFAULT_ADMIN_USERNAME};
use inventory_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "inventory",
    version,
    about = "Terminal-based inventory tracking application",
    long_about = "Tracks equipment items grouped into categories, behind a small \
                  local user database. Items can be filtered by category, year, \
                  status, and text, and the result exported as a PDF or CSV report."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data store and seed the default admin account
    Init,

    /// Log in and start a session
    Login {
        /// Username
        username: String,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Item management commands
    #[command(subcommand)]
    Item(ItemCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// User management commands (admin only)
    #[command(subcommand)]
    User(UserCommands),

    /// Reports: filtered views, statistics, and export
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = InventoryPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let sessions = SessionStore::new(paths.clone());

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing inventory at: {}", paths.base_dir().display());
            let seeded_admin = initialize_storage(&paths, &settings)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            if seeded_admin {
                println!();
                println!(
                    "Created default admin account '{}' with password '{}'.",
                    DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_USERNAME
                );
                println!("Change it immediately:");
                println!("  inventory login {}", DEFAULT_ADMIN_USERNAME);
                println!(
                    "  inventory user edit {} --password",
                    DEFAULT_ADMIN_USERNAME
                );
            }
            if settings.seed_demo_data {
                println!();
                println!("Run 'inventory item list' to see the starter items.");
            }
        }
        Some(Commands::Login { username }) => {
            handle_login(&storage, &settings, &sessions, &username)?;
        }
        Some(Commands::Logout) => {
            handle_logout(&sessions)?;
        }
        Some(Commands::Whoami) => {
            handle_whoami(&sessions)?;
        }
        Some(Commands::Item(cmd)) => {
            handle_item_command(&storage, &sessions, cmd)?;
        }
        Some(Commands::Category(cmd)) => {
            handle_category_command(&storage, &sessions, cmd)?;
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&storage, &settings, &sessions, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &sessions, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Inventory Configuration");
            println!("=======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Password minimum length: {}", settings.password_min_length);
            println!("  Seed demo data on init:  {}", settings.seed_demo_data);
        }
        None => {
            println!("Inventory - terminal-based inventory tracking");
            println!();
            println!("Run 'inventory --help' for usage information.");
            println!("Run 'inventory init' to set up a new data store.");
        }
    }

    Ok(())
}
