//! Category CLI commands

use clap::Subcommand;

use crate::auth::session::SessionStore;
use crate::display::category::{format_category_details, format_category_list};
use crate::error::{InventoryError, InventoryResult};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories with item counts
    List,

    /// Create a new category
    #[command(alias = "create")]
    Add {
        /// Category name
        name: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },

    /// Delete a category (fails while items still reference it)
    Delete {
        /// Category name or ID
        category: String,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    sessions: &SessionStore,
    cmd: CategoryCommands,
) -> InventoryResult<()> {
    let session = sessions.require()?;
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            let mut with_counts = Vec::with_capacity(categories.len());
            for category in categories {
                let count = storage.items.count_in_category(category.id)?;
                with_counts.push((category, count));
            }
            print!("{}", format_category_list(&with_counts));
        }

        CategoryCommands::Add { name, description } => {
            let category = service.create(&session, &name, &description)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Show { category } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| InventoryError::category_not_found(&category))?;
            let count = storage.items.count_in_category(cat.id)?;
            print!("{}", format_category_details(&cat, count));
        }

        CategoryCommands::Edit {
            category,
            name,
            description,
        } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| InventoryError::category_not_found(&category))?;

            if name.is_none() && description.is_none() {
                println!("No changes specified. Use --name or --description.");
                return Ok(());
            }

            let updated = service.update(&session, cat.id, name.as_deref(), description.as_deref())?;
            println!("Updated category: {}", updated.name);
        }

        CategoryCommands::Delete { category } => {
            let cat = service
                .find(&category)?
                .ok_or_else(|| InventoryError::category_not_found(&category))?;

            service.delete(&session, cat.id)?;
            println!("Deleted category: {}", cat.name);
        }
    }

    Ok(())
}
