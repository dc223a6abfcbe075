//! Item CLI commands

use clap::Subcommand;

use crate::auth::session::SessionStore;
use crate::display::item::{format_item_details, format_item_list};
use crate::error::{InventoryError, InventoryResult};
use crate::models::{ItemStatus, ItemUid};
use crate::reports::build_rows;
use crate::services::item::ItemUpdate;
use crate::services::{CategoryService, ItemService};
use crate::storage::Storage;

use super::parse_date;

/// Item subcommands
#[derive(Subcommand)]
pub enum ItemCommands {
    /// Add a new item
    Add {
        /// Item name
        name: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Acquisition date (YYYY-MM-DD), defaults to today
        #[arg(short = 'a', long = "date")]
        date: Option<String>,
        /// Explicit asset tag; the next free one is assigned by default
        #[arg(long)]
        uid: Option<u32>,
    },

    /// List all items
    List,

    /// Show item details
    Show {
        /// Asset tag
        uid: u32,
    },

    /// Edit an item
    Edit {
        /// Asset tag
        uid: u32,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// Move to another category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
        /// New acquisition date (YYYY-MM-DD)
        #[arg(short = 'a', long = "date")]
        date: Option<String>,
        /// New status (active, written-off, other)
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Mark an item as written off
    #[command(name = "write-off")]
    WriteOff {
        /// Asset tag
        uid: u32,
    },

    /// Delete an item permanently
    Delete {
        /// Asset tag
        uid: u32,
    },
}

/// Handle an item command
pub fn handle_item_command(
    storage: &Storage,
    sessions: &SessionStore,
    cmd: ItemCommands,
) -> InventoryResult<()> {
    let session = sessions.require()?;
    let items = ItemService::new(storage);
    let categories = CategoryService::new(storage);

    match cmd {
        ItemCommands::Add {
            name,
            category,
            description,
            date,
            uid,
        } => {
            let cat = categories
                .find(&category)?
                .ok_or_else(|| InventoryError::category_not_found(&category))?;

            let acquired_on = match date {
                Some(date) => parse_date(&date)?,
                None => chrono::Utc::now().date_naive(),
            };

            let item = items.create(
                &session,
                uid.map(ItemUid::new),
                cat.id,
                &name,
                &description,
                acquired_on,
            )?;

            println!("Added item #{}: {}", item.uid, item.name);
            println!("  Category: {}", cat.name);
            println!("  Acquired: {}", item.acquired_on.format("%Y-%m-%d"));
        }

        ItemCommands::List => {
            let all = items.list()?;
            let category_list = categories.list()?;
            print!("{}", format_item_list(&build_rows(&all, &category_list)));
        }

        ItemCommands::Show { uid } => {
            let uid = ItemUid::new(uid);
            let item = items
                .get(uid)?
                .ok_or_else(|| InventoryError::item_not_found(uid.to_string()))?;
            let category_list = categories.list()?;
            let rows = build_rows(std::slice::from_ref(&item), &category_list);
            print!("{}", format_item_details(&rows[0]));
        }

        ItemCommands::Edit {
            uid,
            name,
            description,
            category,
            date,
            status,
        } => {
            if name.is_none()
                && description.is_none()
                && category.is_none()
                && date.is_none()
                && status.is_none()
            {
                println!(
                    "No changes specified. Use --name, --description, --category, \
                     --date, or --status."
                );
                return Ok(());
            }

            let category_id = match category {
                Some(identifier) => Some(
                    categories
                        .find(&identifier)?
                        .ok_or_else(|| InventoryError::category_not_found(&identifier))?
                        .id,
                ),
                None => None,
            };

            let acquired_on = date.as_deref().map(parse_date).transpose()?;
            let status = status
                .as_deref()
                .map(|s| s.parse::<ItemStatus>().map_err(InventoryError::Validation))
                .transpose()?;

            let updated = items.update(
                &session,
                ItemUid::new(uid),
                ItemUpdate {
                    name: name.as_deref(),
                    description: description.as_deref(),
                    category_id,
                    acquired_on,
                    status,
                },
            )?;
            println!("Updated item #{}: {}", updated.uid, updated.name);
        }

        ItemCommands::WriteOff { uid } => {
            let item = items.write_off(&session, ItemUid::new(uid))?;
            println!("Wrote off item #{}: {}", item.uid, item.name);
        }

        ItemCommands::Delete { uid } => {
            let uid = ItemUid::new(uid);
            let item = items
                .get(uid)?
                .ok_or_else(|| InventoryError::item_not_found(uid.to_string()))?;
            items.delete(&session, uid)?;
            println!("Deleted item #{}: {}", uid, item.name);
        }
    }

    Ok(())
}
