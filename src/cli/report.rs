//! Report CLI commands
//!
//! Shows filtered item tables with summary statistics, and exports the same
//! selection as a PDF or CSV file.

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::auth::session::SessionStore;
use crate::display::item::format_item_list;
use crate::display::report::format_report_summary;
use crate::error::{InventoryError, InventoryResult};
use crate::export::{export_report, ExportFormat};
use crate::models::ItemStatus;
use crate::reports::{build_rows, filter_items_owned, InventoryStats, ItemFilter};
use crate::services::{CategoryService, ItemService};
use crate::storage::Storage;

/// Filter criteria shared by `show` and `export`
#[derive(Args)]
pub struct FilterArgs {
    /// Only items in this category (name or ID)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only items acquired in this year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Only items with this status (active, written-off, other)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Case-insensitive text search over name and description
    #[arg(long)]
    pub search: Option<String>,
}

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show the filtered item table and summary statistics
    #[command(alias = "summary")]
    Show {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export the filtered report to a file
    Export {
        /// Destination path
        output: PathBuf,
        /// Export format (pdf or csv); inferred from the extension by default
        #[arg(short, long)]
        format: Option<String>,
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    sessions: &SessionStore,
    cmd: ReportCommands,
) -> InventoryResult<()> {
    sessions.require()?;

    match cmd {
        ReportCommands::Show { filter } => {
            let (rows, stats) = build_report(storage, &filter)?;
            print!("{}", format_item_list(&rows));
            println!();
            print!("{}", format_report_summary(&stats));
        }

        ReportCommands::Export {
            output,
            format,
            filter,
        } => {
            let format = resolve_format(format.as_deref(), &output)?;
            let (rows, stats) = build_report(storage, &filter)?;

            export_report(&rows, &stats, format, &output)?;
            println!(
                "Exported {} item(s) to {}",
                rows.len(),
                output.display()
            );
        }
    }

    Ok(())
}

/// Run the filter pipeline: select items, join category names, aggregate
fn build_report(
    storage: &Storage,
    args: &FilterArgs,
) -> InventoryResult<(Vec<crate::reports::ReportRow>, InventoryStats)> {
    let filter = resolve_filter(storage, args)?;

    let items = ItemService::new(storage).list()?;
    let categories = CategoryService::new(storage).list()?;

    let selected = filter_items_owned(&items, &filter);
    let rows = build_rows(&selected, &categories);
    let stats = InventoryStats::aggregate(&rows);

    Ok((rows, stats))
}

/// Turn CLI filter arguments into filter criteria
fn resolve_filter(storage: &Storage, args: &FilterArgs) -> InventoryResult<ItemFilter> {
    let category = match args.category.as_deref() {
        Some(identifier) => Some(
            CategoryService::new(storage)
                .find(identifier)?
                .ok_or_else(|| InventoryError::category_not_found(identifier))?
                .id,
        ),
        None => None,
    };

    let status = args
        .status
        .as_deref()
        .map(|s| s.parse::<ItemStatus>().map_err(InventoryError::Validation))
        .transpose()?;

    Ok(ItemFilter {
        category,
        year: args.year,
        status,
        text: args.search.clone(),
    })
}

/// Pick the export format from --format, falling back to the file extension
fn resolve_format(explicit: Option<&str>, output: &std::path::Path) -> InventoryResult<ExportFormat> {
    if let Some(name) = explicit {
        return name.parse().map_err(InventoryError::Validation);
    }

    match output.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.parse().map_err(InventoryError::Validation),
        None => Err(InventoryError::Validation(
            "Cannot infer export format: pass --format pdf or --format csv".into(),
        )),
    }
}
