//! CSV report writer

use crate::error::{InventoryError, InventoryResult};
use crate::reports::ReportRow;

const HEADER: &[&str] = &["uid", "category", "name", "description", "acquired_on", "status"];

/// Render the report as CSV, one row per item plus a header line
pub fn render_csv(rows: &[ReportRow]) -> InventoryResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(HEADER)
        .map_err(|e| InventoryError::Export(format!("CSV generation failed: {}", e)))?;

    for row in rows {
        writer
            .write_record(&[
                row.uid.to_string(),
                row.category.clone(),
                row.name.clone(),
                row.description.clone(),
                row.acquired_on.format("%Y-%m-%d").to_string(),
                row.status.to_string(),
            ])
            .map_err(|e| InventoryError::Export(format!("CSV generation failed: {}", e)))?;
    }

    writer
        .into_inner()
        .map_err(|e| InventoryError::Export(format!("CSV generation failed: {}", e)))
}
