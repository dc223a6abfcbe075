//! Report export
//!
//! Renders the filtered item table plus summary statistics as a PDF or CSV
//! document. Rendering happens entirely in memory; the bytes are then
//! written atomically so a failed export never leaves a partial file at the
//! destination.

pub mod csv;
pub mod pdf;

pub use self::csv::render_csv;
pub use self::pdf::render_pdf;

use std::path::Path;
use std::str::FromStr;

use crate::error::{InventoryError, InventoryResult};
use crate::reports::{InventoryStats, ReportRow};
use crate::storage::file_io::write_bytes_atomic;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Csv,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "csv" => Ok(Self::Csv),
            other => Err(format!("Unknown export format: {}", other)),
        }
    }
}

/// Render the report in the requested format
pub fn render_report(
    rows: &[ReportRow],
    stats: &InventoryStats,
    format: ExportFormat,
) -> InventoryResult<Vec<u8>> {
    match format {
        ExportFormat::Pdf => render_pdf(rows, stats),
        ExportFormat::Csv => render_csv(rows),
    }
}

/// Render the report and write it to the destination path
///
/// Single attempt, synchronous. An unwritable destination yields an error
/// and leaves nothing behind.
pub fn export_report(
    rows: &[ReportRow],
    stats: &InventoryStats,
    format: ExportFormat,
    destination: &Path,
) -> InventoryResult<()> {
    let bytes = render_report(rows, stats, format)?;

    write_bytes_atomic(destination, &bytes).map_err(|e| {
        InventoryError::Export(format!(
            "Could not write report to {}: {}. \
             Choose a writable destination and try again.",
            destination.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemStatus, ItemUid};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_rows() -> Vec<ReportRow> {
        vec![
            ReportRow {
                uid: ItemUid::new(1001),
                name: "Dell OptiPlex 7090".into(),
                category: "Computers".into(),
                description: "i5, 16GB".into(),
                acquired_on: NaiveDate::from_ymd_opt(2024, 2, 11).unwrap(),
                status: ItemStatus::Active,
            },
            ReportRow {
                uid: ItemUid::new(1004),
                name: "Ergonomic chair".into(),
                category: "Furniture".into(),
                description: "Black, mesh".into(),
                acquired_on: NaiveDate::from_ymd_opt(2022, 5, 30).unwrap(),
                status: ItemStatus::WrittenOff,
            },
        ]
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xlsx".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_writes_file() {
        let rows = sample_rows();
        let stats = InventoryStats::aggregate(&rows);
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("report.pdf");

        export_report(&rows, &stats, ExportFormat::Pdf, &dest).unwrap();

        let bytes = std::fs::read(&dest).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_twice_is_byte_identical() {
        let rows = sample_rows();
        let stats = InventoryStats::aggregate(&rows);
        let temp_dir = TempDir::new().unwrap();

        for format in [ExportFormat::Pdf, ExportFormat::Csv] {
            let first = temp_dir.path().join(format!("a.{}", format.extension()));
            let second = temp_dir.path().join(format!("b.{}", format.extension()));

            export_report(&rows, &stats, format, &first).unwrap();
            export_report(&rows, &stats, format, &second).unwrap();

            assert_eq!(
                std::fs::read(&first).unwrap(),
                std::fs::read(&second).unwrap(),
                "{:?} export should be deterministic",
                format
            );
        }
    }

    #[test]
    fn test_unwritable_destination_leaves_no_partial_file() {
        let rows = sample_rows();
        let stats = InventoryStats::aggregate(&rows);
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("missing-dir").join("report.pdf");

        let err = export_report(&rows, &stats, ExportFormat::Pdf, &dest).unwrap_err();
        assert!(matches!(err, InventoryError::Export(_)));
        assert!(!dest.exists());
        // No stray temp files either
        let leftovers: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();
        assert!(leftovers.is_empty());
    }
}
