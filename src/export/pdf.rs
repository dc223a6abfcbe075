//! PDF report writer
//!
//! Produces a landscape A4 document: a bold title, a short statistics
//! summary, then a ruled table of the rows, paginated with the header
//! repeated on every page. The document carries no timestamps or random
//! identifiers, so the same input always yields the same bytes.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::error::{InventoryError, InventoryResult};
use crate::reports::{InventoryStats, ReportRow};

const PAGE_WIDTH: i64 = 842;
const PAGE_HEIGHT: i64 = 595;
const MARGIN: i64 = 40;
const ROW_HEIGHT: i64 = 16;
const BOTTOM_LIMIT: i64 = 50;
const FOOTER_Y: i64 = 30;

/// Column layout: header label, x position, cell width in characters
const COLUMNS: &[(&str, i64, usize)] = &[
    ("UID", 40, 7),
    ("Category", 95, 22),
    ("Name", 230, 28),
    ("Description", 400, 40),
    ("Date", 640, 10),
    ("Status", 730, 11),
];

/// Rows that fit on the first page, below the title and summary
const ROWS_FIRST_PAGE: usize = 27;

/// Rows that fit on each continuation page
const ROWS_PER_PAGE: usize = 31;

/// Render the report as a PDF document
pub fn render_pdf(rows: &[ReportRow], stats: &InventoryStats) -> InventoryResult<Vec<u8>> {
    let chunks = paginate(rows);
    let page_count = chunks.len();

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_regular,
            "F2" => font_bold,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(page_count);
    for (index, chunk) in chunks.iter().enumerate() {
        let operations = render_page(chunk, stats, index, page_count);
        let encoded = Content { operations }
            .encode()
            .map_err(|e| InventoryError::Export(format!("PDF generation failed: {}", e)))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count as i64,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                PAGE_WIDTH.into(),
                PAGE_HEIGHT.into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| InventoryError::Export(format!("PDF generation failed: {}", e)))?;
    Ok(bytes)
}

/// Split rows into per-page chunks. Always at least one page, even empty.
fn paginate(rows: &[ReportRow]) -> Vec<&[ReportRow]> {
    let first_len = rows.len().min(ROWS_FIRST_PAGE);
    let mut chunks = vec![&rows[..first_len]];
    let mut rest = &rows[first_len..];
    while !rest.is_empty() {
        let len = rest.len().min(ROWS_PER_PAGE);
        chunks.push(&rest[..len]);
        rest = &rest[len..];
    }
    chunks
}

fn render_page(
    rows: &[ReportRow],
    stats: &InventoryStats,
    page_index: usize,
    page_count: usize,
) -> Vec<Operation> {
    let mut ops = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    if page_index == 0 {
        text(&mut ops, "F2", 16, MARGIN, y, "Inventory report");
        y -= 25;

        text(&mut ops, "F1", 10, MARGIN, y, &format!("Items: {}", stats.total));
        y -= 14;

        let by_status: Vec<String> = stats
            .by_status
            .iter()
            .map(|(status, count)| format!("{} {}", status, count))
            .collect();
        let summary = if by_status.is_empty() {
            "By status: none".to_string()
        } else {
            format!("By status: {}", by_status.join(", "))
        };
        text(&mut ops, "F1", 10, MARGIN, y, &summary);
        y -= 26;
    }

    // Table header with rules above and below
    hline(&mut ops, y + 8);
    for &(label, x, _) in COLUMNS {
        text(&mut ops, "F2", 9, x, y - 4, label);
    }
    hline(&mut ops, y - 10);
    y -= 24;

    if rows.is_empty() {
        text(&mut ops, "F1", 10, MARGIN, y, "No items matched the filter.");
    }

    for row in rows {
        let date = row.acquired_on.format("%Y-%m-%d").to_string();
        let cells = [
            row.uid.to_string(),
            row.category.clone(),
            row.name.clone(),
            row.description.clone(),
            date,
            row.status.to_string(),
        ];
        for (&(_, x, width), cell) in COLUMNS.iter().zip(cells.iter()) {
            text(&mut ops, "F1", 9, x, y, &clip(cell, width));
        }
        y -= ROW_HEIGHT;
        debug_assert!(y >= BOTTOM_LIMIT - ROW_HEIGHT);
    }
    hline(&mut ops, y + 10);

    text(&mut ops, "F1", 8, MARGIN, FOOTER_Y, "inventory report");
    let page_note = format!("Page {} of {}", page_index + 1, page_count);
    text(
        &mut ops,
        "F1",
        8,
        PAGE_WIDTH - MARGIN - 60,
        FOOTER_Y,
        &page_note,
    );

    ops
}

/// One line of text at an absolute position
fn text(ops: &mut Vec<Operation>, font: &str, size: i64, x: i64, y: i64, content: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(latin1(content), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// A horizontal rule across the content area
fn hline(ops: &mut Vec<Operation>, y: i64) {
    ops.push(Operation::new("m", vec![MARGIN.into(), y.into()]));
    ops.push(Operation::new(
        "l",
        vec![(PAGE_WIDTH - MARGIN).into(), y.into()],
    ));
    ops.push(Operation::new("S", vec![]));
}

/// Encode text for the standard Helvetica font. Characters outside
/// Latin-1 become '?'.
fn latin1(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| if (c as u32) <= 0xFF { c as u8 } else { b'?' })
        .collect()
}

/// Truncate a cell to its column width, marking the cut with an ellipsis
fn clip(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemStatus, ItemUid};
    use chrono::NaiveDate;

    fn row(uid: u32) -> ReportRow {
        ReportRow {
            uid: ItemUid::new(uid),
            name: format!("Item {}", uid),
            category: "Computers".into(),
            description: "Test".into(),
            acquired_on: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: ItemStatus::Active,
        }
    }

    #[test]
    fn test_renders_valid_pdf_header() {
        let rows = vec![row(1001)];
        let stats = InventoryStats::aggregate(&rows);
        let bytes = render_pdf(&rows, &stats).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert!(bytes.windows(5).any(|w| w == b"%%EOF"));
    }

    #[test]
    fn test_empty_report_still_renders() {
        let stats = InventoryStats::aggregate(&[]);
        let bytes = render_pdf(&[], &stats).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_deterministic_output() {
        let rows = vec![row(1001), row(1002)];
        let stats = InventoryStats::aggregate(&rows);
        let first = render_pdf(&rows, &stats).unwrap();
        let second = render_pdf(&rows, &stats).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pagination_splits_long_reports() {
        let rows: Vec<ReportRow> = (1001..1101).map(row).collect();
        assert_eq!(paginate(&rows).len(), 4);

        let short: Vec<ReportRow> = (1001..1011).map(row).collect();
        assert_eq!(paginate(&short).len(), 1);

        assert_eq!(paginate(&[]).len(), 1);
    }

    #[test]
    fn test_clip() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("a very long description here", 10), "a very ...");
    }

    #[test]
    fn test_latin1_replaces_unmappable() {
        assert_eq!(latin1("abc"), b"abc".to_vec());
        assert_eq!(latin1("caf\u{e9}"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(latin1("\u{4e2d}"), vec![b'?']);
    }
}
