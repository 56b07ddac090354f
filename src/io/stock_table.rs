// src/io/stock_table.rs

use crate::error::FormatError;
use crate::model::inventory::{StockAggregate, StockTable};
use crate::planning::config::StockColumns;
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info, warn};

/// Reads a stock-location report into per-SKU aggregates.
///
/// Fields are split on every comma: quoting is NOT interpreted, so a quoted cell
/// containing a comma is split in two. Each header and cell has one pair of
/// surrounding double quotes and any surrounding whitespace removed.
///
/// Rows missing a SKU or location, or whose quantity is not a number, are
/// skipped without error. An empty quantity cell counts as 0.
#[derive(Debug, Clone, Default)]
pub struct StockTableParser {
    columns: StockColumns,
}

impl StockTableParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_columns(columns: StockColumns) -> Self {
        Self { columns }
    }

    pub fn parse(&self, csv_text: &str) -> Result<StockTable, FormatError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(csv_text.as_bytes());

        let mut table = StockTable::new();
        let mut records = reader.records();

        // First non-blank line is the header.
        let headers: Vec<String> = loop {
            match records.next() {
                None => return Ok(table),
                Some(record) => {
                    let record = record?;
                    if !is_blank(&record) {
                        break record.iter().map(clean_cell).collect();
                    }
                }
            }
        };

        let position = |name: &str| {
            let idx = headers.iter().position(|h| h == name);
            if idx.is_none() {
                warn!(column = name, "stock report is missing a required column");
            }
            idx
        };
        let sku_idx = position(self.columns.sku.as_str());
        let location_idx = position(self.columns.location.as_str());
        let quantity_idx = position(self.columns.quantity.as_str());

        let mut rows_read = 0usize;
        let mut rows_accepted = 0usize;

        for record in records {
            let record = record?;
            if is_blank(&record) {
                continue;
            }
            rows_read += 1;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            let sku = field(&record, sku_idx);
            let location = field(&record, location_idx);
            let raw_qty = field(&record, quantity_idx);

            if sku.is_empty() || location.is_empty() {
                debug!(line, "skipping row without SKU or location");
                continue;
            }
            let Some(qty) = parse_quantity(&raw_qty) else {
                debug!(line, quantity = %raw_qty, "skipping row with non-numeric quantity");
                continue;
            };

            table
                .entry(sku)
                .or_insert_with(StockAggregate::new)
                .add(&location, qty);
            rows_accepted += 1;
        }

        info!(
            rows_read,
            rows_accepted,
            skus = table.len(),
            "stock report parsed"
        );
        Ok(table)
    }
}

/// Parses with the default column names.
pub fn parse_stock_table(csv_text: &str) -> Result<StockTable, FormatError> {
    StockTableParser::new().parse(csv_text)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|cell| cell.trim().is_empty())
}

fn field(record: &StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| record.get(i))
        .map(clean_cell)
        .unwrap_or_default()
}

fn clean_cell(cell: &str) -> String {
    let cell = cell.trim();
    let cell = cell.strip_prefix('"').unwrap_or(cell);
    let cell = cell.strip_suffix('"').unwrap_or(cell);
    cell.trim().to_string()
}

/// Leading base-10 digits, with an optional `+`, as the stock export writes them.
/// Trailing junk after the digits is ignored (`"12 pcs"` is 12); negatives and
/// values with no leading digits are rejected.
fn parse_quantity(raw: &str) -> Option<u32> {
    if raw.is_empty() {
        return Some(0);
    }
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}
