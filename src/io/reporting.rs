// src/io/reporting.rs

use crate::error::{LoadError, PlanResult};
use crate::model::pick::PickReportRow;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Flat CSV form of a report row; picks are joined into a single cell.
#[derive(Debug, Serialize)]
struct ExportRecord<'a> {
    sku: &'a str,
    required: u32,
    available: u32,
    sufficient: bool,
    picks: String,
}

/// Writes the pick report to a CSV file, one row per SKU in walk order.
///
/// # Arguments
/// * `file_path` - Destination (e.g., "picks/next_day.csv").
/// * `rows` - Output of the report builder.
pub fn write_report_csv<P: AsRef<Path>>(file_path: P, rows: &[PickReportRow]) -> PlanResult<()> {
    let path = file_path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(ExportRecord {
            sku: &row.sku,
            required: row.required,
            available: row.available,
            sufficient: row.sufficient,
            picks: row.picks.join(" | "),
        })?;
    }

    wtr.flush().map_err(|e| LoadError::Export(e.to_string()))?;

    info!(rows = rows.len(), path = %path.display(), "pick report exported");
    Ok(())
}

/// Renders the report as a plain-text table for a terminal.
///
/// Each pick gets its own line under the SKU; rows short on stock are
/// flagged with `!` in the first column.
pub fn render_table(rows: &[PickReportRow]) -> String {
    const HEADERS: [&str; 3] = ["SKU", "Quantity", "From Location"];

    let sku_width = rows
        .iter()
        .map(|r| r.sku.chars().count())
        .chain([HEADERS[0].len()])
        .max()
        .unwrap_or(0);
    let qty_width = rows
        .iter()
        .map(|r| r.required.to_string().len())
        .chain([HEADERS[1].len()])
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "  {:<sku_width$}  {:>qty_width$}  {}\n",
        HEADERS[0], HEADERS[1], HEADERS[2]
    );

    for row in rows {
        let flag = if row.sufficient { ' ' } else { '!' };
        let mut picks = row.picks.iter();
        let first = picks.next().map(String::as_str).unwrap_or("");
        out.push_str(&format!(
            "{flag} {:<sku_width$}  {:>qty_width$}  {first}\n",
            row.sku, row.required
        ));
        for pick in picks {
            out.push_str(&format!(
                "  {:<sku_width$}  {:>qty_width$}  {pick}\n",
                "", ""
            ));
        }
    }

    out
}
