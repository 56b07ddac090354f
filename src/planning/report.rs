// src/planning/report.rs

use crate::model::inventory::{DemandMap, StockTable};
use crate::model::pick::{PickReportRow, PickTask};
use std::collections::HashMap;

/// Groups walk-ordered tasks back into one row per demanded SKU.
///
/// Rows appear in the order their SKU is first reached on the walk, and each
/// row keeps its picks in walk order. A demanded SKU that produced no task at all
/// (zero demand against existing stock) is appended at the end with no picks.
pub fn build_report(
    demand: &DemandMap,
    stock: &StockTable,
    tasks: &[PickTask],
) -> Vec<PickReportRow> {
    let mut rows: Vec<PickReportRow> = Vec::with_capacity(demand.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(demand.len());

    for task in tasks {
        if !demand.contains_key(&task.sku) {
            continue;
        }
        let i = *index.entry(task.sku.as_str()).or_insert_with(|| {
            rows.push(new_row(&task.sku, demand, stock));
            rows.len() - 1
        });
        rows[i].picks.push(task.display());
    }

    for sku in demand.keys() {
        if !index.contains_key(sku.as_str()) {
            rows.push(new_row(sku, demand, stock));
        }
    }

    rows
}

fn new_row(sku: &str, demand: &DemandMap, stock: &StockTable) -> PickReportRow {
    let required = demand.get(sku).copied().unwrap_or(0);
    let available = stock.get(sku).map(|s| s.total()).unwrap_or(0);
    PickReportRow {
        sku: sku.to_string(),
        required,
        available,
        sufficient: available >= required,
        picks: Vec::new(),
    }
}
