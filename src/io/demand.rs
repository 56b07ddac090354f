// src/io/demand.rs

use crate::model::inventory::DemandMap;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info};

/// Matches lines such as `Pick failed for ABC123 (x5)`, in any letter case.
static DEMAND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)for\s+([0-9A-Za-z_]+)\s+\(x([0-9]+)\)").unwrap());

/// Collects the quantity demanded per SKU from free-form log text.
///
/// Only the first mention on a line is used. Lines without a mention are
/// ignored, and repeated mentions of a SKU across lines are summed.
pub fn extract_demand(log_text: &str) -> DemandMap {
    let mut demand = DemandMap::new();
    let mut mentions = 0usize;

    for (line_no, line) in log_text.lines().enumerate() {
        let Some(caps) = DEMAND_RE.captures(line) else {
            continue;
        };
        let sku = &caps[1];
        let Ok(qty) = caps[2].parse::<u32>() else {
            debug!(line = line_no + 1, sku, "quantity out of range, ignoring");
            continue;
        };

        let entry = demand.entry(sku.to_string()).or_insert(0);
        *entry = entry.saturating_add(qty);
        mentions += 1;
    }

    info!(mentions, skus = demand.len(), "demand extracted from log");
    demand
}
