// src/planning/allocator.rs

use crate::model::inventory::{DemandMap, StockAggregate, StockTable};
use crate::model::location::LocationAddress;
use crate::model::pick::PickTask;
use crate::planning::config::PlannerConfig;
use tracing::{debug, info};

/// Turns demand plus stock into a walk-ordered list of pick tasks.
///
/// Allocation never fails: a SKU with no stock gets a single "no stock" marker,
/// and a SKU with too little stock gets its real picks followed by a shortfall marker.
#[derive(Debug, Clone, Default)]
pub struct PickAllocator {
    config: PlannerConfig,
}

impl PickAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn allocate(&self, demand: &DemandMap, stock: &StockTable) -> Vec<PickTask> {
        let empty = StockAggregate::new();
        let mut tasks = Vec::new();
        let mut shortfalls = 0usize;

        // =================================================================
        // PHASE 1: per-SKU greedy allocation
        // =================================================================
        for (sku, &required) in demand {
            let available = stock.get(sku).unwrap_or(&empty);
            let (picks, short) = self.allocate_sku(required, available);

            if short {
                shortfalls += 1;
            }
            debug!(sku = %sku, required, available = available.total(), lines = picks.len(), "allocated");

            let multi_location = picks.len() > 1;
            tasks.extend(picks.into_iter().map(|(location, quantity)| PickTask {
                sku: sku.clone(),
                location,
                quantity,
                multi_location,
            }));
        }

        // =================================================================
        // PHASE 2: global walk order across all SKUs
        // =================================================================
        // Stable: tasks at the same location keep their per-SKU order.
        tasks.sort_by_cached_key(|task| LocationAddress::parse(&task.location));

        info!(
            skus = demand.len(),
            tasks = tasks.len(),
            shortfalls,
            "pick plan allocated"
        );
        tasks
    }

    /// Picks for one SKU as `(location, quantity)` pairs, nearest bin first,
    /// and whether a shortfall marker was appended.
    ///
    /// Every location is walked in order until demand is met, including ones
    /// holding 0 (they yield a 0-quantity pick).
    fn allocate_sku(
        &self,
        required: u32,
        available: &StockAggregate,
    ) -> (Vec<(String, u32)>, bool) {
        if available.total() == 0 {
            return (vec![(self.config.no_stock_marker.clone(), 0)], false);
        }

        let mut locations: Vec<(LocationAddress, &String, u32)> = available
            .locations()
            .iter()
            .map(|(location, &qty)| (LocationAddress::parse(location), location, qty))
            .collect();
        locations.sort_by(|a, b| a.0.cmp(&b.0));

        let mut picks = Vec::new();
        let mut to_pick = required;

        for (_, location, qty) in locations {
            if to_pick == 0 {
                break;
            }
            let pick_qty = qty.min(to_pick);
            picks.push((location.clone(), pick_qty));
            to_pick -= pick_qty;
        }

        let short = to_pick > 0;
        if short {
            picks.push((self.config.shortfall_marker(to_pick), 0));
        }

        (picks, short)
    }
}

/// Allocates with the default markers.
pub fn allocate(demand: &DemandMap, stock: &StockTable) -> Vec<PickTask> {
    PickAllocator::new().allocate(demand, stock)
}
