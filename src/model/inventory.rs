// src/model/inventory.rs

use serde::Serialize;
use std::collections::BTreeMap;

/// On-hand stock for one SKU, broken down by location.
///
/// `total` always equals the sum of the per-location quantities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StockAggregate {
    total: u32,
    locations: BTreeMap<String, u32>,
}

impl StockAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units at `location`, creating the location entry if needed.
    pub fn add(&mut self, location: &str, quantity: u32) {
        let slot = self.locations.entry(location.to_string()).or_insert(0);
        *slot = slot.saturating_add(quantity);
        self.total = self.total.saturating_add(quantity);
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn locations(&self) -> &BTreeMap<String, u32> {
        &self.locations
    }
}

/// Stock keyed by SKU, as produced by one parsed stock report.
pub type StockTable = BTreeMap<String, StockAggregate>;

/// Required quantity per SKU, summed over every mention in the log.
pub type DemandMap = BTreeMap<String, u32>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_total_in_step() {
        let mut stock = StockAggregate::new();
        stock.add("L1", 3);
        stock.add("L2", 5);
        stock.add("L1", 4);

        assert_eq!(stock.total(), 12);
        assert_eq!(stock.locations().get("L1"), Some(&7));
        assert_eq!(stock.locations().get("L2"), Some(&5));
        assert_eq!(stock.locations().get("L3"), None);
        assert_eq!(stock.locations().values().sum::<u32>(), stock.total());
    }

    #[test]
    fn test_zero_quantity_still_records_location() {
        let mut stock = StockAggregate::new();
        stock.add("BULK", 0);

        assert_eq!(stock.total(), 0);
        assert_eq!(stock.locations().get("BULK"), Some(&0));
    }
}
