// src/model/pick.rs

use serde::Serialize;

/// One line of the pick plan: take `quantity` of `sku` from `location`.
///
/// `location` may also hold a marker (no stock, shortfall) instead of a real place,
/// in which case `quantity` is 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickTask {
    pub sku: String,
    pub location: String,
    pub quantity: u32,
    /// Set on every task of a SKU whose demand is spread over more than one line.
    pub multi_location: bool,
}

impl PickTask {
    /// Text shown to the picker. Quantities are only spelled out when the SKU
    /// is split across locations; a single full pick shows the location alone.
    pub fn display(&self) -> String {
        if self.multi_location && self.quantity > 0 {
            format!("{} ({})", self.location, self.quantity)
        } else {
            self.location.clone()
        }
    }
}

/// Summary of one demanded SKU, in the order a picker walks the warehouse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickReportRow {
    pub sku: String,
    pub required: u32,
    pub available: u32,
    pub sufficient: bool,
    pub picks: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(location: &str, quantity: u32, multi_location: bool) -> PickTask {
        PickTask {
            sku: "X".to_string(),
            location: location.to_string(),
            quantity,
            multi_location,
        }
    }

    #[test]
    fn test_display_single_pick_is_bare() {
        assert_eq!(task("A1.C1.S1", 5, false).display(), "A1.C1.S1");
    }

    #[test]
    fn test_display_split_pick_shows_quantity() {
        assert_eq!(task("A1.C1.S1", 4, true).display(), "A1.C1.S1 (4)");
    }

    #[test]
    fn test_display_markers_are_bare() {
        assert_eq!(task("❌ Shortfall: 4", 0, true).display(), "❌ Shortfall: 4");
        assert_eq!(task("—", 0, false).display(), "—");
    }
}
