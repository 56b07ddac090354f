// src/planning/config.rs

/// Header names looked up in the stock report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockColumns {
    pub sku: String,
    pub location: String,
    pub quantity: String,
}

impl Default for StockColumns {
    fn default() -> Self {
        Self {
            sku: "Item Code".to_string(),
            location: "From Location".to_string(),
            quantity: "From Quantity".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub columns: StockColumns,
    /// Shown as the only pick for a SKU with no stock anywhere.
    pub no_stock_marker: String,
    /// Followed by the unmet quantity, e.g. `❌ Shortfall: 4`.
    pub shortfall_prefix: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            columns: StockColumns::default(),
            no_stock_marker: "—".to_string(),
            shortfall_prefix: "❌ Shortfall: ".to_string(),
        }
    }
}

impl PlannerConfig {
    pub fn shortfall_marker(&self, missing: u32) -> String {
        format!("{}{}", self.shortfall_prefix, missing)
    }
}
