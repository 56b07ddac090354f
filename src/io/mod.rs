// src/io/mod.rs

pub mod demand;
pub mod loader;
pub mod reporting;
pub mod stock_table;

pub use demand::extract_demand;
pub use loader::PlanningSession;
pub use reporting::{render_table, write_report_csv};
pub use stock_table::{parse_stock_table, StockTableParser};
