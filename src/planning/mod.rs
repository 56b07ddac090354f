// src/planning/mod.rs

pub mod allocator;
pub mod config;
pub mod report;

pub use allocator::{allocate, PickAllocator};
pub use config::{PlannerConfig, StockColumns};
pub use report::build_report;
