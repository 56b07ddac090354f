// src/model/mod.rs

pub mod inventory;
pub mod location;
pub mod pick;

pub use inventory::{DemandMap, StockAggregate, StockTable};
pub use location::{compare_locations, LocationAddress};
pub use pick::{PickReportRow, PickTask};
