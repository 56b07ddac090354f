// src/lib.rs

//! Replenishment pick planner.
//!
//! Takes a stock-location report (CSV) and a free-text error log naming SKUs
//! and quantities, and works out where to pick each SKU from, walking the
//! warehouse in bin order and flagging shortfalls.
//!
//! ```
//! let stock = "Item Code,From Location,From Quantity\nX,A1.C1.S1,4\nX,A1.C2.S1,10\n";
//! let rows = replen_picker::plan(stock, "Pick failed for X (x10)").unwrap();
//!
//! assert_eq!(rows[0].picks, vec!["A1.C1.S1 (4)", "A1.C2.S1 (6)"]);
//! ```

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod planning;

pub use error::{FormatError, LoadError, PlanResult};
pub use io::{extract_demand, parse_stock_table, PlanningSession, StockTableParser};
pub use model::{
    compare_locations, DemandMap, LocationAddress, PickReportRow, PickTask, StockAggregate,
    StockTable,
};
pub use planning::{allocate, build_report, PickAllocator, PlannerConfig, StockColumns};

/// One-shot planning run over two text inputs with the default configuration.
pub fn plan(csv_text: &str, log_text: &str) -> Result<Vec<PickReportRow>, FormatError> {
    let stock = parse_stock_table(csv_text)?;
    let demand = extract_demand(log_text);
    let tasks = allocate(&demand, &stock);
    Ok(build_report(&demand, &stock, &tasks))
}
