// src/io/loader.rs

use crate::error::{FormatError, LoadError, PlanResult};
use crate::io::demand::extract_demand;
use crate::io::stock_table::StockTableParser;
use crate::model::inventory::StockTable;
use crate::model::pick::PickReportRow;
use crate::planning::allocator::PickAllocator;
use crate::planning::config::PlannerConfig;
use crate::planning::report::build_report;
use std::path::Path;
use tracing::{info, warn};

/// Holds the most recently loaded stock report between planning runs.
///
/// A failed load never replaces or partially updates the table already held.
#[derive(Debug, Clone, Default)]
pub struct PlanningSession {
    parser: StockTableParser,
    allocator: PickAllocator,
    stock: StockTable,
}

impl PlanningSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        Self {
            parser: StockTableParser::with_columns(config.columns.clone()),
            allocator: PickAllocator::with_config(config),
            stock: StockTable::new(),
        }
    }

    pub fn stock(&self) -> &StockTable {
        &self.stock
    }

    pub fn load_stock_text(&mut self, csv_text: &str) -> Result<&StockTable, FormatError> {
        match self.parser.parse(csv_text) {
            Ok(table) => {
                self.stock = table;
                Ok(&self.stock)
            }
            Err(err) => {
                warn!(error = %err, "stock load failed, keeping previous report");
                Err(err)
            }
        }
    }

    pub fn load_stock_bytes(&mut self, bytes: &[u8]) -> Result<&StockTable, FormatError> {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.load_stock_text(text),
            Err(err) => {
                warn!(error = %err, "stock file is not UTF-8, keeping previous report");
                Err(err.into())
            }
        }
    }

    pub fn load_stock_file<P: AsRef<Path>>(&mut self, path: P) -> PlanResult<&StockTable> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| {
            warn!(path = %path.display(), error = %source, "cannot read stock file, keeping previous report");
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
        info!(path = %path.display(), bytes = bytes.len(), "loading stock file");
        Ok(self.load_stock_bytes(&bytes)?)
    }

    /// Plans picks for the demand in `log_text` against the loaded stock.
    pub fn plan(&self, log_text: &str) -> Vec<PickReportRow> {
        let demand = extract_demand(log_text);
        let tasks = self.allocator.allocate(&demand, &self.stock);
        build_report(&demand, &self.stock, &tasks)
    }
}
