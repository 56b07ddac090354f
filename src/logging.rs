// src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber for the binary.
///
/// Reads `RUST_LOG` (e.g. `RUST_LOG=replen_picker=debug`), falling back to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Debug-level subscriber for tests. Safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
