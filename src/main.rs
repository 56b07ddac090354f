use clap::Parser;
use replen_picker::io::reporting;
use replen_picker::{logging, PlanningSession};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;

/// Plan replenishment picks from a stock report and an error log.
#[derive(Debug, Parser)]
#[command(name = "replen-picker", version)]
struct Cli {
    /// Stock-location report (CSV with Item Code, From Location, From Quantity).
    #[arg(long)]
    stock: PathBuf,

    /// Error log naming short SKUs, e.g. "for ABC123 (x5)". Use "-" for stdin.
    #[arg(long)]
    log: PathBuf,

    /// Also write the report as CSV to this path.
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    // 1. LOAD STOCK
    let mut session = PlanningSession::new();
    if let Err(e) = session.load_stock_file(&cli.stock) {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    // 2. READ DEMAND LOG
    let log_text = match read_log(&cli.log) {
        Ok(text) => text,
        Err(e) => {
            error!(path = %cli.log.display(), "cannot read log: {e}");
            return ExitCode::FAILURE;
        }
    };

    // 3. PLAN
    let rows = session.plan(&log_text);
    if rows.is_empty() {
        println!("No demand found in log.");
        return ExitCode::SUCCESS;
    }

    println!("=== Next Days ===");
    print!("{}", reporting::render_table(&rows));

    // 4. EXPORT
    if let Some(path) = &cli.export {
        if let Err(e) = reporting::write_report_csv(path, &rows) {
            error!("{e}");
            return ExitCode::FAILURE;
        }
        println!("Report written to {}", path.display());
    }

    ExitCode::SUCCESS
}

fn read_log(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}
