//! Sales-Report binary: runs the demo pipeline against `sales_data.db`
//! in the current directory.

use anyhow::Result;
use sales_report::report::{run, ReportConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sales_report=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run(&ReportConfig::default())?;
    Ok(())
}
