//! # Sales-Report: Embedded Sales Analytics Demo
//!
//! Sales-Report seeds a local SQLite store with a fixed sample of sales
//! line items, runs four read-only aggregate queries over it, prints each
//! result as an aligned table, and renders the same aggregates as SVG
//! charts.
//!
//! The store file accumulates across runs: the schema is created once and
//! the sample rows are appended on every run, so all totals double when
//! the demo is re-run against the same file.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use sales_report::report::{run, ReportConfig};
//!
//! let summary = run(&ReportConfig::default())?;
//! println!("Grand total: {:?}", summary.total_revenue);
//! # Ok::<(), sales_report::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod chart;
pub mod error;
pub mod frame;
pub mod record;
pub mod report;
pub mod store;

pub use error::{Error, Result};
