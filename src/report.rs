//! The report pipeline
//!
//! One run is a fixed sequence: open the store, append the sample rows,
//! run the four aggregates, print each one under its label, render the
//! charts. The store file is never reset, so every aggregate doubles when
//! the pipeline runs twice against the same path.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::chart::{self, GREEN, ORANGE, SKY_BLUE};
use crate::frame::Frame;
use crate::store::SalesStore;
use crate::Result;

/// Revenue-by-product bar chart file name.
pub const REVENUE_BAR_FILE: &str = "sales_revenue_bar.svg";
/// Quantity-sold bar chart file name.
pub const QUANTITY_BAR_FILE: &str = "sales_quantity_bar.svg";
/// Average-price bar chart file name.
pub const AVG_PRICE_BAR_FILE: &str = "avg_price_bar.svg";
/// Revenue-share pie chart file name.
pub const REVENUE_PIE_FILE: &str = "revenue_share_pie.svg";

/// Where the pipeline reads and writes.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Path of the SQLite store file (created on first run).
    pub db_path: PathBuf,
    /// Directory the chart files are written into (created if missing).
    pub chart_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("sales_data.db"),
            chart_dir: PathBuf::from("."),
        }
    }
}

/// Everything one run produced, for callers and tests.
#[derive(Debug)]
pub struct ReportSummary {
    /// Total quantity and revenue per product.
    pub totals_by_product: Frame,
    /// Average unit price per product.
    pub average_prices: Frame,
    /// The product with the largest summed quantity.
    pub top_seller: Frame,
    /// Grand total revenue (`None` only if the table were empty).
    pub total_revenue: Option<f64>,
    /// The four chart files, in render order.
    pub chart_paths: [PathBuf; 4],
}

/// Run the whole pipeline once.
///
/// # Errors
/// Returns error if the store cannot be opened or written, a query
/// fails, or a chart cannot be rendered. Nothing is retried; partial
/// output (committed rows, already-written charts) is left in place.
pub fn run(config: &ReportConfig) -> Result<ReportSummary> {
    let mut store = SalesStore::open(&config.db_path)?;
    let inserted = store.seed_samples()?;
    info!(
        rows = inserted,
        db = %config.db_path.display(),
        "seeded sample sales"
    );

    let totals_by_product = store.totals_by_product()?;
    println!("\nTotal Quantity and Revenue by Product:\n{totals_by_product}");

    let average_prices = store.average_price_by_product()?;
    println!("\nAverage Price per Product:\n{average_prices}");

    let top_seller = store.top_seller()?;
    println!("\nTop-Selling Product by Quantity:\n{top_seller}");

    let total_revenue = store.total_revenue()?;
    println!(
        "\nTotal Sales Revenue:\n{}",
        total_revenue.map_or_else(|| "NULL".to_string(), |v| format!("{v:.2}"))
    );

    let products = totals_by_product.strings("product")?;
    let revenues = totals_by_product.floats("revenue")?;
    let quantities = totals_by_product.floats("total_qty")?;
    let avg_products = average_prices.strings("product")?;
    let avg_prices = average_prices.floats("avg_price")?;

    fs::create_dir_all(&config.chart_dir)?;
    let chart_paths = [
        config.chart_dir.join(REVENUE_BAR_FILE),
        config.chart_dir.join(QUANTITY_BAR_FILE),
        config.chart_dir.join(AVG_PRICE_BAR_FILE),
        config.chart_dir.join(REVENUE_PIE_FILE),
    ];

    chart::render_bar_chart(
        &products,
        &revenues,
        "Revenue by Product",
        "Revenue",
        SKY_BLUE,
        &chart_paths[0],
    )?;
    chart::render_bar_chart(
        &products,
        &quantities,
        "Quantity Sold by Product",
        "Quantity Sold",
        ORANGE,
        &chart_paths[1],
    )?;
    chart::render_bar_chart(
        &avg_products,
        &avg_prices,
        "Average Price per Product",
        "Average Price",
        GREEN,
        &chart_paths[2],
    )?;
    chart::render_pie_chart(
        &products,
        &revenues,
        "Revenue Share by Product",
        &chart_paths[3],
    )?;

    for path in &chart_paths {
        info!(chart = %path.display(), "chart written");
    }

    Ok(ReportSummary {
        totals_by_product,
        average_prices,
        top_seller,
        total_revenue,
        chart_paths,
    })
}
