//! End-to-end pipeline tests
//!
//! Runs the full report against a scratch directory and checks the
//! observable outputs: aggregate values, chart files, and the accumulation
//! behavior across repeated runs over the same store file.

use sales_report::frame::Frame;
use sales_report::report::{
    run, ReportConfig, AVG_PRICE_BAR_FILE, QUANTITY_BAR_FILE, REVENUE_BAR_FILE, REVENUE_PIE_FILE,
};
use sales_report::store::SalesStore;

fn scratch_config(dir: &tempfile::TempDir) -> ReportConfig {
    ReportConfig {
        db_path: dir.path().join("sales_data.db"),
        chart_dir: dir.path().join("charts"),
    }
}

fn by_product(frame: &Frame, product: &str, column: &str) -> f64 {
    let products = frame.strings("product").unwrap();
    let values = frame.floats(column).unwrap();
    let idx = products.iter().position(|p| p == product).unwrap();
    values[idx]
}

#[test]
fn test_single_run_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_config(&dir);

    let summary = run(&config).unwrap();

    let totals = &summary.totals_by_product;
    assert_eq!(totals.num_rows(), 4);
    assert_eq!(by_product(totals, "Apples", "total_qty"), 15.0);
    assert_eq!(by_product(totals, "Apples", "revenue"), 30.0);
    assert_eq!(by_product(totals, "Bananas", "total_qty"), 25.0);
    assert_eq!(by_product(totals, "Bananas", "revenue"), 37.5);
    assert_eq!(by_product(totals, "Oranges", "total_qty"), 20.0);
    assert_eq!(by_product(totals, "Oranges", "revenue"), 50.0);
    assert_eq!(by_product(totals, "Mangoes", "total_qty"), 10.0);
    assert_eq!(by_product(totals, "Mangoes", "revenue"), 30.0);

    let averages = &summary.average_prices;
    assert_eq!(by_product(averages, "Apples", "avg_price"), 2.0);
    assert_eq!(by_product(averages, "Bananas", "avg_price"), 1.5);
    assert_eq!(by_product(averages, "Oranges", "avg_price"), 2.5);
    assert_eq!(by_product(averages, "Mangoes", "avg_price"), 3.0);

    assert_eq!(summary.top_seller.num_rows(), 1);
    assert_eq!(
        summary.top_seller.strings("product").unwrap(),
        vec!["Bananas"]
    );
    assert_eq!(summary.top_seller.floats("total_qty").unwrap(), vec![25.0]);

    assert_eq!(summary.total_revenue, Some(147.5));
}

#[test]
fn test_single_run_writes_four_charts() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_config(&dir);

    let summary = run(&config).unwrap();

    let expected = [
        REVENUE_BAR_FILE,
        QUANTITY_BAR_FILE,
        AVG_PRICE_BAR_FILE,
        REVENUE_PIE_FILE,
    ];
    assert_eq!(summary.chart_paths.len(), 4);
    for (path, name) in summary.chart_paths.iter().zip(expected) {
        assert_eq!(path, &config.chart_dir.join(name));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("<svg"), "{} is not an SVG", path.display());
    }
}

#[test]
fn test_store_file_persists_rows() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_config(&dir);

    run(&config).unwrap();

    let store = SalesStore::open(&config.db_path).unwrap();
    assert_eq!(store.sale_count().unwrap(), 8);
}

#[test]
fn test_second_run_doubles_all_totals() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_config(&dir);

    let first = run(&config).unwrap();
    let second = run(&config).unwrap();

    // The store accumulates: same file, sample rows appended again.
    let store = SalesStore::open(&config.db_path).unwrap();
    assert_eq!(store.sale_count().unwrap(), 16);

    assert_eq!(first.total_revenue, Some(147.5));
    assert_eq!(second.total_revenue, Some(295.0));

    for product in ["Apples", "Bananas", "Oranges", "Mangoes"] {
        let qty1 = by_product(&first.totals_by_product, product, "total_qty");
        let qty2 = by_product(&second.totals_by_product, product, "total_qty");
        assert_eq!(qty2, qty1 * 2.0);

        let rev1 = by_product(&first.totals_by_product, product, "revenue");
        let rev2 = by_product(&second.totals_by_product, product, "revenue");
        assert_eq!(rev2, rev1 * 2.0);

        // Duplicated rows leave averages untouched.
        let avg1 = by_product(&first.average_prices, product, "avg_price");
        let avg2 = by_product(&second.average_prices, product, "avg_price");
        assert_eq!(avg1, avg2);
    }

    assert_eq!(
        second.top_seller.strings("product").unwrap(),
        vec!["Bananas"]
    );
    assert_eq!(second.top_seller.floats("total_qty").unwrap(), vec![50.0]);
}
