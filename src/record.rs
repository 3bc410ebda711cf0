//! Sales record type and the fixed sample dataset

/// A single sales line item as inserted into the store.
///
/// The surrogate `id` is assigned by SQLite on insert and is not part of
/// this type; records are write-only input.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    /// Product name
    pub product: String,
    /// Units sold
    pub quantity: i64,
    /// Unit price
    pub price: f64,
}

impl SaleRecord {
    /// Create a new sales record.
    #[must_use]
    pub fn new(product: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            product: product.into(),
            quantity,
            price,
        }
    }
}

/// The fixed eight-row sample dataset seeded on every run.
#[must_use]
pub fn sample_sales() -> Vec<SaleRecord> {
    vec![
        SaleRecord::new("Apples", 10, 2.0),
        SaleRecord::new("Bananas", 15, 1.5),
        SaleRecord::new("Oranges", 8, 2.5),
        SaleRecord::new("Apples", 5, 2.0),
        SaleRecord::new("Bananas", 10, 1.5),
        SaleRecord::new("Oranges", 12, 2.5),
        SaleRecord::new("Mangoes", 6, 3.0),
        SaleRecord::new("Mangoes", 4, 3.0),
    ]
}
