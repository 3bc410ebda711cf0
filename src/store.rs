//! SQLite-backed sales store
//!
//! Owns the embedded database connection, the schema, and the four
//! aggregate queries the report is built from. The schema statement is
//! idempotent and rows are only ever appended, so a store file accumulates
//! one sample batch per run.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection};
use tracing::debug;

use crate::frame::{Frame, Value};
use crate::record::SaleRecord;
use crate::Result;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS sales (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product TEXT,
    quantity INTEGER,
    price REAL
)";

const INSERT_SQL: &str = "INSERT INTO sales (product, quantity, price) VALUES (?1, ?2, ?3)";

const TOTALS_BY_PRODUCT_SQL: &str =
    "SELECT product, SUM(quantity) AS total_qty, SUM(quantity * price) AS revenue
     FROM sales GROUP BY product";

const AVERAGE_PRICE_SQL: &str =
    "SELECT product, AVG(price) AS avg_price FROM sales GROUP BY product";

const TOP_SELLER_SQL: &str = "SELECT product, SUM(quantity) AS total_qty
     FROM sales GROUP BY product ORDER BY total_qty DESC LIMIT 1";

const TOTAL_REVENUE_SQL: &str = "SELECT SUM(quantity * price) AS total_revenue FROM sales";

/// Embedded store holding the `sales` table.
pub struct SalesStore {
    conn: Connection,
}

impl std::fmt::Debug for SalesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SalesStore").finish_non_exhaustive()
    }
}

impl SalesStore {
    /// Open (or create) a store file and ensure the schema exists.
    ///
    /// # Errors
    /// Returns error if the file cannot be opened or the schema statement
    /// fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "opened sales store");
        Self::from_connection(conn)
    }

    /// Create an in-memory store (for testing).
    ///
    /// # Errors
    /// Returns error if the schema statement fails.
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    /// Append sales records in a single transaction.
    ///
    /// Surrogate ids are assigned by SQLite; existing rows are never
    /// touched.
    ///
    /// # Errors
    /// Returns error if any insert fails; no rows are committed in that
    /// case.
    pub fn insert_sales(&mut self, records: &[SaleRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx.prepare(INSERT_SQL)?;
            for record in records {
                stmt.execute(params![record.product, record.quantity, record.price])?;
            }
        }
        tx.commit()?;
        debug!(rows = records.len(), "inserted sales records");
        Ok(records.len())
    }

    /// Append the fixed sample dataset.
    ///
    /// # Errors
    /// Returns error if the insert transaction fails.
    pub fn seed_samples(&mut self) -> Result<usize> {
        self.insert_sales(&crate::record::sample_sales())
    }

    /// Run a read-only query and materialize the full result set.
    ///
    /// # Errors
    /// Returns error if the SQL fails or a result cell has a type the
    /// frame cannot hold (BLOB).
    pub fn query_frame(&self, sql: &str) -> Result<Frame> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let num_columns = columns.len();

        let mut out = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(num_columns);
            for i in 0..num_columns {
                let value = match row.get_ref(i)? {
                    ValueRef::Null => Value::Null,
                    ValueRef::Integer(v) => Value::Int(v),
                    ValueRef::Real(v) => Value::Float(v),
                    ValueRef::Text(bytes) => {
                        Value::Text(String::from_utf8_lossy(bytes).into_owned())
                    }
                    ValueRef::Blob(_) => {
                        return Err(crate::Error::Frame(format!(
                            "column {} holds a BLOB, which has no tabular form",
                            columns[i]
                        )))
                    }
                };
                values.push(value);
            }
            out.push(values);
        }
        Frame::new(columns, out)
    }

    /// Total quantity and revenue per product.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn totals_by_product(&self) -> Result<Frame> {
        self.query_frame(TOTALS_BY_PRODUCT_SQL)
    }

    /// Average unit price per product.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn average_price_by_product(&self) -> Result<Frame> {
        self.query_frame(AVERAGE_PRICE_SQL)
    }

    /// The single product with the largest summed quantity.
    ///
    /// Empty table yields an empty frame.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn top_seller(&self) -> Result<Frame> {
        self.query_frame(TOP_SELLER_SQL)
    }

    /// Grand total revenue over the whole table.
    ///
    /// `None` when the table is empty (SQL `SUM` over zero rows).
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn total_revenue(&self) -> Result<Option<f64>> {
        self.query_frame(TOTAL_REVENUE_SQL)?.scalar()
    }

    /// Number of rows currently in the `sales` table.
    ///
    /// # Errors
    /// Returns error if the query fails.
    pub fn sale_count(&self) -> Result<i64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM sales", [], |row| row.get(0))?)
    }
}
