use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use super::model::{Customer, CustomerId, Dataset, Transaction, TransactionId};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.json` – `{ "customers": [...], "transactions": [...] }`
/// * `.csv`  – header `id,customer_id,customer_name,date,amount`, one row per
///   transaction
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema:
///
/// ```json
/// {
///   "customers":    [{ "id": 1, "name": "Ahmed Ali" }, ...],
///   "transactions": [{ "id": 1, "customer_id": 1,
///                      "date": "2022-01-01", "amount": 1000 }, ...]
/// }
/// ```
#[derive(Deserialize)]
struct RawDataset {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
}

fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let raw: RawDataset = serde_json::from_str(&text).context("parsing JSON")?;
    Dataset::new(raw.customers, raw.transactions).context("validating dataset")
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV record. Customers are derived from the distinct
/// `(customer_id, customer_name)` pairs in first-seen order.
#[derive(Deserialize)]
struct CsvRow {
    id: TransactionId,
    customer_id: CustomerId,
    customer_name: String,
    date: NaiveDate,
    amount: f64,
}

fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let mut customers: Vec<Customer> = Vec::new();
    let mut transactions: Vec<Transaction> = Vec::new();

    for (row_no, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.with_context(|| format!("CSV row {row_no}"))?;
        if !customers.iter().any(|c| c.id == row.customer_id) {
            customers.push(Customer {
                id: row.customer_id,
                name: row.customer_name,
            });
        }
        transactions.push(Transaction {
            id: row.id,
            customer_id: row.customer_id,
            date: row.date,
            amount: row.amount,
        });
    }

    Dataset::new(customers, transactions).context("validating dataset")
}
