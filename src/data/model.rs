use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type CustomerId = u32;
pub type TransactionId = u32;

// ---------------------------------------------------------------------------
// Customer / Transaction – the two record types
// ---------------------------------------------------------------------------

/// A customer row. `id` is unique across the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
}

/// A single transaction belonging to one customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub customer_id: CustomerId,
    /// Calendar day only – time-of-day is truncated at parse time.
    pub date: NaiveDate,
    /// Non-negative monetary amount.
    pub amount: f64,
}

impl Transaction {
    /// The amount as its plain decimal string (`1000`, `550.5` – no currency
    /// symbol, no thousands separator). The amount filter matches against this
    /// exact rendering and the transaction table displays it.
    pub fn amount_text(&self) -> String {
        format!("{}", self.amount)
    }
}

// ---------------------------------------------------------------------------
// DayTotal – derived per-day aggregate
// ---------------------------------------------------------------------------

/// One point of the per-day aggregation: all of a customer's transactions on
/// `date` summed into `total`. Derived on every call, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub total: f64,
}

// ---------------------------------------------------------------------------
// Dataset – the immutable loaded collection
// ---------------------------------------------------------------------------

/// Integrity violations rejected by [`Dataset::new`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DataIntegrityError {
    #[error("duplicate customer id {0}")]
    DuplicateCustomerId(CustomerId),
    #[error("duplicate transaction id {0}")]
    DuplicateTransactionId(TransactionId),
    #[error("transaction {transaction} references unknown customer {customer}")]
    UnknownCustomer {
        transaction: TransactionId,
        customer: CustomerId,
    },
    #[error("transaction {0} has a negative amount")]
    NegativeAmount(TransactionId),
}

/// The full loaded dataset. Constructed once, read-only afterwards; both
/// sequences keep their source insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
}

impl Dataset {
    /// Validate and assemble a dataset.
    ///
    /// Rejects duplicate customer or transaction ids, transactions that
    /// reference a customer not present in `customers`, and negative amounts.
    pub fn new(
        customers: Vec<Customer>,
        transactions: Vec<Transaction>,
    ) -> Result<Self, DataIntegrityError> {
        let mut customer_ids = HashSet::with_capacity(customers.len());
        for customer in &customers {
            if !customer_ids.insert(customer.id) {
                return Err(DataIntegrityError::DuplicateCustomerId(customer.id));
            }
        }

        let mut transaction_ids = HashSet::with_capacity(transactions.len());
        for tx in &transactions {
            if !transaction_ids.insert(tx.id) {
                return Err(DataIntegrityError::DuplicateTransactionId(tx.id));
            }
            if !customer_ids.contains(&tx.customer_id) {
                return Err(DataIntegrityError::UnknownCustomer {
                    transaction: tx.id,
                    customer: tx.customer_id,
                });
            }
            if tx.amount < 0.0 {
                return Err(DataIntegrityError::NegativeAmount(tx.id));
            }
        }

        Ok(Dataset {
            customers,
            transactions,
        })
    }

    /// Customers in source order.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Transactions in source order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Display name for a customer id, if present.
    pub fn customer_name(&self, id: CustomerId) -> Option<&str> {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: CustomerId, name: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
        }
    }

    fn tx(id: TransactionId, customer_id: CustomerId, date: &str, amount: f64) -> Transaction {
        Transaction {
            id,
            customer_id,
            date: date.parse().unwrap(),
            amount,
        }
    }

    #[test]
    fn amount_text_has_no_formatting() {
        assert_eq!(tx(1, 1, "2022-01-01", 1000.0).amount_text(), "1000");
        assert_eq!(tx(2, 1, "2022-01-01", 550.5).amount_text(), "550.5");
        assert_eq!(tx(3, 1, "2022-01-01", 0.0).amount_text(), "0");
    }

    #[test]
    fn new_accepts_consistent_data() {
        let dataset = Dataset::new(
            vec![customer(1, "Ahmed Ali")],
            vec![tx(1, 1, "2022-01-01", 1000.0)],
        )
        .unwrap();
        assert_eq!(dataset.customers().len(), 1);
        assert_eq!(dataset.transactions().len(), 1);
        assert_eq!(dataset.customer_name(1), Some("Ahmed Ali"));
        assert_eq!(dataset.customer_name(99), None);
    }

    #[test]
    fn new_rejects_duplicate_customer_id() {
        let err = Dataset::new(
            vec![customer(1, "Ahmed Ali"), customer(1, "Aya Elsayed")],
            vec![],
        )
        .unwrap_err();
        assert_eq!(err, DataIntegrityError::DuplicateCustomerId(1));
    }

    #[test]
    fn new_rejects_duplicate_transaction_id() {
        let err = Dataset::new(
            vec![customer(1, "Ahmed Ali")],
            vec![
                tx(7, 1, "2022-01-01", 10.0),
                tx(7, 1, "2022-01-02", 20.0),
            ],
        )
        .unwrap_err();
        assert_eq!(err, DataIntegrityError::DuplicateTransactionId(7));
    }

    #[test]
    fn new_rejects_unknown_customer_reference() {
        let err = Dataset::new(
            vec![customer(1, "Ahmed Ali")],
            vec![tx(1, 2, "2022-01-01", 10.0)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            DataIntegrityError::UnknownCustomer {
                transaction: 1,
                customer: 2,
            }
        );
    }

    #[test]
    fn new_rejects_negative_amount() {
        let err = Dataset::new(
            vec![customer(1, "Ahmed Ali")],
            vec![tx(1, 1, "2022-01-01", -5.0)],
        )
        .unwrap_err();
        assert_eq!(err, DataIntegrityError::NegativeAmount(1));
    }
}
