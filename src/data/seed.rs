use chrono::NaiveDate;

use super::model::{Customer, CustomerId, Dataset, Transaction, TransactionId};

// ---------------------------------------------------------------------------
// Built-in seed dataset
// ---------------------------------------------------------------------------

fn customer(id: CustomerId, name: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
    }
}

fn tx(id: TransactionId, customer_id: CustomerId, ymd: (i32, u32, u32), amount: f64) -> Transaction {
    Transaction {
        id,
        customer_id,
        date: NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap(),
        amount,
    }
}

/// The reference dataset shown at startup: 5 customers, 15 transactions
/// spread across 2022. Also restorable via File → Load sample data.
pub fn seed_dataset() -> Dataset {
    let customers = vec![
        customer(1, "Ahmed Ali"),
        customer(2, "Aya Elsayed"),
        customer(3, "Mina Adel"),
        customer(4, "Sarah Reda"),
        customer(5, "Mohamed Sayed"),
    ];

    let transactions = vec![
        tx(1, 1, (2022, 1, 1), 1000.0),
        tx(2, 1, (2022, 1, 2), 2000.0),
        tx(3, 2, (2022, 1, 1), 550.0),
        tx(4, 2, (2022, 1, 1), 550.0),
        tx(5, 2, (2022, 5, 1), 1450.0),
        tx(6, 3, (2022, 9, 1), 3500.0),
        tx(7, 3, (2022, 3, 1), 800.0),
        tx(8, 3, (2022, 6, 1), 3000.0),
        tx(9, 2, (2022, 1, 2), 1300.0),
        tx(10, 4, (2022, 1, 1), 750.0),
        tx(11, 3, (2022, 1, 2), 1250.0),
        tx(12, 5, (2022, 1, 1), 2500.0),
        tx(13, 5, (2022, 6, 1), 3500.0),
        tx(14, 5, (2022, 3, 1), 5500.0),
        tx(15, 5, (2022, 1, 2), 875.0),
    ];

    Dataset::new(customers, transactions).expect("seed data is internally consistent")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_expected_shape() {
        let dataset = seed_dataset();
        assert_eq!(dataset.customers().len(), 5);
        assert_eq!(dataset.transactions().len(), 15);
        assert_eq!(dataset.customer_name(5), Some("Mohamed Sayed"));
    }
}
