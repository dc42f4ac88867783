use std::collections::BTreeMap;

use super::model::{CustomerId, Dataset, DayTotal};

// ---------------------------------------------------------------------------
// Search filters
// ---------------------------------------------------------------------------

/// Return indices of customers whose name contains `term`, case-insensitively.
///
/// An empty term is the identity filter: every index, in source order. No
/// match yields an empty vector, never an error.
pub fn customers_matching_name(dataset: &Dataset, term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..dataset.customers().len()).collect();
    }
    let needle = term.to_lowercase();
    dataset
        .customers()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.name.to_lowercase().contains(&needle))
        .map(|(i, _)| i)
        .collect()
}

/// Return indices of transactions whose printed amount contains `term`.
///
/// This is a literal substring match against the decimal rendering
/// (`Transaction::amount_text`), not a numeric comparison: `"5"` matches
/// amounts 550, 1450 and 3500 but not 1000. An empty term is the identity
/// filter.
pub fn transactions_matching_amount(dataset: &Dataset, term: &str) -> Vec<usize> {
    if term.is_empty() {
        return (0..dataset.transactions().len()).collect();
    }
    dataset
        .transactions()
        .iter()
        .enumerate()
        .filter(|(_, tx)| tx.amount_text().contains(term))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Per-day aggregation
// ---------------------------------------------------------------------------

/// Sum a customer's transaction amounts per calendar day.
///
/// Output is sorted by date ascending, one entry per distinct day. A customer
/// id with no transactions (including ids absent from the customer list)
/// yields an empty vector; the id is never validated here.
pub fn daily_totals(dataset: &Dataset, customer: CustomerId) -> Vec<DayTotal> {
    let mut totals: BTreeMap<chrono::NaiveDate, f64> = BTreeMap::new();
    for tx in dataset
        .transactions()
        .iter()
        .filter(|tx| tx.customer_id == customer)
    {
        *totals.entry(tx.date).or_insert(0.0) += tx.amount;
    }
    totals
        .into_iter()
        .map(|(date, total)| DayTotal { date, total })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::seed::seed_dataset;

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn empty_name_term_is_identity() {
        let dataset = seed_dataset();
        let indices = customers_matching_name(&dataset, "");
        assert_eq!(indices, (0..dataset.customers().len()).collect::<Vec<_>>());
    }

    #[test]
    fn empty_amount_term_is_identity() {
        let dataset = seed_dataset();
        let indices = transactions_matching_amount(&dataset, "");
        assert_eq!(
            indices,
            (0..dataset.transactions().len()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let dataset = seed_dataset();
        let lower = customers_matching_name(&dataset, "ahmed");
        let upper = customers_matching_name(&dataset, "AHMED");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        assert_eq!(dataset.customers()[lower[0]].name, "Ahmed Ali");
    }

    #[test]
    fn name_filter_matches_substrings_in_order() {
        let dataset = seed_dataset();
        // "a" appears in several names; matches must keep source order.
        let indices = customers_matching_name(&dataset, "sa");
        let names: Vec<&str> = indices
            .iter()
            .map(|&i| dataset.customers()[i].name.as_str())
            .collect();
        assert_eq!(names, vec!["Aya Elsayed", "Sarah Reda", "Mohamed Sayed"]);
    }

    #[test]
    fn name_filter_no_match_is_empty() {
        let dataset = seed_dataset();
        assert!(customers_matching_name(&dataset, "zzz").is_empty());
    }

    #[test]
    fn amount_filter_matches_printed_substring() {
        let dataset = seed_dataset();

        // "550" matches exactly the two amount-550 transactions.
        let indices = transactions_matching_amount(&dataset, "550");
        let ids: Vec<u32> = indices
            .iter()
            .map(|&i| dataset.transactions()[i].id)
            .collect();
        assert_eq!(ids, vec![3, 4]);

        // "5" matches every printed amount containing the digit, in source
        // order – substring semantics, not a numeric range.
        let indices = transactions_matching_amount(&dataset, "5");
        let amounts: Vec<f64> = indices
            .iter()
            .map(|&i| dataset.transactions()[i].amount)
            .collect();
        assert_eq!(
            amounts,
            vec![550.0, 550.0, 1450.0, 3500.0, 750.0, 1250.0, 2500.0, 3500.0, 5500.0, 875.0]
        );
        assert!(!amounts.contains(&1000.0));
        assert!(!amounts.contains(&2000.0));
    }

    #[test]
    fn amount_filter_no_match_is_empty() {
        let dataset = seed_dataset();
        assert!(transactions_matching_amount(&dataset, "9999").is_empty());
    }

    #[test]
    fn daily_totals_sums_same_day_transactions() {
        let dataset = seed_dataset();
        // Customer 2: two 550s on 2022-01-01, 1450 on 2022-05-01, 1300 on
        // 2022-01-02 – three distinct days, ascending.
        let totals = daily_totals(&dataset, 2);
        assert_eq!(
            totals,
            vec![
                DayTotal {
                    date: day("2022-01-01"),
                    total: 1100.0,
                },
                DayTotal {
                    date: day("2022-01-02"),
                    total: 1300.0,
                },
                DayTotal {
                    date: day("2022-05-01"),
                    total: 1450.0,
                },
            ]
        );
    }

    #[test]
    fn daily_totals_unknown_customer_is_empty() {
        let dataset = seed_dataset();
        assert!(daily_totals(&dataset, 999).is_empty());
    }

    #[test]
    fn queries_are_pure() {
        let dataset = seed_dataset();
        let before = dataset.clone();

        let first = customers_matching_name(&dataset, "a");
        let second = customers_matching_name(&dataset, "a");
        assert_eq!(first, second);

        let first = transactions_matching_amount(&dataset, "5");
        let second = transactions_matching_amount(&dataset, "5");
        assert_eq!(first, second);

        let first = daily_totals(&dataset, 3);
        let second = daily_totals(&dataset, 3);
        assert_eq!(first, second);

        assert_eq!(dataset, before);
    }
}
