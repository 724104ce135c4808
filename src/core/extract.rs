use crate::domain::model::{FlatRecord, OrderRecord};
use chrono::{DateTime, NaiveDate};

/// Flattens each order into one output row, then applies the optional
/// year filter. Pure: input order is preserved, nothing is mutated.
///
/// Per order: the *last* transaction wins (later transactions supersede
/// earlier attempts), the *first* line item carries the donor options.
/// Missing sub-records leave their fields empty rather than dropping the
/// row.
pub fn extract_records(orders: &[OrderRecord], filter_year: Option<&str>) -> Vec<FlatRecord> {
    orders
        .iter()
        .map(flatten_order)
        .filter(|record| match filter_year {
            Some(year) => matches_year(&record.transaction_date, year),
            None => true,
        })
        .collect()
}

fn flatten_order(order: &OrderRecord) -> FlatRecord {
    let last_transaction = order.transactions.last();
    let options = order.line_items.first().map(|item| &item.options);

    FlatRecord {
        reference: last_transaction
            .map(|tx| tx.reference.clone())
            .unwrap_or_default(),
        email: order.customer.email.clone(),
        prenom: options.map(|o| o.prenom.clone()).unwrap_or_default(),
        nom: options.map(|o| o.nom.clone()).unwrap_or_default(),
        date_naissance: options.map(|o| o.date_naissance.clone()).unwrap_or_default(),
        donation_amount: options
            .map(|o| o.donation_amount.clone())
            .unwrap_or_default(),
        transaction_date: last_transaction
            .map(|tx| normalize_date(&tx.date_created))
            .unwrap_or_default(),
    }
}

/// Canonicalizes a transaction date to `YYYY-MM-DD` when it is in any
/// recognized format; otherwise the original string passes through
/// unchanged so that nothing is silently lost.
pub fn normalize_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    // ISO date-times: everything before the 'T' is already the date.
    if let Some((date, _)) = raw.split_once('T') {
        return date.to_string();
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.format("%Y-%m-%d").to_string();
    }

    if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok() {
        return raw.to_string();
    }

    raw.to_string()
}

/// A record matches when the first four characters of its normalized date
/// equal the filter exactly. Dates shorter than four characters never
/// match; neither does a filter value that is not itself a plausible year.
fn matches_year(transaction_date: &str, year: &str) -> bool {
    // `get` also rejects a non-char-boundary at byte 4, which can only
    // happen for strings that cannot equal a four-digit year anyway.
    transaction_date.get(..4) == Some(year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Customer, ItemOptions, LineItem, OrderRecord, Transaction};

    fn order(dates: &[&str], email: &str, prenom: &str) -> OrderRecord {
        OrderRecord {
            transactions: dates
                .iter()
                .enumerate()
                .map(|(i, date)| Transaction {
                    reference: format!("TX{}", i + 1),
                    date_created: date.to_string(),
                })
                .collect(),
            customer: Customer {
                email: email.to_string(),
            },
            line_items: vec![LineItem {
                options: ItemOptions {
                    prenom: prenom.to_string(),
                    nom: "Tremblay".to_string(),
                    date_naissance: "1980-01-01".to_string(),
                    donation_amount: "100".to_string(),
                },
            }],
        }
    }

    #[test]
    fn test_one_row_per_order_without_filter() {
        let orders = vec![
            order(&["2022-01-01"], "a@b.c", "Alice"),
            order(&[], "d@e.f", "Bob"),
            OrderRecord::default(),
        ];

        let records = extract_records(&orders, None);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_last_transaction_wins() {
        let orders = vec![order(&["2022-01-01", "2023-06-15"], "a@b.c", "Alice")];

        let records = extract_records(&orders, None);
        assert_eq!(records[0].reference, "TX2");
        assert_eq!(records[0].transaction_date, "2023-06-15");
    }

    #[test]
    fn test_empty_transactions_yield_empty_fields() {
        let orders = vec![order(&[], "a@b.c", "Alice")];

        let records = extract_records(&orders, None);
        assert_eq!(records[0].reference, "");
        assert_eq!(records[0].transaction_date, "");
        assert_eq!(records[0].email, "a@b.c");
    }

    #[test]
    fn test_empty_line_items_yield_empty_options() {
        let orders = vec![OrderRecord {
            transactions: vec![Transaction {
                reference: "TX1".to_string(),
                date_created: "2023-05-10".to_string(),
            }],
            customer: Customer::default(),
            line_items: vec![],
        }];

        let records = extract_records(&orders, None);
        assert_eq!(records[0].prenom, "");
        assert_eq!(records[0].nom, "");
        assert_eq!(records[0].date_naissance, "");
        assert_eq!(records[0].donation_amount, "");
        assert_eq!(records[0].reference, "TX1");
    }

    #[test]
    fn test_first_line_item_wins() {
        let mut o = order(&["2023-05-10"], "a@b.c", "Alice");
        o.line_items.push(LineItem {
            options: ItemOptions {
                prenom: "Bob".to_string(),
                ..Default::default()
            },
        });

        let records = extract_records(&[o], None);
        assert_eq!(records[0].prenom, "Alice");
    }

    #[test]
    fn test_normalize_date_iso_datetime() {
        assert_eq!(normalize_date("2023-05-10T14:30:00Z"), "2023-05-10");
    }

    #[test]
    fn test_normalize_date_bare_date() {
        assert_eq!(normalize_date("2023-05-10"), "2023-05-10");
    }

    #[test]
    fn test_normalize_date_empty() {
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_normalize_date_unparseable_passes_through() {
        assert_eq!(normalize_date("not-a-date"), "not-a-date");
        assert_eq!(normalize_date("10/05/2023"), "10/05/2023");
    }

    #[test]
    fn test_normalize_date_space_separated_offset() {
        assert_eq!(normalize_date("2023-05-10 14:30:00+00:00"), "2023-05-10");
    }

    #[test]
    fn test_year_filter_retains_matching_rows_in_order() {
        let orders = vec![
            order(&["2022-01-01"], "a@b.c", "Alice"),
            order(&["2023-06-15"], "d@e.f", "Bob"),
            order(&["2023-12-31"], "g@h.i", "Carol"),
            order(&[""], "j@k.l", "Dan"),
        ];

        let records = extract_records(&orders, Some("2023"));
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].transaction_date, "2023-06-15");
        assert_eq!(records[1].transaction_date, "2023-12-31");
    }

    #[test]
    fn test_year_filter_drops_short_dates() {
        let orders = vec![order(&["202"], "a@b.c", "Alice")];

        let records = extract_records(&orders, Some("2023"));
        assert!(records.is_empty());
    }

    #[test]
    fn test_year_filter_out_of_contract_value_never_matches() {
        let orders = vec![order(&["2023-06-15"], "a@b.c", "Alice")];

        assert!(extract_records(&orders, Some("20X3")).is_empty());
        assert!(extract_records(&orders, Some("")).is_empty());
    }

    #[test]
    fn test_year_filter_is_string_comparison() {
        // "2023" must not match a date starting "02023" or similar.
        let orders = vec![order(&["02023-01-01"], "a@b.c", "Alice")];

        assert!(extract_records(&orders, Some("2023")).is_empty());
    }
}
