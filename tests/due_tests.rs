use ledger_report::ledger::{DueEntry, KeyPart};
use ledger_report::report::{compute_due, due_key, filter_positive};

fn entry(invoice: u64, client: u64, amount: f64) -> DueEntry {
    DueEntry::new(Some(KeyPart::Id(invoice)), Some(KeyPart::Id(client)), amount)
}

#[test]
fn test_due_key_requires_both_parts() {
    assert_eq!(due_key(&entry(1, 2, 10.0)), Some("1_2".to_string()));
    assert_eq!(
        due_key(&DueEntry::new(Some(KeyPart::Id(1)), None, 10.0)),
        None
    );
    assert_eq!(
        due_key(&DueEntry::new(None, Some(KeyPart::Id(2)), 10.0)),
        None
    );
    assert_eq!(
        due_key(&DueEntry::new(
            Some(KeyPart::Code("INV-0042".to_string())),
            Some(KeyPart::relation(9)),
            10.0
        )),
        Some("INV-0042_9".to_string())
    );
}

#[test]
fn test_positive_balance_is_listed() {
    let debits = vec![entry(1, 2, 500.0)];
    let credits = vec![entry(1, 2, 200.0)];

    let due = compute_due(&debits, &credits);
    assert_eq!(due.len(), 1);
    assert_eq!(due.get("1_2"), Some(&300.0));

    let rows = filter_positive(&debits, &due);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].due_amount, 300.0);
    assert_eq!(rows[0].entry, debits[0]);
}

#[test]
fn test_overpaid_pair_is_excluded() {
    let debits = vec![entry(1, 2, 100.0)];
    let credits = vec![entry(1, 2, 150.0)];

    let due = compute_due(&debits, &credits);
    assert_eq!(due.get("1_2"), Some(&-50.0));
    assert!(filter_positive(&debits, &due).is_empty());
}

#[test]
fn test_settled_pair_is_excluded() {
    let debits = vec![entry(3, 4, 250.0)];
    let credits = vec![entry(3, 4, 100.0), entry(3, 4, 150.0)];

    let due = compute_due(&debits, &credits);
    assert_eq!(due.get("3_4"), Some(&0.0));
    assert!(filter_positive(&debits, &due).is_empty());
}

#[test]
fn test_missing_client_never_listed() {
    let orphan = DueEntry::new(Some(KeyPart::Id(1)), None, 10_000.0);
    let debits = vec![orphan, entry(5, 6, 80.0)];

    let due = compute_due(&debits, &[]);
    assert_eq!(due.len(), 1);

    let rows = filter_positive(&debits, &due);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].due_amount, 80.0);
}

#[test]
fn test_keyless_credit_is_ignored() {
    let debits = vec![entry(1, 2, 100.0)];
    let credits = vec![DueEntry::new(None, Some(KeyPart::Id(2)), 100.0)];

    let due = compute_due(&debits, &credits);
    assert_eq!(due.get("1_2"), Some(&100.0));
}

#[test]
fn test_credit_without_debit_creates_negative_entry() {
    let credits = vec![entry(7, 8, 40.0)];

    let due = compute_due(&[], &credits);
    assert_eq!(due.get("7_8"), Some(&-40.0));
    assert!(filter_positive(&[], &due).is_empty());
}

#[test]
fn test_every_debit_row_of_a_pair_is_listed() {
    // Two invoice lines for the same pair share the pair's balance
    let debits = vec![entry(1, 2, 300.0), entry(1, 2, 200.0), entry(9, 2, 50.0)];
    let credits = vec![entry(1, 2, 100.0)];

    let due = compute_due(&debits, &credits);
    let keys: Vec<&str> = due.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["1_2", "9_2"]);

    let rows = filter_positive(&debits, &due);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].due_amount, 400.0);
    assert_eq!(rows[1].due_amount, 400.0);
    assert_eq!(rows[2].due_amount, 50.0);
}

#[test]
fn test_due_row_json_keeps_extra_fields() {
    let debit: DueEntry = serde_json::from_value(serde_json::json!({
        "id": 31,
        "invoice": 1,
        "client": { "id": 2, "name": "Harbor Freight Co." },
        "amount": 500.0,
        "date": "2026-02-14"
    }))
    .unwrap();
    assert_eq!(debit.client.as_ref().unwrap().to_string(), "2");
    assert!(!debit.extra.contains_key("client"));

    let credits = vec![entry(1, 2, 200.0)];
    let due = compute_due(std::slice::from_ref(&debit), &credits);
    let rows = filter_positive(std::slice::from_ref(&debit), &due);

    let json = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(json["id"], 31);
    assert_eq!(json["date"], "2026-02-14");
    assert_eq!(json["invoice"], 1);
    assert_eq!(json["dueAmount"], 300.0);
}

#[test]
fn test_due_row_json_keeps_populated_relation_fields() {
    let debit: DueEntry = serde_json::from_value(serde_json::json!({
        "invoice": { "id": 1, "number": "INV-0001" },
        "client": { "id": 2, "name": "Harbor Freight Co.", "email": "ap@harbor.test" },
        "amount": 500.0
    }))
    .unwrap();

    let due = compute_due(std::slice::from_ref(&debit), &[]);
    assert_eq!(due.get("1_2"), Some(&500.0));

    let rows = filter_positive(std::slice::from_ref(&debit), &due);
    let json = serde_json::to_value(&rows[0]).unwrap();
    assert_eq!(
        json["client"],
        serde_json::json!({ "id": 2, "name": "Harbor Freight Co.", "email": "ap@harbor.test" })
    );
    assert_eq!(json["invoice"]["number"], "INV-0001");
    assert_eq!(json["dueAmount"], 500.0);
}

#[test]
fn test_null_amount_counts_as_zero() {
    let debits: Vec<DueEntry> = serde_json::from_str(
        r#"[
            {"invoice": 1, "client": 2, "amount": 400},
            {"invoice": 3, "client": 2, "amount": null}
        ]"#,
    )
    .unwrap();
    let credits: Vec<DueEntry> =
        serde_json::from_str(r#"[{"invoice": 1, "client": 2, "amount": null}]"#).unwrap();

    assert_eq!(debits[1].amount, 0.0);

    let due = compute_due(&debits, &credits);
    assert_eq!(due.get("1_2"), Some(&400.0));
    assert_eq!(due.get("3_2"), Some(&0.0));

    let rows = filter_positive(&debits, &due);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].due_amount, 400.0);
}
