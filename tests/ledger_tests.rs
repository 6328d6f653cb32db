use chrono::NaiveDate;
use ledger_report::config::{parse_config, AccountHeadGroup, RequestContext, CONFIG_TEMPLATE};
use ledger_report::ledger::{
    decode_head_ids, decode_listing, head_query, join_ids, journal_path, transaction_query,
    DateRange, DueEntry, KeyPart, ReportType, Side,
};
use ledger_report::ReportError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn pairs(query: &[(String, String)]) -> Vec<(&str, &str)> {
    query
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

#[test]
fn test_join_ids() {
    assert_eq!(join_ids(&[3, 14, 15]), "3,14,15");
    assert_eq!(join_ids(&[7]), "7");
    // Empty filter keeps the URL shape
    assert_eq!(join_ids(&[]), "0");
}

#[test]
fn test_journal_path() {
    assert_eq!(
        journal_path(ReportType::CurrentAsset, &[1, 2]),
        "/journals/currentAsset/1,2"
    );
    assert_eq!(
        journal_path(ReportType::FixedLiabilities, &[]),
        "/journals/fixedLiabilities/0"
    );
}

#[test]
fn test_head_query_shape() {
    let query = head_query(AccountHeadGroup::new(1, 1), &RequestContext::default());

    assert_eq!(
        pairs(&query),
        vec![
            ("populate", "id"),
            ("filters[account][id][$eq]", "1"),
            ("filters[sub_account][id][$eq]", "1"),
        ]
    );
}

#[test]
fn test_queries_scope_to_company() {
    let ctx = RequestContext {
        user_id: Some(3),
        company_id: Some(12),
    };

    let query = head_query(AccountHeadGroup::new(2, 4), &ctx);
    assert_eq!(
        query.last().map(|(k, v)| (k.as_str(), v.as_str())),
        Some(("filters[company][id][$eq]", "12"))
    );

    let query = transaction_query(Side::Credit, &ctx);
    assert_eq!(
        pairs(&query),
        vec![
            ("populate", "*"),
            ("filters[type][$eq]", "credit"),
            ("filters[company][id][$eq]", "12"),
        ]
    );
}

#[test]
fn test_report_type_sides() {
    for report_type in ReportType::BALANCE_SHEET {
        let expected = match report_type {
            ReportType::FixedAsset | ReportType::CurrentAsset => Side::Debit,
            _ => Side::Credit,
        };
        assert_eq!(report_type.side(), expected, "{report_type}");
    }
    assert_eq!(ReportType::Revenue.side(), Side::Credit);
    assert_eq!(ReportType::Expense.side(), Side::Debit);
}

#[test]
fn test_date_range_params() {
    let range = DateRange::new(date(2026, 1, 5), date(2026, 12, 31)).unwrap();

    assert_eq!(range.start_param(), "2026-01-05");
    assert_eq!(range.end_param(), "2026-12-31");
}

#[test]
fn test_date_range_defaults_to_year_to_date() {
    let today = date(2026, 10, 14);

    let range = DateRange::from_args(None, None, today).unwrap();
    assert_eq!(range.start, date(2026, 1, 1));
    assert_eq!(range.end, today);

    let range = DateRange::from_args(Some("2026-03-01"), None, today).unwrap();
    assert_eq!(range.start, date(2026, 3, 1));
    assert_eq!(range.end, today);
}

#[test]
fn test_date_range_rejects_bad_input() {
    let today = date(2026, 10, 14);

    assert!(matches!(
        DateRange::from_args(Some("03/01/2026"), None, today),
        Err(ReportError::InvalidDate(s)) if s == "03/01/2026"
    ));
    assert!(matches!(
        DateRange::from_args(Some("2026-11-01"), Some("2026-10-01"), today),
        Err(ReportError::InvalidDateRange { .. })
    ));
}

#[test]
fn test_key_part_variants() {
    let entries: Vec<DueEntry> = serde_json::from_str(
        r#"[
            {"invoice": 1, "client": 2, "amount": 10},
            {"invoice": "INV-7", "client": {"id": 5}, "amount": 20.5},
            {"invoice": null, "amount": 30}
        ]"#,
    )
    .unwrap();

    assert_eq!(entries[0].invoice, Some(KeyPart::Id(1)));
    assert_eq!(entries[0].client, Some(KeyPart::Id(2)));
    assert_eq!(entries[0].amount, 10.0);
    assert_eq!(entries[1].invoice, Some(KeyPart::Code("INV-7".to_string())));
    assert_eq!(entries[1].client, Some(KeyPart::relation(5)));
    assert_eq!(entries[2].invoice, None);
    assert_eq!(entries[2].client, None);

    assert_eq!(KeyPart::relation(5).to_string(), "5");
}

#[test]
fn test_template_config_parses() {
    let config = parse_config(CONFIG_TEMPLATE).unwrap();

    assert_eq!(config.backend.base_url, "http://localhost:1337/api");
    assert_eq!(config.backend.token, None);
    assert_eq!(config.backend.timeout_secs, 10);
    assert_eq!(config.context, RequestContext::default());
    assert_eq!(config.report.currency_symbol, "$");
    assert_eq!(
        config.heads.group(ReportType::CurrentAsset),
        AccountHeadGroup::new(1, 1)
    );
}

#[test]
fn test_minimal_config_uses_defaults() {
    let config = parse_config(
        r#"[backend]
base_url = "https://erp.example.com/api/"

[heads]
revenue = { account = 9, sub_account = 21 }
"#,
    )
    .unwrap();

    assert_eq!(
        config.backend.trimmed_base_url(),
        "https://erp.example.com/api"
    );
    assert_eq!(config.backend.timeout_secs, 10);
    assert_eq!(
        config.heads.group(ReportType::Revenue),
        AccountHeadGroup::new(9, 21)
    );
    assert_eq!(
        config.heads.group(ReportType::CurrentAsset),
        AccountHeadGroup::new(1, 1)
    );
    assert_eq!(config.report.currency_symbol, "$");
}

#[test]
fn test_context_overrides() {
    let configured = RequestContext {
        user_id: Some(1),
        company_id: Some(2),
    };

    assert_eq!(configured.with_overrides(None, None), configured);
    assert_eq!(
        configured.with_overrides(None, Some(8)),
        RequestContext {
            user_id: Some(1),
            company_id: Some(8),
        }
    );
}

#[test]
fn test_decode_head_ids_envelope_and_bare() {
    let enveloped = r#"{"data": [{"id": 11, "name": "Cash"}, {"id": 12}], "meta": {"total": 2}}"#;
    assert_eq!(decode_head_ids(enveloped).unwrap(), vec![11, 12]);

    let bare = r#"[{"id": 21}]"#;
    assert_eq!(decode_head_ids(bare).unwrap(), vec![21]);

    assert!(decode_head_ids(r#"{"data": []}"#).unwrap().is_empty());
}

#[test]
fn test_decode_transaction_listing_envelope_and_bare() {
    let enveloped = r#"{"data": [{"invoice": 1, "client": 2, "amount": 500, "type": "debit"}]}"#;
    let entries: Vec<DueEntry> = decode_listing(enveloped).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].invoice, Some(KeyPart::Id(1)));
    assert_eq!(entries[0].amount, 500.0);
    assert_eq!(entries[0].extra["type"], "debit");

    let bare = r#"[{"invoice": "INV-7", "client": {"id": 5}, "amount": null}]"#;
    let entries: Vec<DueEntry> = decode_listing(bare).unwrap();
    assert_eq!(entries[0].invoice, Some(KeyPart::Code("INV-7".to_string())));
    assert_eq!(entries[0].amount, 0.0);
}

#[test]
fn test_decode_listing_rejects_other_shapes() {
    assert!(decode_listing::<DueEntry>(r#"{"items": []}"#).is_err());
    assert!(decode_head_ids("not json").is_err());
}
