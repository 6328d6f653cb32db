use super::row::ReportRow;

pub const ACCOUNTS_RECEIVABLE: &str = "Accounts Receivable";
pub const CASH_ACCOUNT: &str = "Cash Account";

/// Net cash collected out of the receivable balance.
///
/// Applies only when both rows are present, and must run once on the
/// aggregated current assets before totals are taken.
pub fn adjust_receivable(rows: &mut [ReportRow]) {
    let Some(cash) = rows
        .iter()
        .find(|r| r.details == CASH_ACCOUNT)
        .map(|r| r.amount1.unwrap_or(0.0))
    else {
        return;
    };

    if let Some(receivable) = rows.iter_mut().find(|r| r.details == ACCOUNTS_RECEIVABLE) {
        receivable.amount1 = Some(receivable.amount1.unwrap_or(0.0) - cash);
    }
}
