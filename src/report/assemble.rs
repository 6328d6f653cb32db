use super::row::{ReportRow, Total};
use crate::ledger::{ReportType, Side};

/// Aggregated detail rows for each balance sheet section
#[derive(Debug, Clone, Default)]
pub struct BalanceSheetSections {
    pub fixed_asset: Vec<ReportRow>,
    pub current_asset: Vec<ReportRow>,
    pub fixed_liabilities: Vec<ReportRow>,
    pub current_liabilities: Vec<ReportRow>,
    pub equity: Vec<ReportRow>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BalanceSheetTotals {
    pub fixed_asset: f64,
    pub current_asset: f64,
    pub total_assets: f64,
    pub fixed_liabilities: f64,
    pub current_liabilities: f64,
    pub equity: f64,
    pub total_liabilities_equity: f64,
}

#[derive(Debug, Clone)]
pub struct BalanceSheet {
    pub rows: Vec<ReportRow>,
    pub totals: BalanceSheetTotals,
}

#[derive(Debug, Clone, Default)]
pub struct IncomeStatementSections {
    pub revenue: Vec<ReportRow>,
    pub expense: Vec<ReportRow>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomeStatementTotals {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_income: f64,
}

#[derive(Debug, Clone)]
pub struct IncomeStatement {
    pub rows: Vec<ReportRow>,
    pub totals: IncomeStatementTotals,
}

/// Sum of one column; missing amounts count as zero
pub fn section_total(rows: &[ReportRow], side: Side) -> f64 {
    rows.iter()
        .map(|r| r.amount(side).unwrap_or(0.0))
        .fold(0.0, |acc, amount| acc + amount)
}

/// Sub-heading, detail rows, then the section subtotal
fn push_section(out: &mut Vec<ReportRow>, report_type: ReportType, rows: &[ReportRow], total: f64) {
    let segment = report_type.segment();
    out.push(ReportRow::heading(
        format!("subheading-{segment}"),
        report_type.title(),
    ));
    out.extend(rows.iter().cloned());
    out.push(ReportRow::total(
        format!("total-{segment}"),
        format!("Total {}", report_type.title()),
        Total::Amount(total),
    ));
}

pub fn assemble_balance_sheet(sections: &BalanceSheetSections) -> BalanceSheet {
    let fixed_asset = section_total(&sections.fixed_asset, Side::Debit);
    let current_asset = section_total(&sections.current_asset, Side::Debit);
    let fixed_liabilities = section_total(&sections.fixed_liabilities, Side::Credit);
    let current_liabilities = section_total(&sections.current_liabilities, Side::Credit);
    let equity = section_total(&sections.equity, Side::Credit);

    let totals = BalanceSheetTotals {
        fixed_asset,
        current_asset,
        total_assets: fixed_asset + current_asset,
        fixed_liabilities,
        current_liabilities,
        equity,
        total_liabilities_equity: fixed_liabilities + current_liabilities + equity,
    };

    let mut rows = Vec::new();

    rows.push(ReportRow::heading("heading-assets", "Assets"));
    push_section(
        &mut rows,
        ReportType::FixedAsset,
        &sections.fixed_asset,
        fixed_asset,
    );
    push_section(
        &mut rows,
        ReportType::CurrentAsset,
        &sections.current_asset,
        current_asset,
    );
    rows.push(ReportRow::total(
        "total-assets",
        "Total Assets",
        Total::Amount(totals.total_assets),
    ));

    rows.push(ReportRow::heading(
        "heading-liabilities-equity",
        "Liabilities & Equity",
    ));
    push_section(
        &mut rows,
        ReportType::FixedLiabilities,
        &sections.fixed_liabilities,
        fixed_liabilities,
    );
    push_section(
        &mut rows,
        ReportType::CurrentLiabilities,
        &sections.current_liabilities,
        current_liabilities,
    );
    push_section(&mut rows, ReportType::Equity, &sections.equity, equity);
    rows.push(ReportRow::total(
        "total-liabilities-equity",
        "Total Liabilities & Equity",
        Total::Amount(totals.total_liabilities_equity),
    ));

    BalanceSheet { rows, totals }
}

pub fn assemble_income_statement(sections: &IncomeStatementSections) -> IncomeStatement {
    let total_revenue = section_total(&sections.revenue, Side::Credit);
    let total_expenses = section_total(&sections.expense, Side::Debit);
    let totals = IncomeStatementTotals {
        total_revenue,
        total_expenses,
        net_income: total_revenue - total_expenses,
    };

    let mut rows = Vec::new();

    rows.push(ReportRow::heading("heading-revenue", "Revenues"));
    rows.extend(sections.revenue.iter().cloned());
    rows.push(ReportRow::total(
        "total-revenue",
        "Total Revenues",
        Total::Amount(total_revenue),
    ));

    rows.push(ReportRow::heading("heading-expense", "Expenses"));
    rows.extend(sections.expense.iter().cloned());
    rows.push(ReportRow::total(
        "total-expense",
        "Total Expenses",
        Total::parenthesized(total_expenses),
    ));

    rows.push(ReportRow::total(
        "net-income",
        "Net Income",
        Total::Amount(totals.net_income),
    ));

    IncomeStatement { rows, totals }
}
