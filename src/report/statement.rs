use super::adjust::adjust_receivable;
use super::aggregate::{aggregate, rows_from_lines};
use super::assemble::{
    assemble_balance_sheet, assemble_income_statement, BalanceSheet, BalanceSheetSections,
    IncomeStatement, IncomeStatementSections,
};
use super::due::{compute_due, filter_positive, DueRow};
use super::row::ReportRow;
use crate::config::{HeadSettings, RequestContext};
use crate::error::Result;
use crate::ledger::{section_lines, DateRange, DueEntry, LedgerSource, ReportType, Side};

fn fetch_section(
    source: &dyn LedgerSource,
    report_type: ReportType,
    heads: &HeadSettings,
    range: &DateRange,
    ctx: &RequestContext,
) -> Result<Vec<ReportRow>> {
    let lines = section_lines(source, report_type, heads, range, ctx)?;
    let rows = rows_from_lines(report_type, &lines);
    Ok(aggregate(rows, report_type.side()))
}

fn fetch_balance_sections(
    source: &dyn LedgerSource,
    heads: &HeadSettings,
    range: &DateRange,
    ctx: &RequestContext,
) -> Result<BalanceSheetSections> {
    let fixed_asset = fetch_section(source, ReportType::FixedAsset, heads, range, ctx)?;
    let mut current_asset = fetch_section(source, ReportType::CurrentAsset, heads, range, ctx)?;
    let fixed_liabilities =
        fetch_section(source, ReportType::FixedLiabilities, heads, range, ctx)?;
    let current_liabilities =
        fetch_section(source, ReportType::CurrentLiabilities, heads, range, ctx)?;
    let equity = fetch_section(source, ReportType::Equity, heads, range, ctx)?;

    adjust_receivable(&mut current_asset);

    Ok(BalanceSheetSections {
        fixed_asset,
        current_asset,
        fixed_liabilities,
        current_liabilities,
        equity,
    })
}

/// Fetch, aggregate and assemble the balance sheet.
///
/// A failure anywhere in the fetch chain is logged and yields the empty
/// report (all sections empty, zero totals).
pub fn balance_sheet(
    source: &dyn LedgerSource,
    heads: &HeadSettings,
    range: &DateRange,
    ctx: &RequestContext,
) -> BalanceSheet {
    let sections = fetch_balance_sections(source, heads, range, ctx).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to fetch balance sheet");
        BalanceSheetSections::default()
    });
    assemble_balance_sheet(&sections)
}

fn fetch_income_sections(
    source: &dyn LedgerSource,
    heads: &HeadSettings,
    range: &DateRange,
    ctx: &RequestContext,
) -> Result<IncomeStatementSections> {
    Ok(IncomeStatementSections {
        revenue: fetch_section(source, ReportType::Revenue, heads, range, ctx)?,
        expense: fetch_section(source, ReportType::Expense, heads, range, ctx)?,
    })
}

/// Fetch, aggregate and assemble the income statement. Failures behave as
/// in [`balance_sheet`].
pub fn income_statement(
    source: &dyn LedgerSource,
    heads: &HeadSettings,
    range: &DateRange,
    ctx: &RequestContext,
) -> IncomeStatement {
    let sections = fetch_income_sections(source, heads, range, ctx).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to fetch income statement");
        IncomeStatementSections::default()
    });
    assemble_income_statement(&sections)
}

fn fetch_due_entries(
    source: &dyn LedgerSource,
    ctx: &RequestContext,
) -> Result<(Vec<DueEntry>, Vec<DueEntry>)> {
    let debits = source.due_entries(Side::Debit, ctx)?;
    let credits = source.due_entries(Side::Credit, ctx)?;
    Ok((debits, credits))
}

/// Outstanding receivables per invoice/client pair; empty on fetch failure
pub fn receivables(source: &dyn LedgerSource, ctx: &RequestContext) -> Vec<DueRow> {
    match fetch_due_entries(source, ctx) {
        Ok((debits, credits)) => {
            let due = compute_due(&debits, &credits);
            tracing::debug!(pairs = due.len(), "computed due amounts");
            filter_positive(&debits, &due)
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch receivables");
            Vec::new()
        }
    }
}
