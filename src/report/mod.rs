mod adjust;
mod aggregate;
mod assemble;
mod due;
mod format;
mod row;
mod statement;

pub use adjust::{adjust_receivable, ACCOUNTS_RECEIVABLE, CASH_ACCOUNT};
pub use aggregate::{aggregate, rows_from_lines};
pub use assemble::{
    assemble_balance_sheet, assemble_income_statement, section_total, BalanceSheet,
    BalanceSheetSections, BalanceSheetTotals, IncomeStatement, IncomeStatementSections,
    IncomeStatementTotals,
};
pub use due::{compute_due, due_key, filter_positive, DueRow};
pub use format::{format_grouped_int, format_money};
pub use row::{ReportRow, Total};
pub use statement::{balance_sheet, income_statement, receivables};
