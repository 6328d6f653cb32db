use serde::Serialize;

use crate::ledger::Side;

/// Value of a subtotal or total row. Most totals are plain amounts; a few are
/// pre-formatted for display (e.g. `"(2500)"` for total expenses).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Total {
    Amount(f64),
    Formatted(String),
}

impl Total {
    /// Expenses are shown in parentheses
    pub fn parenthesized(value: f64) -> Self {
        Total::Formatted(format!("({value})"))
    }
}

/// A single line of a financial statement
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub id: String,
    pub details: String,
    /// Debit side: assets, expenses
    pub amount1: Option<f64>,
    /// Credit side: liabilities, equity, revenue
    pub amount2: Option<f64>,
    pub is_heading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Total>,
}

impl ReportRow {
    pub fn heading(id: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            details: details.into(),
            amount1: None,
            amount2: None,
            is_heading: true,
            total: None,
        }
    }

    pub fn detail(
        id: impl Into<String>,
        details: impl Into<String>,
        side: Side,
        amount: f64,
    ) -> Self {
        let (amount1, amount2) = match side {
            Side::Debit => (Some(amount), None),
            Side::Credit => (None, Some(amount)),
        };
        Self {
            id: id.into(),
            details: details.into(),
            amount1,
            amount2,
            is_heading: false,
            total: None,
        }
    }

    pub fn total(id: impl Into<String>, details: impl Into<String>, total: Total) -> Self {
        Self {
            id: id.into(),
            details: details.into(),
            amount1: None,
            amount2: None,
            is_heading: false,
            total: Some(total),
        }
    }

    pub fn amount(&self, side: Side) -> Option<f64> {
        match side {
            Side::Debit => self.amount1,
            Side::Credit => self.amount2,
        }
    }

    pub fn amount_mut(&mut self, side: Side) -> &mut Option<f64> {
        match side {
            Side::Debit => &mut self.amount1,
            Side::Credit => &mut self.amount2,
        }
    }
}
