use serde::{Deserialize, Serialize};

use crate::ledger::ReportType;

/// An `(account, sub_account)` classification of individual accounts
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct AccountHeadGroup {
    pub account: u64,
    pub sub_account: u64,
}

impl AccountHeadGroup {
    pub const fn new(account: u64, sub_account: u64) -> Self {
        Self {
            account,
            sub_account,
        }
    }
}

/// Account-head classification for each report section
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HeadSettings {
    #[serde(default = "default_fixed_asset")]
    pub fixed_asset: AccountHeadGroup,
    #[serde(default = "default_current_asset")]
    pub current_asset: AccountHeadGroup,
    #[serde(default = "default_fixed_liabilities")]
    pub fixed_liabilities: AccountHeadGroup,
    #[serde(default = "default_current_liabilities")]
    pub current_liabilities: AccountHeadGroup,
    #[serde(default = "default_equity")]
    pub equity: AccountHeadGroup,
    #[serde(default = "default_revenue")]
    pub revenue: AccountHeadGroup,
    #[serde(default = "default_expense")]
    pub expense: AccountHeadGroup,
}

fn default_fixed_asset() -> AccountHeadGroup {
    AccountHeadGroup::new(1, 2)
}

fn default_current_asset() -> AccountHeadGroup {
    AccountHeadGroup::new(1, 1)
}

fn default_fixed_liabilities() -> AccountHeadGroup {
    AccountHeadGroup::new(2, 3)
}

fn default_current_liabilities() -> AccountHeadGroup {
    AccountHeadGroup::new(2, 4)
}

fn default_equity() -> AccountHeadGroup {
    AccountHeadGroup::new(3, 5)
}

fn default_revenue() -> AccountHeadGroup {
    AccountHeadGroup::new(4, 6)
}

fn default_expense() -> AccountHeadGroup {
    AccountHeadGroup::new(5, 7)
}

impl Default for HeadSettings {
    fn default() -> Self {
        Self {
            fixed_asset: default_fixed_asset(),
            current_asset: default_current_asset(),
            fixed_liabilities: default_fixed_liabilities(),
            current_liabilities: default_current_liabilities(),
            equity: default_equity(),
            revenue: default_revenue(),
            expense: default_expense(),
        }
    }
}

impl HeadSettings {
    pub fn group(&self, report_type: ReportType) -> AccountHeadGroup {
        match report_type {
            ReportType::FixedAsset => self.fixed_asset,
            ReportType::CurrentAsset => self.current_asset,
            ReportType::FixedLiabilities => self.fixed_liabilities,
            ReportType::CurrentLiabilities => self.current_liabilities,
            ReportType::Equity => self.equity,
            ReportType::Revenue => self.revenue,
            ReportType::Expense => self.expense,
        }
    }
}
