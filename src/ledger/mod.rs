mod fetcher;

pub use fetcher::{
    decode_head_ids, head_query, join_ids, journal_path, section_lines, transaction_query,
    HttpLedger, LedgerSource,
};

use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{ReportError, Result};

/// Which column of a statement a section's amounts land in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `amount1`: assets and expenses
    Debit,
    /// `amount2`: liabilities, equity and revenue
    Credit,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Debit => "debit",
            Side::Credit => "credit",
        }
    }
}

/// A report section, as understood by the `/journals/<reportType>` endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    FixedAsset,
    CurrentAsset,
    FixedLiabilities,
    CurrentLiabilities,
    Equity,
    Revenue,
    Expense,
}

impl ReportType {
    pub const BALANCE_SHEET: [ReportType; 5] = [
        ReportType::FixedAsset,
        ReportType::CurrentAsset,
        ReportType::FixedLiabilities,
        ReportType::CurrentLiabilities,
        ReportType::Equity,
    ];

    pub const INCOME_STATEMENT: [ReportType; 2] = [ReportType::Revenue, ReportType::Expense];

    /// URL segment used by the backend
    pub fn segment(&self) -> &'static str {
        match self {
            ReportType::FixedAsset => "fixedAsset",
            ReportType::CurrentAsset => "currentAsset",
            ReportType::FixedLiabilities => "fixedLiabilities",
            ReportType::CurrentLiabilities => "currentLiabilities",
            ReportType::Equity => "equity",
            ReportType::Revenue => "revenue",
            ReportType::Expense => "expense",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ReportType::FixedAsset => "Fixed Assets",
            ReportType::CurrentAsset => "Current Assets",
            ReportType::FixedLiabilities => "Fixed Liabilities",
            ReportType::CurrentLiabilities => "Current Liabilities",
            ReportType::Equity => "Equity",
            ReportType::Revenue => "Revenues",
            ReportType::Expense => "Expenses",
        }
    }

    pub fn side(&self) -> Side {
        match self {
            ReportType::FixedAsset | ReportType::CurrentAsset | ReportType::Expense => Side::Debit,
            ReportType::FixedLiabilities
            | ReportType::CurrentLiabilities
            | ReportType::Equity
            | ReportType::Revenue => Side::Credit,
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// One side of the posted entries for an account head over a date range
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct JournalLine {
    pub name: String,
    pub amount: f64,
}

impl JournalLine {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }
}

/// Inclusive reporting period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ReportError::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// 1 January of `today`'s year through `today`
    pub fn year_to_date(today: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
        Self { start, end: today }
    }

    /// Build a range from optional `YYYY-MM-DD` inputs, defaulting to year to date
    pub fn from_args(from: Option<&str>, to: Option<&str>, today: NaiveDate) -> Result<Self> {
        let default = Self::year_to_date(today);
        let start = from.map(parse_date).transpose()?.unwrap_or(default.start);
        let end = to.map(parse_date).transpose()?.unwrap_or(default.end);
        Self::new(start, end)
    }

    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ReportError::InvalidDate(s.to_string()))
}

/// Invoice or client reference on a transaction. The backend may send a
/// bare id, a string code, or a populated relation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum KeyPart {
    Id(u64),
    Code(String),
    Relation {
        id: u64,
        /// Populated relation fields, re-emitted as received
        #[serde(flatten)]
        fields: serde_json::Map<String, serde_json::Value>,
    },
}

impl KeyPart {
    pub fn relation(id: u64) -> Self {
        KeyPart::Relation {
            id,
            fields: serde_json::Map::new(),
        }
    }
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Id(id) | KeyPart::Relation { id, .. } => write!(f, "{id}"),
            KeyPart::Code(code) => f.write_str(code),
        }
    }
}

/// A debit or credit transaction against a receivable
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DueEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<KeyPart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<KeyPart>,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub amount: f64,
    /// Remaining transaction fields, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn null_as_zero<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl DueEntry {
    pub fn new(invoice: Option<KeyPart>, client: Option<KeyPart>, amount: f64) -> Self {
        Self {
            invoice,
            client,
            amount,
            extra: serde_json::Map::new(),
        }
    }
}

/// List responses arrive either wrapped in a `data` envelope or bare
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Envelope { data: Vec<T> },
    Bare(Vec<T>),
}

/// Decode a list response, unwrapping the `data` envelope when present
pub fn decode_listing<T: DeserializeOwned>(body: &str) -> serde_json::Result<Vec<T>> {
    let listing: Listing<T> = serde_json::from_str(body)?;
    Ok(match listing {
        Listing::Envelope { data } => data,
        Listing::Bare(items) => items,
    })
}
