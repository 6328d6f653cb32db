pub mod config;
pub mod error;
pub mod ledger;
pub mod report;

pub use config::{Config, HeadSettings, RequestContext};
pub use error::{ReportError, Result};
pub use ledger::{DateRange, HttpLedger, JournalLine, LedgerSource, ReportType, Side};
pub use report::{ReportRow, Total};
