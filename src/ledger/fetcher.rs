use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;
use ureq::Agent;

use super::{decode_listing, DateRange, DueEntry, JournalLine, ReportType, Side};
use crate::config::{AccountHeadGroup, BackendSettings, HeadSettings, RequestContext};
use crate::error::{ReportError, Result};

/// Read access to the ledger backend
pub trait LedgerSource {
    /// Ids of the individual accounts classified under `group`
    fn head_ids(&self, group: AccountHeadGroup, ctx: &RequestContext) -> Result<Vec<u64>>;

    /// Per-account journal totals for one report section
    fn journal_lines(
        &self,
        report_type: ReportType,
        ids: &[u64],
        range: &DateRange,
        ctx: &RequestContext,
    ) -> Result<Vec<JournalLine>>;

    /// All receivable transactions on one side
    fn due_entries(&self, side: Side, ctx: &RequestContext) -> Result<Vec<DueEntry>>;
}

/// Comma-joined id filter. An empty set becomes `0` so the URL keeps its shape.
pub fn join_ids(ids: &[u64]) -> String {
    if ids.is_empty() {
        return "0".to_string();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn journal_path(report_type: ReportType, ids: &[u64]) -> String {
    format!("/journals/{}/{}", report_type.segment(), join_ids(ids))
}

pub fn head_query(group: AccountHeadGroup, ctx: &RequestContext) -> Vec<(String, String)> {
    let mut query = vec![
        ("populate".to_string(), "id".to_string()),
        (
            "filters[account][id][$eq]".to_string(),
            group.account.to_string(),
        ),
        (
            "filters[sub_account][id][$eq]".to_string(),
            group.sub_account.to_string(),
        ),
    ];
    push_company_filter(&mut query, ctx);
    query
}

pub fn transaction_query(side: Side, ctx: &RequestContext) -> Vec<(String, String)> {
    let mut query = vec![
        ("populate".to_string(), "*".to_string()),
        ("filters[type][$eq]".to_string(), side.as_str().to_string()),
    ];
    push_company_filter(&mut query, ctx);
    query
}

fn push_company_filter(query: &mut Vec<(String, String)>, ctx: &RequestContext) {
    if let Some(company_id) = ctx.company_id {
        query.push((
            "filters[company][id][$eq]".to_string(),
            company_id.to_string(),
        ));
    }
}

/// Head lookup followed by the journal fetch for a single section
pub fn section_lines(
    source: &dyn LedgerSource,
    report_type: ReportType,
    heads: &HeadSettings,
    range: &DateRange,
    ctx: &RequestContext,
) -> Result<Vec<JournalLine>> {
    let ids = source.head_ids(heads.group(report_type), ctx)?;
    tracing::debug!(section = %report_type, heads = ids.len(), "resolved account heads");
    source.journal_lines(report_type, &ids, range, ctx)
}

#[derive(Debug, Deserialize)]
struct HeadRef {
    id: u64,
}

/// Ids from an `/individual-accounts` response
pub fn decode_head_ids(body: &str) -> serde_json::Result<Vec<u64>> {
    let heads: Vec<HeadRef> = decode_listing(body)?;
    Ok(heads.into_iter().map(|h| h.id).collect())
}

/// `LedgerSource` backed by the REST API
pub struct HttpLedger {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl HttpLedger {
    pub fn new(settings: &BackendSettings) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(settings.timeout_secs)))
            .build()
            .into();

        Self {
            agent,
            base_url: settings.trimmed_base_url().to_string(),
            token: settings.token.clone(),
        }
    }

    /// Returns the request URL alongside the raw body
    fn get_body(&self, path: &str, query: &[(String, String)]) -> Result<(String, String)> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, ?query, "GET");

        let mut request = self.agent.get(url.as_str());
        for (key, value) in query {
            request = request.query(key, value);
        }
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let body = request.call()?.body_mut().read_to_string()?;
        Ok((url, body))
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(String, String)]) -> Result<T> {
        let (url, body) = self.get_body(path, query)?;
        serde_json::from_str(&body).map_err(|source| ReportError::Decode { url, source })
    }

    fn get_listing<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Vec<T>> {
        let (url, body) = self.get_body(path, query)?;
        decode_listing(&body).map_err(|source| ReportError::Decode { url, source })
    }
}

impl LedgerSource for HttpLedger {
    fn head_ids(&self, group: AccountHeadGroup, ctx: &RequestContext) -> Result<Vec<u64>> {
        let (url, body) = self.get_body("/individual-accounts", &head_query(group, ctx))?;
        decode_head_ids(&body).map_err(|source| ReportError::Decode { url, source })
    }

    fn journal_lines(
        &self,
        report_type: ReportType,
        ids: &[u64],
        range: &DateRange,
        _ctx: &RequestContext,
    ) -> Result<Vec<JournalLine>> {
        let query = [
            ("startDate".to_string(), range.start_param()),
            ("endDate".to_string(), range.end_param()),
        ];
        self.get(&journal_path(report_type, ids), &query)
    }

    fn due_entries(&self, side: Side, ctx: &RequestContext) -> Result<Vec<DueEntry>> {
        self.get_listing("/transactions", &transaction_query(side, ctx))
    }
}
