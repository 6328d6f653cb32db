use serde::{Deserialize, Serialize};

/// Who a report is requested for. Passed into every fetch instead of being
/// read from ambient state.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    #[serde(default)]
    pub user_id: Option<u64>,
    #[serde(default)]
    pub company_id: Option<u64>,
}

impl RequestContext {
    /// Apply command-line overrides on top of the configured context
    pub fn with_overrides(self, user_id: Option<u64>, company_id: Option<u64>) -> Self {
        Self {
            user_id: user_id.or(self.user_id),
            company_id: company_id.or(self.company_id),
        }
    }
}
