mod backend;
mod context;
mod heads;

pub use backend::BackendSettings;
pub use context::RequestContext;
pub use heads::{AccountHeadGroup, HeadSettings};

use crate::error::{ReportError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub backend: BackendSettings,
    #[serde(default)]
    pub context: RequestContext,
    #[serde(default)]
    pub heads: HeadSettings,
    #[serde(default)]
    pub report: ReportSettings,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ReportSettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Get the config directory path (~/.ledger-report/)
pub fn config_dir() -> Result<PathBuf> {
    // First try XDG-style directories
    if let Some(proj_dirs) = ProjectDirs::from("", "", "ledger-report") {
        return Ok(proj_dirs.config_dir().to_path_buf());
    }

    // Fallback to ~/.ledger-report/
    let home = dirs_home().ok_or_else(|| {
        ReportError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Could not determine home directory",
        ))
    })?;

    Ok(home.join(".ledger-report"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Load the main config.toml
pub fn load_config(config_dir: &Path) -> Result<Config> {
    if !config_dir.exists() {
        return Err(ReportError::ConfigNotFound(config_dir.to_path_buf()));
    }
    let path = config_dir.join("config.toml");
    if !path.exists() {
        return Err(ReportError::ConfigFileNotFound(path));
    }
    let content = fs::read_to_string(&path)?;
    parse_config(&content).map_err(|e| ReportError::ConfigParse { path, source: e })
}

pub fn parse_config(content: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(content)
}

/// Template content for config.toml
pub const CONFIG_TEMPLATE: &str = r#"[backend]
base_url = "http://localhost:1337/api"
# token = "paste-an-api-token-here"   # optional, sent as a bearer token
timeout_secs = 10

[context]
# user_id = 1       # optional
# company_id = 1    # optional, scopes account heads and transactions

[report]
currency_symbol = "$"

# Individual accounts are grouped by (account, sub_account). Each report
# section fetches the heads of one group.
[heads]
fixed_asset = { account = 1, sub_account = 2 }
current_asset = { account = 1, sub_account = 1 }
fixed_liabilities = { account = 2, sub_account = 3 }
current_liabilities = { account = 2, sub_account = 4 }
equity = { account = 3, sub_account = 5 }
revenue = { account = 4, sub_account = 6 }
expense = { account = 5, sub_account = 7 }
"#;
