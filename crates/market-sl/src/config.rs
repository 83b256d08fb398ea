/*
[INPUT]:  YAML settings file, CLI overrides
[OUTPUT]: Parsed client settings
[POS]:    Configuration layer - endpoint and transport setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use market_sl_adapter::http::DEFAULT_BASE_URL;
use market_sl_adapter::ClientConfig;
use serde::{Deserialize, Serialize};

/// Optional settings file; every field has a default
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Exchange REST base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Whole-request timeout; reqwest default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: None,
            connect_timeout_secs: None,
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Settings {
    /// Load settings from YAML file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        let settings: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse settings file {}", path.display()))?;
        Ok(settings)
    }

    /// File (if any), then `--api-url` / `MARKET_SL_API_URL`
    pub fn resolve(path: Option<&Path>, api_url: Option<String>) -> anyhow::Result<Self> {
        let mut settings = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if let Some(api_url) = api_url {
            settings.api_url = api_url;
        }
        Ok(settings)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
        }
    }
}
