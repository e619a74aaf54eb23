#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{NylasError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_API_URI: &str = "https://api.us.nylas.com";
pub const EU_API_URI: &str = "https://api.eu.nylas.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Us,
    Eu,
}

impl Region {
    pub fn api_uri(&self) -> &'static str {
        match self {
            Region::Us => DEFAULT_API_URI,
            Region::Eu => EU_API_URI,
        }
    }
}

impl std::str::FromStr for Region {
    type Err = NylasError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            other => Err(NylasError::InvalidConfigValueError {
                field: "region".to_string(),
                value: other.to_string(),
                reason: "Valid regions: us, eu".to_string(),
            }),
        }
    }
}

fn default_api_uri() -> String {
    DEFAULT_API_URI.to_string()
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_key: String,
    #[serde(default = "default_api_uri")]
    pub api_uri: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

// api_key 不可出現在日誌中
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("api_uri", &self.api_uri)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_uri: default_api_uri(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }

    pub fn with_api_uri(mut self, api_uri: impl Into<String>) -> Self {
        self.api_uri = api_uri.into();
        self
    }

    pub fn with_region(self, region: Region) -> Self {
        self.with_api_uri(region.api_uri())
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Reads `NYLAS_API_KEY` (required), `NYLAS_API_URI` and `NYLAS_TIMEOUT`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("NYLAS_API_KEY").map_err(|_| NylasError::MissingConfigError {
            field: "NYLAS_API_KEY".to_string(),
        })?;

        let mut config = Self::new(api_key);
        if let Ok(api_uri) = std::env::var("NYLAS_API_URI") {
            config.api_uri = api_uri;
        }
        if let Ok(timeout) = std::env::var("NYLAS_TIMEOUT") {
            config.timeout_seconds =
                timeout
                    .parse()
                    .map_err(|_| NylasError::InvalidConfigValueError {
                        field: "NYLAS_TIMEOUT".to_string(),
                        value: timeout.clone(),
                        reason: "Expected a whole number of seconds".to_string(),
                    })?;
        }

        Ok(config)
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NylasError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// 替換環境變數 (例如 ${NYLAS_API_KEY})；未設定的變數保留原樣
fn substitute_env_vars(content: &str) -> Result<String> {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NylasError::ConfigError {
        message: e.to_string(),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_url("api_uri", &self.api_uri)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 3600)?;
        Ok(())
    }
}
