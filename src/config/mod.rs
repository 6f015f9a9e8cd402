use crate::core::PollerConfig;
use crate::utils::error::{FetchError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "fintab")]
#[command(about = "HTTP backend that projects Plaid responses into display tables")]
pub struct CliArgs {
    /// TOML configuration file; defaults apply when omitted
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Overrides [server].port from the configuration file
    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub plaid: PlaidConfig,
    pub fetch: FetchConfig,
    pub poller: PollerSettings,
    pub assets: AssetsConfig,
    pub transfer: TransferConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Overall per-operation deadline; aborts a stuck polling loop
    /// instead of letting it run up the full attempt cap.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            request_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaidConfig {
    /// `sandbox`, `development`, `production`, or a full base URL
    /// (the latter is what the integration tests point at a mock).
    pub environment: String,
    pub client_id: String,
    pub secret: String,
    /// Already-exchanged item access token supplied by the link flow;
    /// this service never acquires or refreshes tokens itself.
    pub access_token: String,
    /// Per-call HTTP timeout, distinct from the operation deadline.
    pub timeout_secs: u64,
}

impl Default for PlaidConfig {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            client_id: String::new(),
            secret: String::new(),
            access_token: String::new(),
            timeout_secs: 10,
        }
    }
}

impl PlaidConfig {
    pub fn base_url(&self) -> String {
        match self.environment.as_str() {
            "sandbox" => "https://sandbox.plaid.com".to_string(),
            "development" => "https://development.plaid.com".to_string(),
            "production" => "https://production.plaid.com".to_string(),
            url => url.trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Transaction page size per request
    pub page_size: u32,
    /// Transaction date window, counted back from today
    pub window_days: i64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            page_size: 100,
            window_days: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollerSettings {
    pub max_attempts: u32,
    pub interval_ms: u64,
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            max_attempts: 10,
            interval_ms: 1000,
        }
    }
}

impl PollerSettings {
    pub fn to_poller_config(&self) -> PollerConfig {
        PollerConfig {
            max_attempts: self.max_attempts,
            interval: Duration::from_millis(self.interval_ms),
        }
    }
}

/// Demo identity attached to asset-report requests. Sandbox data only;
/// a real deployment would source this from the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    pub days_requested: u32,
    pub client_report_id: String,
    pub client_user_id: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub ssn: String,
    pub phone_number: String,
    pub email: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            days_requested: 10,
            client_report_id: "Custom Report ID #123".to_string(),
            client_user_id: "Custom User ID #456".to_string(),
            first_name: "Alice".to_string(),
            middle_name: "Bobcat".to_string(),
            last_name: "Cranberry".to_string(),
            ssn: "123-45-6789".to_string(),
            phone_number: "555-123-4567".to_string(),
            email: "alice@example.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferConfig {
    pub amount: String,
    pub legal_name: String,
    pub phone_number: String,
    pub email_address: String,
    pub idempotency_key: String,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            amount: "1.34".to_string(),
            legal_name: "Alice Cranberry".to_string(),
            phone_number: "555-123-4567".to_string(),
            email_address: "alice@example.com".to_string(),
            idempotency_key: "1223abc456xyz7890001".to_string(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置；沒有檔案時使用預設值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                toml::from_str(&content).map_err(|e| FetchError::ConfigError {
                    message: format!("failed to parse {}: {}", path.display(), e),
                })
            }
            None => Ok(Self::default()),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("plaid.client_id", &self.plaid.client_id)?;
        validate_non_empty_string("plaid.secret", &self.plaid.secret)?;
        validate_non_empty_string("plaid.access_token", &self.plaid.access_token)?;

        match self.plaid.environment.as_str() {
            "sandbox" | "development" | "production" => {}
            other => validate_url("plaid.environment", other)?,
        }

        validate_range("fetch.page_size", self.fetch.page_size, 1, 500)?;
        validate_range("fetch.window_days", self.fetch.window_days, 1, 3650)?;
        validate_positive_number("poller.max_attempts", self.poller.max_attempts as usize, 1)?;
        validate_positive_number("poller.interval_ms", self.poller.interval_ms as usize, 1)?;
        validate_positive_number(
            "server.request_timeout_secs",
            self.server.request_timeout_secs as usize,
            1,
        )?;
        validate_non_empty_string("transfer.amount", &self.transfer.amount)?;
        validate_non_empty_string("transfer.idempotency_key", &self.transfer.idempotency_key)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.plaid.client_id = "client-id".to_string();
        config.plaid.secret = "secret".to_string();
        config.plaid.access_token = "access-sandbox-123".to_string();
        config
    }

    #[test]
    fn test_defaults_match_demo_literals() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.fetch.page_size, 100);
        assert_eq!(config.fetch.window_days, 30);
        assert_eq!(config.poller.max_attempts, 10);
        assert_eq!(config.poller.interval_ms, 1000);
        assert_eq!(config.assets.days_requested, 10);
        assert_eq!(config.transfer.amount, "1.34");
    }

    #[test]
    fn test_environment_maps_to_base_url() {
        let mut plaid = PlaidConfig::default();
        assert_eq!(plaid.base_url(), "https://sandbox.plaid.com");

        plaid.environment = "production".to_string();
        assert_eq!(plaid.base_url(), "https://production.plaid.com");

        plaid.environment = "http://127.0.0.1:9090/".to_string();
        assert_eq!(plaid.base_url(), "http://127.0.0.1:9090");
    }

    #[test]
    fn test_validation_requires_credentials() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.plaid.secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_environment() {
        let mut config = valid_config();
        config.plaid.environment = "staging".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_attempts() {
        let mut config = valid_config();
        config.poller.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [plaid]
            client_id = "id"
            secret = "shh"
            access_token = "access-sandbox-42"

            [poller]
            interval_ms = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.plaid.client_id, "id");
        assert_eq!(config.poller.interval_ms, 50);
        assert_eq!(config.poller.max_attempts, 10);
        assert_eq!(config.server.port, 8000);
    }
}
