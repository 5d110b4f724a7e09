use crate::error::{DashboardError, Result};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub host: String,
    pub port: u16,
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            request_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string())
            .trim_end_matches('/')
            .to_string();

        let host = env::var("DASHBOARD_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("DASHBOARD_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| DashboardError::Config("Invalid DASHBOARD_PORT".to_string()))?;

        let request_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    DashboardError::Config("Invalid REQUEST_TIMEOUT_SECS".to_string())
                })?;
                (secs > 0).then(|| Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let config = Self {
            api_base_url,
            host,
            port,
            request_timeout,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            return Err(DashboardError::Config("API_BASE_URL must not be empty".into()));
        }
        let url = &self.api_base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DashboardError::Config(
                "API_BASE_URL must start with http:// or https://".into(),
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
