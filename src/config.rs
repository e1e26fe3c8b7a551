//! HTTP設定とアプリケーション設定
//!
//! 優先順位: CLI フラグ > 環境変数 > デフォルト値

use crate::env::{EnvVar, API_URL_VAR, TIMEOUT_VAR};
use crate::error::{CountriesError, Result};
use reqwest::Client;
use std::time::Duration;

/// 国一覧を返す公開エンドポイント
pub const DEFAULT_ENDPOINT: &str =
    "https://restcountries.com/v2/all?fields=name,region,area,independent";

/// デフォルトのタイムアウト（秒）
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HTTP設定
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// タイムアウト（None なら無制限）
    pub timeout: Option<Duration>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            user_agent: concat!("countries/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    /// reqwest::Client を構築
    pub fn build_client(&self) -> Client {
        let mut builder = Client::builder().user_agent(&self.user_agent);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        builder.build().unwrap_or_else(|_| Client::new())
    }
}

/// アプリケーション設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 国一覧の取得先
    pub endpoint: String,
    pub http: HttpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            http: HttpConfig::default(),
        }
    }
}

impl AppConfig {
    /// CLI フラグと環境変数から設定を解決
    ///
    /// タイムアウト 0 は「タイムアウトなし」を意味する。
    pub fn resolve(url: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(endpoint) = url.or_else(|| EnvVar::get(API_URL_VAR)) {
            config.endpoint = endpoint;
        }

        let timeout_secs = match timeout_secs {
            Some(secs) => Some(secs),
            None => EnvVar::get(TIMEOUT_VAR)
                .map(|raw| parse_timeout(&raw))
                .transpose()?,
        };

        if let Some(secs) = timeout_secs {
            config.http.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn parse_timeout(raw: &str) -> Result<u64> {
    raw.trim().parse::<u64>().map_err(|_| {
        CountriesError::InvalidConfig(format!(
            "{TIMEOUT_VAR} must be a whole number of seconds, got '{raw}'"
        ))
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
