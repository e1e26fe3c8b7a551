use thiserror::Error;

/// countries 統一エラー型
#[derive(Debug, Error)]
pub enum CountriesError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Countries API error: {message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CountriesError>;

impl CountriesError {
    /// ネットワーク到達性の問題かどうか（ログのレベル分けに使用）
    pub fn is_transport(&self) -> bool {
        match self {
            CountriesError::Network(_) => true,
            CountriesError::Api { status, .. } => *status >= 500 && *status < 600,
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
