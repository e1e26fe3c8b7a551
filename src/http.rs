//! 共通HTTPヘルパー

use crate::error::{CountriesError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;

/// GET してレスポンスボディを取得
///
/// 2xx 以外は `CountriesError::Api` として返す。
pub async fn fetch_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let response = client.get(url).send().await?;
    let status = response.status();

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(CountriesError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

/// スピナー付きで GET する（非対話モード用）
pub async fn fetch_bytes_with_spinner(client: &Client, url: &str) -> Result<Vec<u8>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} Loading countries...")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = fetch_bytes(client, url).await;
    pb.finish_and_clear();
    result
}
