//! データローダー
//!
//! 起動時に一度だけ国一覧を取得し、名前順に並べて返す。
//! リトライは行わない。

use crate::country::{sort_by_name, Country};
use crate::error::Result;
use crate::http;
use reqwest::Client;

/// JSON 配列を国一覧としてパースし、名前順にソート
pub fn parse_countries(body: &[u8]) -> Result<Vec<Country>> {
    let mut countries: Vec<Country> = serde_json::from_slice(body)?;
    sort_by_name(&mut countries);
    Ok(countries)
}

/// 国一覧を取得
pub async fn load_countries(client: &Client, url: &str) -> Result<Vec<Country>> {
    tracing::info!(%url, "fetching countries");
    let body = http::fetch_bytes(client, url).await?;
    let countries = parse_countries(&body)?;
    tracing::info!(count = countries.len(), "countries loaded");
    Ok(countries)
}

/// スピナー付きで国一覧を取得（非対話モード用）
pub async fn load_countries_with_spinner(client: &Client, url: &str) -> Result<Vec<Country>> {
    tracing::info!(%url, "fetching countries");
    let body = http::fetch_bytes_with_spinner(client, url).await?;
    let countries = parse_countries(&body)?;
    tracing::info!(count = countries.len(), "countries loaded");
    Ok(countries)
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod tests;
