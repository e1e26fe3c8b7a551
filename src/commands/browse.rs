//! 国一覧ブラウザ（TUI）コマンド
//!
//! `countries` または `countries browse` で起動する。

use crate::config::AppConfig;
use crate::tui;

pub async fn run(config: AppConfig) -> Result<(), String> {
    tui::run(config).await.map_err(|e| e.to_string())
}
