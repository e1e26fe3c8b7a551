//! ログ出力の初期化
//!
//! 標準出力は TUI が使うため、ログはファイルが指定された場合のみ出力する。
//! レベルは `RUST_LOG`（未指定なら `info`）。

use crate::env::{EnvVar, LOG_FILE_VAR};
use crate::error::Result;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// ログファイルの出力先を解決（CLI フラグ > 環境変数）
pub fn resolve_log_path(flag: Option<PathBuf>) -> Option<PathBuf> {
    flag.or_else(|| EnvVar::get(LOG_FILE_VAR).map(PathBuf::from))
}

/// tracing サブスクライバーを初期化
pub fn init(flag: Option<PathBuf>) -> Result<()> {
    let Some(path) = resolve_log_path(flag) else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // 既にサブスクライバーが設定済みなら何もしない
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(())
}
