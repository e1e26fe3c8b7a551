/// 環境変数ユーティリティ
pub struct EnvVar;

impl EnvVar {
    /// 環境変数を取得（空文字列はNoneとして扱う）
    pub fn get(key: &str) -> Option<String> {
        std::env::var(key).ok().filter(|s| !s.is_empty())
    }
}

/// エンドポイント URL を上書きする環境変数
pub const API_URL_VAR: &str = "COUNTRIES_API_URL";
/// HTTP タイムアウト（秒）を上書きする環境変数
pub const TIMEOUT_VAR: &str = "COUNTRIES_TIMEOUT";
/// ログファイルの出力先を指定する環境変数
pub const LOG_FILE_VAR: &str = "COUNTRIES_LOG_FILE";

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;
