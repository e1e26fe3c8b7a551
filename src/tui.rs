//! TUI (Terminal User Interface)
//!
//! ratatui/crossterm を使用した国一覧ブラウザ。
//!
//! ## モジュール構成
//!
//! - `input`: キー入力をメッセージに変換
//! - `render`: 画面描画

mod input;
mod render;

use crate::browser::{update, Model, Msg};
use crate::config::AppConfig;
use crate::loader;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::{self, stdout, Stdout};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

pub use input::key_to_msg;
pub use render::view;

/// 入力待ちの間隔（この間隔で読み込み結果を確認する）
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// TUI を実行
///
/// 国一覧の取得は起動時に一度だけ別タスクで行い、結果はチャネル経由で
/// メインループに届く。取得に失敗しても画面は Loading のまま。
pub async fn run(config: AppConfig) -> io::Result<()> {
    let (tx, rx) = mpsc::unbounded_channel();

    let client = config.http.build_client();
    let endpoint = config.endpoint.clone();
    tokio::spawn(async move {
        let msg = match loader::load_countries(&client, &endpoint).await {
            Ok(countries) => Msg::Loaded(countries),
            Err(e) => {
                if !e.is_transport() {
                    tracing::error!(error = %e, "unexpected response from countries endpoint");
                }
                Msg::LoadFailed(e.to_string())
            }
        };
        // 受信側が先に終了していれば結果は捨てる
        let _ = tx.send(msg);
    });

    tokio::task::spawn_blocking(move || run_terminal(rx))
        .await
        .map_err(io::Error::other)?
}

/// ターミナルの設定・復元とメインループ
fn run_terminal(rx: UnboundedReceiver<Msg>) -> io::Result<()> {
    terminal::enable_raw_mode()?;

    with_restore(
        || stdout().execute(EnterAlternateScreen).map(|_| ()),
        || {
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
            event_loop(&mut terminal, rx)
        },
        restore_terminal,
    )
}

/// `enter` → `body` を実行し、どちらが失敗しても `restore` を必ず呼ぶ
///
/// エラーは `enter`/`body` のものを優先して返す。
fn with_restore<T>(
    enter: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let result = enter().and_then(|()| body());
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

/// raw モードと代替スクリーンを解除
fn restore_terminal() -> io::Result<()> {
    let raw = terminal::disable_raw_mode();
    stdout().execute(LeaveAlternateScreen)?;
    raw
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut rx: UnboundedReceiver<Msg>,
) -> io::Result<()> {
    let mut model = Model::new();

    while !model.should_quit {
        terminal.draw(|f| view(f, &model))?;

        while let Ok(msg) = rx.try_recv() {
            update(&mut model, msg);
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(msg) = key_to_msg(key) {
                        update(&mut model, msg);
                    }
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "tui_test.rs"]
mod tests;
