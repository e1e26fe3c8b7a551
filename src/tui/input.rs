//! キー入力処理
//!
//! キー操作がフィルタボタン・ページ操作のクリックに相当する。

use crate::browser::{FilterKind, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// キー入力をメッセージに変換
pub fn key_to_msg(key: KeyEvent) -> Option<Msg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Msg::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
        // フィルタバー
        KeyCode::Char('1') => Some(Msg::SelectFilter(FilterKind::SmallerThanLithuania)),
        KeyCode::Char('2') => Some(Msg::SelectFilter(FilterKind::InOceania)),
        KeyCode::Char('r') | KeyCode::Char('0') => Some(Msg::ResetFilter),
        // ページ操作
        KeyCode::Left | KeyCode::Char('h') => Some(Msg::PrevPage),
        KeyCode::Right | KeyCode::Char('l') => Some(Msg::NextPage),
        KeyCode::Home | KeyCode::Char('g') => Some(Msg::FirstPage),
        KeyCode::End | KeyCode::Char('G') => Some(Msg::LastPage),
        KeyCode::PageUp => Some(Msg::JumpBackward),
        KeyCode::PageDown => Some(Msg::JumpForward),
        _ => None,
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
