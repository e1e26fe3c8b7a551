//! Country Browser の Elm Architecture ベースの状態管理
//!
//! - `Model`: データセット + フィルタ + ページ状態を一つにまとめた所有レコード
//! - `Msg`: 読み込み完了・フィルタ操作・ページ操作
//! - `update`: メッセージを適用し、ページ状態を明示的に再計算する

use super::filter::{apply_filter, Filter, FilterKind};
use super::paginate::PageState;
use crate::country::Country;

// ============================================================================
// Phase（画面レベルの状態機械）
// ============================================================================

/// 読み込み状態
///
/// `Loading` → `Loaded` は空でないデータセットの初回読み込み時に一度だけ遷移する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Loading,
    Loaded,
}

// ============================================================================
// Msg（アプリケーションへのメッセージ）
// ============================================================================

/// アプリケーションへのメッセージ
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// 取得完了（ソート済み）
    Loaded(Vec<Country>),
    /// 取得失敗（ログのみ、画面は Loading のまま）
    LoadFailed(String),
    /// フィルタボタン
    SelectFilter(FilterKind),
    /// Reset ボタン
    ResetFilter,
    /// 0 始まりのページ番号を選択
    PageChange(usize),
    PrevPage,
    NextPage,
    FirstPage,
    LastPage,
    /// 省略記号（前方）
    JumpBackward,
    /// 省略記号（後方）
    JumpForward,
    /// 終了
    Quit,
}

// ============================================================================
// Model（アプリケーション全体の状態）
// ============================================================================

/// アプリケーション全体の状態
#[derive(Debug, Default)]
pub struct Model {
    /// 名前順にソート済みの全データ
    pub dataset: Vec<Country>,
    /// アクティブなフィルタ
    pub filter: Filter,
    /// ページ状態
    pub page: PageState,
    pub phase: Phase,
    /// 終了フラグ
    pub should_quit: bool,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == Phase::Loaded
    }

    /// 現在ページのスライス（フィルタ前）
    pub fn current_items(&self) -> &[Country] {
        self.page.slice(&self.dataset)
    }

    /// 現在ページにフィルタを適用した表示対象
    pub fn visible_items(&self) -> Vec<&Country> {
        apply_filter(self.current_items(), &self.filter, &self.dataset)
    }

    /// データセットまたはオフセットの変更後に呼ぶ
    fn recompute(&mut self) {
        self.page.recompute(self.dataset.len());
    }

    fn change_page(&mut self, selected: usize) {
        let Some(offset) = self.page.offset_for(selected, self.dataset.len()) else {
            return;
        };
        self.page.offset = offset;
        self.recompute();
        tracing::debug!(selected, offset, "page changed");
    }
}

// ============================================================================
// update（状態更新）
// ============================================================================

/// メッセージに応じて状態を更新
///
/// フィルタ変更時にオフセットはリセットしない。
pub fn update(model: &mut Model, msg: Msg) {
    match msg {
        Msg::Loaded(countries) => {
            if model.is_loaded() {
                tracing::debug!("dataset already loaded; ignoring");
                return;
            }
            model.dataset = countries;
            model.recompute();
            if !model.dataset.is_empty() {
                model.phase = Phase::Loaded;
            }
        }
        Msg::LoadFailed(reason) => {
            tracing::warn!(%reason, "failed to load countries");
        }
        Msg::SelectFilter(kind) => {
            model.filter = kind.to_filter();
        }
        Msg::ResetFilter => {
            model.filter = Filter::None;
        }
        Msg::PageChange(selected) => model.change_page(selected),
        Msg::PrevPage => {
            if model.page.has_previous() {
                model.change_page(model.page.selected() - 1);
            }
        }
        Msg::NextPage => {
            if model.page.has_next() {
                model.change_page(model.page.selected() + 1);
            }
        }
        Msg::FirstPage => model.change_page(0),
        Msg::LastPage => {
            if let Some(last) = model.page.page_count.checked_sub(1) {
                model.change_page(last);
            }
        }
        Msg::JumpBackward => model.change_page(model.page.jump_target(false)),
        Msg::JumpForward => {
            if model.page.page_count > 0 {
                model.change_page(model.page.jump_target(true));
            }
        }
        Msg::Quit => {
            model.should_quit = true;
        }
    }
}

#[cfg(test)]
#[path = "app_test.rs"]
mod tests;
