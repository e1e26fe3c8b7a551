//! Country Browser のコア
//!
//! TUI と非対話モードの両方から使われる状態管理層。
//!
//! - `app`: Model/Msg/update
//! - `filter`: フィルタ述語
//! - `paginate`: ページ分割とページ番号ストリップ

mod app;
mod filter;
mod paginate;

pub use app::{update, Model, Msg};
pub use filter::FilterKind;
pub use paginate::{page_items, PageItem};
