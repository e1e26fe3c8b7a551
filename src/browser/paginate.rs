//! ページ分割
//!
//! オフセット/件数ベースのページ計算と、ページ番号ストリップ
//! （`< previous 1 2 ... 11 12 13 ... 24 25 next >`）のレイアウト計算。

/// 1 ページあたりの件数
pub const ITEMS_PER_PAGE: usize = 10;
/// 選択ページ周辺に表示するページ数
pub const PAGE_RANGE_DISPLAYED: usize = 5;
/// 両端に常に表示するページ数
pub const MARGIN_PAGES_DISPLAYED: usize = 2;

/// ページ状態
///
/// `page_count == ceil(total / items_per_page)`、`offset` は `items_per_page` の倍数。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub items_per_page: usize,
    pub offset: usize,
    pub page_count: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            items_per_page: ITEMS_PER_PAGE,
            offset: 0,
            page_count: 0,
        }
    }
}

impl PageState {
    /// 総件数からページ数を再計算
    pub fn recompute(&mut self, total: usize) {
        self.page_count = total.div_ceil(self.items_per_page);
    }

    /// 現在ページのスライス
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset.min(items.len());
        let end = self.offset.saturating_add(self.items_per_page).min(items.len());
        &items[start..end]
    }

    /// 現在の 0 始まりページ番号
    pub fn selected(&self) -> usize {
        self.offset / self.items_per_page
    }

    pub fn has_previous(&self) -> bool {
        self.selected() > 0
    }

    pub fn has_next(&self) -> bool {
        self.selected() + 1 < self.page_count
    }

    /// 0 始まりのページ番号から新しいオフセットを計算
    ///
    /// `(selected * items_per_page) mod total`。データが空なら `None`。
    pub fn offset_for(&self, selected: usize, total: usize) -> Option<usize> {
        (total > 0).then(|| selected.saturating_mul(self.items_per_page) % total)
    }

    /// 省略記号を押したときのジャンプ先ページ
    pub fn jump_target(&self, forward: bool) -> usize {
        let selected = self.selected();
        if forward {
            (selected + PAGE_RANGE_DISPLAYED).min(self.page_count.saturating_sub(1))
        } else {
            selected.saturating_sub(PAGE_RANGE_DISPLAYED)
        }
    }
}

/// ページ番号ストリップの要素
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// 0 始まりのページ番号
    Page(usize),
    /// 省略記号（`...`）
    Break,
}

/// ページ番号ストリップのレイアウトを計算
///
/// ページ数が `PAGE_RANGE_DISPLAYED` 以下なら全ページ。それ以外は両端の
/// `MARGIN_PAGES_DISPLAYED` ページと選択ページ周辺を表示し、間を省略記号で埋める。
/// 省略記号が 1 ページしか隠さない場合はそのページ番号に置き換える。
pub fn page_items(selected: usize, page_count: usize) -> Vec<PageItem> {
    if page_count <= PAGE_RANGE_DISPLAYED {
        return (0..page_count).map(PageItem::Page).collect();
    }

    // 半ページ単位の窓幅を扱うため f64 で計算する
    let range = PAGE_RANGE_DISPLAYED as f64;
    let sel = selected as f64;
    let count = page_count as f64;

    let mut left = range / 2.0;
    let mut right = range - left;
    if sel > count - range / 2.0 {
        right = count - sel;
        left = range - right;
    } else if sel < range / 2.0 {
        left = sel;
        right = range - left;
    }
    let adjusted_right = if selected == 0 && PAGE_RANGE_DISPLAYED > 1 {
        right - 1.0
    } else {
        right
    };

    let mut raw: Vec<(usize, PageItem)> = Vec::new();
    for index in 0..page_count {
        let page = index + 1;
        let in_margin =
            page <= MARGIN_PAGES_DISPLAYED || page > page_count - MARGIN_PAGES_DISPLAYED;
        let in_window = index as f64 >= sel - left && index as f64 <= sel + adjusted_right;

        if in_margin || in_window {
            raw.push((index, PageItem::Page(index)));
        } else if matches!(raw.last(), Some((_, PageItem::Page(_)))) {
            raw.push((index, PageItem::Break));
        }
    }

    raw.iter()
        .enumerate()
        .map(|(i, &(index, item))| {
            if item != PageItem::Break {
                return item;
            }
            let prev = i.checked_sub(1).and_then(|p| raw.get(p));
            let next = raw.get(i + 1);
            match (prev, next) {
                (Some(&(prev_index, PageItem::Page(_))), Some(&(next_index, PageItem::Page(_))))
                    if next_index - prev_index <= 2 =>
                {
                    PageItem::Page(index)
                }
                _ => item,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "paginate_test.rs"]
mod tests;

#[cfg(test)]
#[path = "paginate_proptests.rs"]
mod proptests;
