//! フィルタロジック
//!
//! 表示中のページスライスを、アクティブなフィルタで絞り込む。
//! 基準国の面積はスライスではなく全データセットから引く。

use crate::country::Country;

/// 「より小さい」フィルタの基準国
pub const REFERENCE_COUNTRY: &str = "Lithuania";
/// 地域フィルタの対象
pub const REGION_OCEANIA: &str = "Oceania";

/// アクティブなフィルタ（常に高々 1 つ）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    None,
    /// 基準国より面積が小さい
    SmallerThan(String),
    /// 地域が完全一致（大文字小文字を区別）
    InRegion(String),
}

impl Filter {
    /// フィルタバー上の対応するボタン
    pub fn kind(&self) -> Option<FilterKind> {
        FilterKind::all()
            .iter()
            .copied()
            .find(|kind| kind.to_filter() == *self)
    }
}

/// フィルタバーのボタン
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FilterKind {
    SmallerThanLithuania,
    InOceania,
}

impl FilterKind {
    pub fn all() -> &'static [FilterKind] {
        &[FilterKind::SmallerThanLithuania, FilterKind::InOceania]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterKind::SmallerThanLithuania => "Smaller Than Lithuania",
            FilterKind::InOceania => "In Oceania",
        }
    }

    pub fn to_filter(self) -> Filter {
        match self {
            FilterKind::SmallerThanLithuania => Filter::SmallerThan(REFERENCE_COUNTRY.to_string()),
            FilterKind::InOceania => Filter::InRegion(REGION_OCEANIA.to_string()),
        }
    }
}

/// ページスライスをフィルタで絞り込む
///
/// - `Filter::None` なら全件返却
/// - `SmallerThan`: 基準国が見つからない、または面積が欠けていれば何も通さない
/// - `InRegion`: 地域の完全一致
pub fn apply_filter<'a>(
    slice: &'a [Country],
    filter: &Filter,
    dataset: &[Country],
) -> Vec<&'a Country> {
    match filter {
        Filter::None => slice.iter().collect(),
        Filter::SmallerThan(reference) => {
            let reference_area = dataset
                .iter()
                .find(|c| c.name.as_deref() == Some(reference.as_str()))
                .and_then(|c| c.area);

            let Some(reference_area) = reference_area else {
                tracing::debug!(%reference, "reference country has no area; nothing matches");
                return Vec::new();
            };

            slice
                .iter()
                .filter(|c| c.area.is_some_and(|area| area < reference_area))
                .collect()
        }
        Filter::InRegion(region) => slice
            .iter()
            .filter(|c| c.region.as_deref() == Some(region.as_str()))
            .collect(),
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
