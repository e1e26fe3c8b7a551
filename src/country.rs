//! 国データモデル
//!
//! API から取得した 1 件分のレコード。どのフィールドも欠けうるため
//! すべて `Option` で受け、描画時に空欄として扱う。

mod collate;

pub use collate::compare_names;

use serde::{Deserialize, Serialize};

/// 国レコード（読み込み後は不変）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Country {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub independent: Option<bool>,
}

impl Country {
    /// 表示キーとしての名前（欠損時は空文字）
    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn region_str(&self) -> &str {
        self.region.as_deref().unwrap_or_default()
    }

    /// 面積の表示文字列（欠損時は空文字）
    pub fn area_label(&self) -> String {
        self.area.map(|a| a.to_string()).unwrap_or_default()
    }

    /// 独立国フラグの表示文字列
    pub fn independent_label(&self) -> &'static str {
        if self.independent == Some(true) {
            "Yes"
        } else {
            "NO"
        }
    }
}

/// 名前でロケール順にソート
pub fn sort_by_name(countries: &mut [Country]) {
    countries.sort_by(|a, b| compare_names(a.name_str(), b.name_str()));
}

#[cfg(test)]
#[path = "country_test.rs"]
mod tests;

#[cfg(test)]
#[path = "country_proptests.rs"]
mod proptests;
