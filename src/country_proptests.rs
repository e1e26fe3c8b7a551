use super::*;
use proptest::prelude::*;
use std::cmp::Ordering;

/// 大文字小文字・アクセント付き文字・記号を混ぜた国名
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-ZÅåÉéÔôçÇ' -]{0,12}".prop_map(|s| s)
}

proptest! {
    /// ソート後は隣接する名前が常に非減少
    #[test]
    fn prop_sorted_names_are_non_decreasing(raw in prop::collection::vec(name_strategy(), 0..40)) {
        let mut countries: Vec<Country> = raw
            .into_iter()
            .map(|name| Country {
                name: Some(name),
                ..Default::default()
            })
            .collect();
        sort_by_name(&mut countries);

        for pair in countries.windows(2) {
            prop_assert_ne!(
                compare_names(pair[0].name_str(), pair[1].name_str()),
                Ordering::Greater
            );
        }
    }

    /// 比較は反対称（a < b なら b > a）
    #[test]
    fn prop_compare_is_antisymmetric(a in name_strategy(), b in name_strategy()) {
        prop_assert_eq!(compare_names(&a, &b), compare_names(&b, &a).reverse());
    }
}
