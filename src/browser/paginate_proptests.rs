use super::*;
use proptest::prelude::*;

proptest! {
    /// ページ数は常に ceil(N / 10)
    #[test]
    fn prop_page_count_is_ceiling(total in 0usize..5_000) {
        let mut state = PageState::default();
        state.recompute(total);
        prop_assert_eq!(state.page_count, (total + ITEMS_PER_PAGE - 1) / ITEMS_PER_PAGE);
    }

    /// ページ選択後のスライスは dataset[offset..offset+10]
    #[test]
    fn prop_page_click_slices_dataset(total in 1usize..500, selected in 0usize..100) {
        let items: Vec<usize> = (0..total).collect();
        let mut state = PageState::default();
        state.recompute(total);

        let offset = state.offset_for(selected, total).unwrap();
        prop_assert_eq!(offset, (selected * ITEMS_PER_PAGE) % total);
        prop_assert!(offset < total);

        state.offset = offset;
        let slice = state.slice(&items);
        let end = (offset + ITEMS_PER_PAGE).min(total);
        prop_assert_eq!(slice, &items[offset..end]);
    }

    /// ストリップは選択ページを必ず含み、昇順で、省略記号は連続しない
    #[test]
    fn prop_page_items_well_formed(page_count in 1usize..200, selected_seed in 0usize..200) {
        let selected = selected_seed % page_count;
        let items = page_items(selected, page_count);

        prop_assert!(items.contains(&PageItem::Page(selected)));
        prop_assert_eq!(items.first(), Some(&PageItem::Page(0)));
        prop_assert_eq!(items.last(), Some(&PageItem::Page(page_count - 1)));

        let pages: Vec<usize> = items
            .iter()
            .filter_map(|item| match item {
                PageItem::Page(p) => Some(*p),
                PageItem::Break => None,
            })
            .collect();
        prop_assert!(pages.windows(2).all(|w| w[0] < w[1]));

        prop_assert!(!items
            .windows(2)
            .any(|w| w[0] == PageItem::Break && w[1] == PageItem::Break));
    }
}
